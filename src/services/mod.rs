pub mod brand_comparison;
pub mod city_resolver;
pub mod estimate_service;
pub mod heat_map;
pub mod preferences;
pub mod recommendation;
pub mod reference_data;
pub mod solar_output;

#[cfg(test)]
pub(crate) mod test_support;
