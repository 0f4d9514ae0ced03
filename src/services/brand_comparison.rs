use crate::models::estimate::BrandQuote;
use crate::models::reference::{City, PanelBrand, PanelSpec};
use crate::services::reference_data::PanelCatalog;
use crate::services::solar_output::{MONTHS_PER_YEAR, square_meters};

/// Dollar amount per unit of a city's installation cost factor.
pub const INSTALLATION_COST_PER_FACTOR: f64 = 5000.0;

pub fn installation_cost(city: &City) -> f64 {
    city.installation_cost_factor * INSTALLATION_COST_PER_FACTOR
}

/// Panels of this brand needed to cover the city's household demand.
///
/// One panel contributes the modeled annual yield per m² times its own area;
/// the demand is divided by that and truncated. A location with no yield
/// gets zero panels rather than an unbounded count.
pub fn panel_count(spec: &PanelSpec, city: &City, monthly_output: f64, house_size_sqft: f64) -> u32 {
    let yield_per_m2 = monthly_output * MONTHS_PER_YEAR / square_meters(house_size_sqft);
    let per_panel = yield_per_m2 * spec.unit_area_m2;
    if per_panel.is_nan() || per_panel <= 0.0 {
        return 0;
    }
    let panels = (city.average_monthly_energy_units / per_panel).floor();
    if panels > 0.0 { panels as u32 } else { 0 }
}

pub fn brand_cost(spec: &PanelSpec, panel_count: u32, city: &City) -> f64 {
    spec.unit_price * f64::from(panel_count) + installation_cost(city)
}

/// Panel count and total cost for every brand, in catalog order.
pub fn compare_brands(
    catalog: &PanelCatalog,
    city: &City,
    monthly_output: f64,
    house_size_sqft: f64,
) -> [BrandQuote; PanelBrand::COUNT] {
    PanelBrand::ALL.map(|brand| {
        let spec = catalog.spec(brand);
        let panel_count = panel_count(spec, city, monthly_output, house_size_sqft);
        BrandQuote {
            brand,
            panel_count,
            cost_usd: brand_cost(spec, panel_count, city),
        }
    })
}
