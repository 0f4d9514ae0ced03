use tracing::debug;

use crate::error::EngineError;
use crate::models::estimate::Estimate;
use crate::services::reference_data::ReferenceData;
use crate::services::{
    brand_comparison, city_resolver, preferences, recommendation, solar_output,
};

/// Cuts a figure to two decimals toward zero, the way results are displayed.
pub fn truncate_2dp(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}

/// Full recommendation for a house of `house_size_sqft` at (`north`, `west`).
///
/// Callers must pass finite coordinates and a positive house size.
pub fn estimate(
    reference: &ReferenceData,
    north: f64,
    west: f64,
    house_size_sqft: f64,
) -> Result<Estimate, EngineError> {
    let nearest = city_resolver::resolve(&reference.cities, north, west)?;
    let city = nearest.city;

    // Tier and quotes work from the displayed figures so they never disagree.
    let output = truncate_2dp(solar_output::standard_output(city, house_size_sqft));
    let optimal = truncate_2dp(solar_output::optimal_output(city, house_size_sqft));
    let usage = truncate_2dp(recommendation::scaled_usage(city, house_size_sqft));
    let tier = recommendation::classify(usage, output);

    let quotes = brand_comparison::compare_brands(&reference.panels, city, output, house_size_sqft);
    let picks = preferences::select(&quotes, &reference.panels, city, house_size_sqft);

    debug!(
        city = %city.name,
        distance = nearest.distance,
        output,
        usage,
        ?tier,
        "Estimate computed"
    );

    Ok(Estimate {
        city: city.name.clone(),
        distance: nearest.distance,
        monthly_output_kwh: output,
        optimal_tilt_angle: solar_output::optimal_angle(city),
        optimal_output_kwh: optimal,
        monthly_usage_kwh: usage,
        recommendation: tier,
        installation_cost_usd: brand_comparison::installation_cost(city),
        servicing_companies: city.servicing_companies.clone(),
        quotes: quotes.to_vec(),
        preferences: picks,
    })
}
