use crate::models::estimate::Recommendation;
use crate::models::reference::City;

/// Divides the raw usage figure into per-square-foot terms.
pub const USAGE_SCALE_DIVISOR: f64 = 2000.0;
/// Surplus (kWh/month) at which solar becomes highly recommended.
pub const HIGH_SURPLUS_KWH: f64 = 50.0;

/// Modeled household usage in kWh per month.
pub fn scaled_usage(city: &City, house_size_sqft: f64) -> f64 {
    city.average_monthly_energy_units / USAGE_SCALE_DIVISOR * house_size_sqft
}

pub fn classify(usage: f64, output: f64) -> Recommendation {
    let deficit = output - usage;
    if deficit <= 0.0 {
        Recommendation::NotRecommended
    } else if deficit < HIGH_SURPLUS_KWH {
        Recommendation::Recommended
    } else {
        Recommendation::HighlyRecommended
    }
}
