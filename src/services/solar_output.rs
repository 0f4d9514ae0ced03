//! Monthly photovoltaic output model.
//!
//!   E = A_house × η × H × PR
//!
//! with the house footprint A in m², panel efficiency η as a percent number,
//! the city's radiation H for the chosen mounting mode and a fixed
//! performance ratio PR. H is an annual figure, so E is divided by 12.

use crate::models::reference::{City, MountingMode};

pub const SQFT_TO_SQM: f64 = 0.092903;
pub const PERFORMANCE_RATIO: f64 = 0.75;
/// Efficiency assumed when no brand is chosen (percent).
pub const STANDARD_EFFICIENCY_PERCENT: f64 = 15.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

pub fn square_meters(house_size_sqft: f64) -> f64 {
    house_size_sqft * SQFT_TO_SQM
}

/// Expected output in kWh per month.
pub fn monthly_output(
    city: &City,
    mode: MountingMode,
    efficiency_percent: f64,
    house_size_sqft: f64,
) -> f64 {
    let annual = square_meters(house_size_sqft)
        * efficiency_percent
        * city.radiation(mode)
        * PERFORMANCE_RATIO;
    annual / MONTHS_PER_YEAR
}

/// Output at the standard efficiency with horizontally mounted panels.
pub fn standard_output(city: &City, house_size_sqft: f64) -> f64 {
    monthly_output(city, MountingMode::Horizontal, STANDARD_EFFICIENCY_PERCENT, house_size_sqft)
}

/// Output at the standard efficiency with panels at the optimal tilt.
pub fn optimal_output(city: &City, house_size_sqft: f64) -> f64 {
    monthly_output(city, MountingMode::Optimal, STANDARD_EFFICIENCY_PERCENT, house_size_sqft)
}

pub fn optimal_angle(city: &City) -> f64 {
    city.optimal_tilt_angle
}
