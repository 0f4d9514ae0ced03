use crate::error::EngineError;
use crate::models::reference::City;
use crate::services::reference_data::CityTable;

/// The closest known city to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestCity<'a> {
    pub city: &'a City,
    pub distance: f64,
}

/// Straight-line distance in raw coordinate space.
pub fn distance(city: &City, north: f64, west: f64) -> f64 {
    ((north - city.coord_north).powi(2) + (west - city.coord_west).powi(2)).sqrt()
}

/// Finds the city nearest to (`north`, `west`).
///
/// Equidistant candidates resolve to the lexicographically smallest name, so
/// the result never depends on table order.
pub fn resolve(table: &CityTable, north: f64, west: f64) -> Result<NearestCity<'_>, EngineError> {
    table
        .iter()
        .map(|city| NearestCity {
            city,
            distance: distance(city, north, west),
        })
        .min_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.city.name.cmp(&b.city.name))
        })
        .ok_or(EngineError::NoReferenceData)
}
