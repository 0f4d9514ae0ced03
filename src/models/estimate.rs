use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::reference::{PanelBrand, PanelSpec};

// ─── Classification ──────────────────────────────────────────────────────────

/// Recommendation tier from comparing modeled output with modeled usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    NotRecommended,
    Recommended,
    HighlyRecommended,
}

impl Recommendation {
    /// Phrase used when rendering "solar energy ... for your home".
    pub fn phrase(self) -> &'static str {
        match self {
            Recommendation::NotRecommended => "is not recommended",
            Recommendation::Recommended => "is recommended",
            Recommendation::HighlyRecommended => "is highly recommended",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HeatColor {
    Red,
    Yellow,
    Green,
}

impl HeatColor {
    /// Marker color used by the map front end.
    pub fn hex_code(self) -> &'static str {
        match self {
            HeatColor::Red => "#FF0000",
            HeatColor::Yellow => "#FFFF00",
            HeatColor::Green => "#008000",
        }
    }
}

// ─── Brand comparison ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct BrandQuote {
    pub brand: PanelBrand,
    /// Panels needed to cover the household's demand
    pub panel_count: u32,
    /// Panels plus installation (dollars)
    pub cost_usd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Preferences {
    pub min_cost: PanelBrand,
    pub max_output: PanelBrand,
    pub max_efficiency: PanelBrand,
}

impl Preferences {
    /// Picks in presentation order: cheapest, highest output, most efficient.
    pub fn as_list(&self) -> [PanelBrand; 3] {
        [self.min_cost, self.max_output, self.max_efficiency]
    }
}

// ─── Per-home estimate ───────────────────────────────────────────────────────

/// Everything the engine reports for one (location, house size) query.
/// kWh figures are monthly and cut to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Estimate {
    pub city: String,
    /// Flat distance between the query point and the matched city
    pub distance: f64,
    pub monthly_output_kwh: f64,
    pub optimal_tilt_angle: f64,
    pub optimal_output_kwh: f64,
    pub monthly_usage_kwh: f64,
    pub recommendation: Recommendation,
    pub installation_cost_usd: f64,
    pub servicing_companies: Vec<String>,
    /// One quote per brand, in catalog order
    pub quotes: Vec<BrandQuote>,
    pub preferences: Preferences,
}

// ─── Heat map ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CityColor {
    pub city: String,
    pub color: HeatColor,
    /// Standard horizontal output minus scaled usage (kWh/month)
    pub energy_balance_kwh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HeatMap {
    /// Every city, in reference-table order
    pub cities: Vec<CityColor>,
    /// Hex marker colors, parallel to `cities`
    pub display_colors: Vec<String>,
    pub red: Vec<String>,
    pub yellow: Vec<String>,
    pub green: Vec<String>,
    pub red_percent: f64,
    pub yellow_percent: f64,
    pub green_percent: f64,
}

// ─── REST API request / response types ──────────────────────────────────────

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EstimateRequest {
    pub north: f64,
    pub west: f64,
    pub house_size_sqft: f64,
}

impl EstimateRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !self.north.is_finite() || !self.west.is_finite() {
            return Err("coordinates must be finite numbers".to_string());
        }
        validate_house_size(self.house_size_sqft)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct HeatMapRequest {
    pub house_size_sqft: f64,
}

impl HeatMapRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_house_size(self.house_size_sqft)
    }
}

fn validate_house_size(house_size_sqft: f64) -> Result<(), String> {
    if house_size_sqft.is_finite() && house_size_sqft > 0.0 {
        Ok(())
    } else {
        Err(format!("house_size_sqft must be a positive number, got {house_size_sqft}"))
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EstimateResponse {
    pub timestamp: DateTime<Utc>,
    pub estimate: Estimate,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HeatMapResponse {
    pub timestamp: DateTime<Utc>,
    pub heat_map: HeatMap,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CitySummary {
    pub name: String,
    pub coord_north: f64,
    pub coord_west: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PanelListing {
    pub brand: PanelBrand,
    pub efficiency_percent: f64,
    pub wattage: f64,
    pub unit_area_m2: f64,
    pub unit_price: f64,
}

impl PanelListing {
    pub fn new(brand: PanelBrand, spec: &PanelSpec) -> Self {
        Self {
            brand,
            efficiency_percent: spec.efficiency_percent,
            wattage: spec.wattage,
            unit_area_m2: spec.unit_area_m2,
            unit_price: spec.unit_price,
        }
    }
}
