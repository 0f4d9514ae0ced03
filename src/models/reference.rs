use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─── Cities ──────────────────────────────────────────────────────────────────

/// One row of the city reference table.
///
/// Coordinates are raw figures from the source table and are only ever
/// compared as flat 2-D points, never as geodesic latitude/longitude.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct City {
    pub name: String,
    pub coord_north: f64,
    pub coord_west: f64,
    /// Informational only
    pub temperature: f64,
    /// Radiation for flat-mounted panels
    pub horizontal_radiation: f64,
    /// Tilt angle that maximises yield at this location (deg)
    pub optimal_tilt_angle: f64,
    /// Radiation for panels mounted at `optimal_tilt_angle`
    pub optimal_tilt_radiation: f64,
    /// Household usage figure, scaled by house size before use
    pub average_monthly_energy_units: f64,
    /// Multiplied by a fixed dollar amount to get the install cost
    pub installation_cost_factor: f64,
    pub servicing_companies: Vec<String>,
}

/// How the panels sit on the roof, selecting which radiation figure applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MountingMode {
    Horizontal,
    Optimal,
}

impl City {
    pub fn radiation(&self, mode: MountingMode) -> f64 {
        match mode {
            MountingMode::Horizontal => self.horizontal_radiation,
            MountingMode::Optimal => self.optimal_tilt_radiation,
        }
    }
}

// ─── Panel brands ────────────────────────────────────────────────────────────

/// The closed catalog of panel brands. Declaration order is the display and
/// tie-break order used by every comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum PanelBrand {
    Suntech,
    Samsung,
    Kyocera,
    CanadianSolar,
    GrapeSolar390W,
    GrapeSolar250,
}

impl PanelBrand {
    pub const COUNT: usize = 6;

    pub const ALL: [PanelBrand; Self::COUNT] = [
        PanelBrand::Suntech,
        PanelBrand::Samsung,
        PanelBrand::Kyocera,
        PanelBrand::CanadianSolar,
        PanelBrand::GrapeSolar390W,
        PanelBrand::GrapeSolar250,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Name as it appears in the panel table.
    pub fn name(self) -> &'static str {
        match self {
            PanelBrand::Suntech => "Suntech",
            PanelBrand::Samsung => "Samsung",
            PanelBrand::Kyocera => "Kyocera",
            PanelBrand::CanadianSolar => "CanadianSolar",
            PanelBrand::GrapeSolar390W => "GrapeSolar390W",
            PanelBrand::GrapeSolar250 => "GrapeSolar250",
        }
    }
}

impl fmt::Display for PanelBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBrand(pub String);

impl FromStr for PanelBrand {
    type Err = UnknownBrand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelBrand::ALL
            .into_iter()
            .find(|brand| brand.name() == s)
            .ok_or_else(|| UnknownBrand(s.to_string()))
    }
}

/// Physical and commercial figures for one brand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
pub struct PanelSpec {
    /// Percent as a plain number: 15.0 means 15 %
    pub efficiency_percent: f64,
    /// Informational only
    pub wattage: f64,
    /// Area of one panel in m²
    pub unit_area_m2: f64,
    /// Price of one panel in dollars
    pub unit_price: f64,
}
