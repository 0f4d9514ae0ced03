use crate::models::reference::{City, PanelBrand, PanelSpec};
use crate::services::reference_data::PanelCatalog;

/// City `A`: north 40, west 70, radiation 5.0 / 6.0, usage 20000, cost factor 2.
pub fn reference_city() -> City {
    City {
        name: "A".to_string(),
        coord_north: 40.0,
        coord_west: 70.0,
        temperature: 12.0,
        horizontal_radiation: 5.0,
        optimal_tilt_angle: 38.5,
        optimal_tilt_radiation: 6.0,
        average_monthly_energy_units: 20000.0,
        installation_cost_factor: 2.0,
        servicing_companies: vec!["Sunrun".to_string(), "Vivint".to_string()],
    }
}

pub fn city_at(name: &str, north: f64, west: f64) -> City {
    City {
        name: name.to_string(),
        coord_north: north,
        coord_west: west,
        ..reference_city()
    }
}

pub fn city_with(name: &str, horizontal_radiation: f64, average_monthly_energy_units: f64) -> City {
    City {
        name: name.to_string(),
        horizontal_radiation,
        average_monthly_energy_units,
        ..reference_city()
    }
}

pub fn catalog() -> PanelCatalog {
    let spec = |efficiency_percent, wattage, unit_area_m2, unit_price| PanelSpec {
        efficiency_percent,
        wattage,
        unit_area_m2,
        unit_price,
    };
    let mut specs = [PanelSpec::default(); PanelBrand::COUNT];
    specs[PanelBrand::Suntech.index()] = spec(16.4, 275.0, 1.63, 210.0);
    specs[PanelBrand::Samsung.index()] = spec(19.8, 360.0, 1.70, 350.0);
    specs[PanelBrand::Kyocera.index()] = spec(16.1, 265.0, 1.65, 230.0);
    specs[PanelBrand::CanadianSolar.index()] = spec(17.1, 290.0, 1.62, 240.0);
    specs[PanelBrand::GrapeSolar390W.index()] = spec(15.4, 390.0, 2.60, 470.0);
    specs[PanelBrand::GrapeSolar250.index()] = spec(15.2, 250.0, 1.62, 190.0);
    PanelCatalog::new(specs)
}
