pub mod api_docs;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod shared_state;

pub use error::{EngineError, LoadError};
pub use models::estimate::{Estimate, HeatColor, HeatMap, Recommendation};
pub use models::reference::{City, MountingMode, PanelBrand, PanelSpec};
pub use services::reference_data::{CityTable, PanelCatalog, ReferenceData};
