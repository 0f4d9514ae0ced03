use utoipa::OpenApi;
use crate::controllers::estimate_controller;
use crate::models::{estimate, reference};

#[derive(OpenApi)]
#[openapi(
    paths(
        estimate_controller::post_estimate,
        estimate_controller::post_heat_map,
        estimate_controller::list_cities,
        estimate_controller::list_panels
    ),
    components(
        schemas(
            estimate::EstimateRequest,
            estimate::EstimateResponse,
            estimate::Estimate,
            estimate::BrandQuote,
            estimate::Preferences,
            estimate::Recommendation,
            estimate::HeatMapRequest,
            estimate::HeatMapResponse,
            estimate::HeatMap,
            estimate::CityColor,
            estimate::HeatColor,
            estimate::CitySummary,
            estimate::PanelListing,
            reference::PanelBrand
        )
    ),
    tags(
        (name = "solar-viability", description = "Residential Solar Viability API")
    )
)]
pub struct ApiDoc;
