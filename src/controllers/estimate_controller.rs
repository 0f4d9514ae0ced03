use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::error::EngineError;
use crate::models::estimate::{
    CitySummary, EstimateRequest, EstimateResponse, HeatMapRequest, HeatMapResponse, PanelListing,
};
use crate::services::{estimate_service, heat_map};
use crate::shared_state::AppState;

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

fn engine_error(err: EngineError) -> Response {
    match err {
        EngineError::NoReferenceData => error_body(StatusCode::SERVICE_UNAVAILABLE, err.to_string()),
        // Only from CityTable::get; none of these handlers look cities up by name.
        EngineError::UnknownCity(_) => {
            error!("City lookup failed: {}", err);
            error_body(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

/// POST /api/estimate
/// Estimate solar viability for a home
///
/// Matches the coordinates to the nearest reference city and returns modeled
/// output, usage, recommendation tier, per-brand panel counts and costs, and
/// the cheapest / highest-output / most-efficient brand picks.
#[utoipa::path(
    post,
    path = "/api/estimate",
    request_body = EstimateRequest,
    responses(
        (status = 200, description = "Estimate for the nearest reference city", body = EstimateResponse),
        (status = 400, description = "Invalid coordinates or house size"),
        (status = 503, description = "No reference data loaded")
    )
)]
pub async fn post_estimate(
    State(state): State<AppState>,
    Json(req): Json<EstimateRequest>,
) -> impl IntoResponse {
    if let Err(msg) = req.validate() {
        return error_body(StatusCode::BAD_REQUEST, msg);
    }
    match estimate_service::estimate(&state.reference, req.north, req.west, req.house_size_sqft) {
        Ok(estimate) => {
            info!(
                "[ESTIMATE] ({:.2}, {:.2}) {} sqft → {} ({})",
                req.north,
                req.west,
                req.house_size_sqft,
                estimate.city,
                estimate.recommendation.phrase()
            );
            let response = EstimateResponse {
                timestamp: chrono::Utc::now(),
                estimate,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => engine_error(err),
    }
}

/// POST /api/heatmap
/// Classify every reference city for a house size
///
/// Returns each city's color in table order, the red/yellow/green name lists
/// and the share of cities in each color.
#[utoipa::path(
    post,
    path = "/api/heatmap",
    request_body = HeatMapRequest,
    responses(
        (status = 200, description = "Heat map over all reference cities", body = HeatMapResponse),
        (status = 400, description = "Invalid house size")
    )
)]
pub async fn post_heat_map(
    State(state): State<AppState>,
    Json(req): Json<HeatMapRequest>,
) -> impl IntoResponse {
    if let Err(msg) = req.validate() {
        return error_body(StatusCode::BAD_REQUEST, msg);
    }
    let map = heat_map::heat_map(&state.reference.cities, req.house_size_sqft);
    info!(
        "[HEATMAP] {} sqft → red {:.1}% | yellow {:.1}% | green {:.1}%",
        req.house_size_sqft, map.red_percent, map.yellow_percent, map.green_percent
    );
    let response = HeatMapResponse {
        timestamp: chrono::Utc::now(),
        heat_map: map,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/cities
/// List reference cities
#[utoipa::path(
    get,
    path = "/api/cities",
    responses(
        (status = 200, description = "Reference cities in table order", body = Vec<CitySummary>)
    )
)]
pub async fn list_cities(State(state): State<AppState>) -> impl IntoResponse {
    let cities: Vec<CitySummary> = state
        .reference
        .cities
        .iter()
        .map(|c| CitySummary {
            name: c.name.clone(),
            coord_north: c.coord_north,
            coord_west: c.coord_west,
        })
        .collect();
    Json(cities).into_response()
}

/// GET /api/panels
/// List the panel-brand catalog
#[utoipa::path(
    get,
    path = "/api/panels",
    responses(
        (status = 200, description = "The six catalog brands in fixed order", body = Vec<PanelListing>)
    )
)]
pub async fn list_panels(State(state): State<AppState>) -> impl IntoResponse {
    let panels: Vec<PanelListing> = state
        .reference
        .panels
        .iter()
        .map(|(brand, spec)| PanelListing::new(brand, spec))
        .collect();
    Json(panels).into_response()
}
