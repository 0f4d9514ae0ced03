use axum::{
    Router,
    routing::{get, post},
};

use crate::controllers::estimate_controller::{list_cities, list_panels, post_estimate, post_heat_map};
use crate::shared_state::AppState;

/// Build the `/api/*` sub-router.
pub fn estimate_routes(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(post_estimate))
        .route("/heatmap", post(post_heat_map))
        .route("/cities", get(list_cities))
        .route("/panels", get(list_panels))
        .with_state(state)
}
