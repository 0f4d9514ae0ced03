pub mod estimate_routes;

use axum::{Router, response::Html, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::api_docs::ApiDoc;
use crate::routes::estimate_routes::estimate_routes;
use crate::shared_state::AppState;

/// Full application router: JSON API under `/api`, docs under `/scalar`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", estimate_routes(state))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::services::reference_data::{CityTable, ReferenceData};
    use crate::services::test_support::{catalog, city_at, reference_city};

    fn state() -> AppState {
        let cities = CityTable::from_cities([reference_city(), city_at("B", 10.0, 10.0)]).unwrap();
        AppState::new(ReferenceData::new(cities, catalog()))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn estimate_endpoint_returns_nearest_city() {
        let body = json!({ "north": 11.0, "west": 9.0, "house_size_sqft": 2000.0 });
        let (status, value) = send(app(state()), "POST", "/api/estimate", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["estimate"]["city"], "B");
        assert_eq!(value["estimate"]["quotes"].as_array().unwrap().len(), 6);
        assert_eq!(value["estimate"]["recommendation"], "not_recommended");
        assert_eq!(value["estimate"]["preferences"]["max_efficiency"], "Samsung");
    }

    #[tokio::test]
    async fn non_positive_house_size_is_bad_request() {
        let body = json!({ "north": 40.0, "west": 70.0, "house_size_sqft": 0.0 });
        let (status, value) = send(app(state()), "POST", "/api/estimate", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(value["error"].as_str().unwrap().contains("house_size_sqft"));
    }

    #[tokio::test]
    async fn empty_reference_is_unavailable() {
        let empty = AppState::new(ReferenceData::new(CityTable::new(), catalog()));
        let body = json!({ "north": 40.0, "west": 70.0, "house_size_sqft": 1000.0 });
        let (status, _) = send(app(empty), "POST", "/api/estimate", Some(body)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn heat_map_endpoint_covers_all_cities() {
        let body = json!({ "house_size_sqft": 1500.0 });
        let (status, value) = send(app(state()), "POST", "/api/heatmap", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        let map = &value["heat_map"];
        assert_eq!(map["cities"].as_array().unwrap().len(), 2);
        assert_eq!(map["red"], json!(["A", "B"]));
        assert_eq!(map["red_percent"], 100.0);
    }

    #[tokio::test]
    async fn catalog_endpoints() {
        let (status, cities) = send(app(state()), "GET", "/api/cities", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cities[0]["name"], "A");

        let (status, panels) = send(app(state()), "GET", "/api/panels", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(panels.as_array().unwrap().len(), 6);
        assert_eq!(panels[5]["brand"], "GrapeSolar250");
    }
}
