use solar_viability::config::Config;
use solar_viability::routes::app;
use solar_viability::services::reference_data::ReferenceData;
use solar_viability::shared_state::AppState;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Respects RUST_LOG, defaults to info
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Load configuration
    let config = match Config::load("config.json") {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config.json: {}", e);
            return;
        }
    };

    // 2. Load reference tables once; they stay read-only for the process lifetime
    let reference = match ReferenceData::load(&config.data.cities_path, &config.data.panels_path) {
        Ok(r) => r,
        Err(e) => {
            error!("Failed to load reference data: {}", e);
            return;
        }
    };
    if reference.cities.is_empty() {
        warn!(
            path = %config.data.cities_path.display(),
            "City table is empty; estimates will report no reference data"
        );
    }

    // 3. Shared state
    let state = AppState::new(reference);

    // 4. Start HTTP server
    let addr = match config.listen_addr() {
        Ok(a) => a,
        Err(e) => {
            error!("Invalid listen address: {}", e);
            return;
        }
    };
    info!("API Server listening on http://{}", addr);
    info!("Scalar UI: http://{}/scalar", addr);

    if let Err(e) = axum_server::bind(addr)
        .serve(app(state).into_make_service())
        .await
    {
        error!("HTTP server error: {}", e);
    }
}
