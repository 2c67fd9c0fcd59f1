//! Capital quiz API server entry point.

use std::sync::Arc;

use geoquiz_core::history::ScoreHistoryStore;
use geoquiz_history::{InMemoryHistoryStore, JsonFileHistoryStore};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use geoquiz_api::config::ServerConfig;
use geoquiz_api::error::AppError;
use geoquiz_api::routes;
use geoquiz_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting capital quiz API server");

    let config = ServerConfig::from_env()?;

    let history: Arc<dyn ScoreHistoryStore> = match &config.data_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "persisting score history to disk");
            Arc::new(JsonFileHistoryStore::new(dir))
        }
        None => {
            tracing::info!("GEOQUIZ_DATA_DIR not set; score history kept in memory");
            Arc::new(InMemoryHistoryStore::new())
        }
    };

    let app_state =
        AppState::production(history, config.timing).with_session_limits(config.sessions);

    // TODO: Replace CorsLayer::permissive() with the front-end origin once it is hosted.
    let app = routes::router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
