//! Storyloom API server entry point.

use std::error::Error;
use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use storyloom_api::config::AppConfig;
use storyloom_api::state::AppState;
use storyloom_core::clock::SystemClock;
use storyloom_save_store::schema::ensure_schema;
use storyloom_save_store::sqlite_save_repository::SqliteSaveRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Storyloom API server");

    // Read configuration from environment.
    let config = AppConfig::from_env()?;

    // Open the save store, creating the database file and table if needed.
    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await?;
    ensure_schema(&pool).await?;

    // Select the narrator once; turns never check for it again.
    if config.narrator.enabled {
        tracing::info!(
            model = %config.narrator.model,
            base_url = %config.narrator.base_url,
            language = %config.narrator.language,
            has_api_key = config.narrator.api_key.is_some(),
            "narrator enabled"
        );
    } else {
        tracing::warn!("narrator disabled; every turn will use the fallback narration");
    }
    let narrator = config.narrator.build();

    // Build application state.
    let app_state = AppState::new(
        Arc::new(SystemClock),
        narrator,
        Arc::new(SqliteSaveRepository::new(pool)),
        config.narrator.timeout,
    );

    let app = storyloom_api::build_router(app_state);

    // Start server.
    let addr = config.bind_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
