mod model;
mod server;

use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config, error::AppError, export::SnapshotExporter, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "scoreboard=info,tower_http=info".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let exporter = SnapshotExporter::new(config.snapshot_path.clone());

    tracing::info!("Starting server");

    let router = server::router::router()
        .with_state(AppState::new(db, exporter))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
