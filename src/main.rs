use dotenvy::dotenv;
use ecopoints::{
    api::{AppState, router},
    config::{database, materials},
    errors::Result,
};
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok();

    // 3. Initialize the database
    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to the database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create database tables: {}", e))?;

    // 4. Seed the material catalog (non-fatal when config.toml is absent)
    match materials::load_default_config() {
        Ok(config) => {
            materials::seed_materials(&db, &config).await?;
        }
        Err(e) => warn!("No material seed config loaded: {}", e),
    }

    // 5. Serve
    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, router(AppState::new(db)))
        .await
        .map_err(Into::into)
}
