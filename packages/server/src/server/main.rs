// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use gemini_client::GeminiClient;
use server_core::domains::auth::JwtService;
use server_core::kernel::{
    BannerClient, GeminiGenerative, NoopImageGenerator, NoopVideoSearch, PostgresCourseStore,
    ServerDeps, YoutubeClient,
};
use server_core::server::build_app;
use server_core::Config;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CourseForge API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    // Wire dependencies; auxiliary services fall back to no-ops when keys
    // are missing so the core pipeline still runs (degraded).
    let generative = Arc::new(GeminiGenerative::new(GeminiClient::new(
        config.gemini_api_key.clone(),
    )));
    let image: Arc<dyn server_core::kernel::BaseImageGenerator> = match &config.banner_api_key {
        Some(key) => Arc::new(BannerClient::new(key.clone())?),
        None => Arc::new(NoopImageGenerator),
    };
    let video: Arc<dyn server_core::kernel::BaseVideoSearch> = match &config.youtube_api_key {
        Some(key) => Arc::new(YoutubeClient::new(key.clone())?),
        None => Arc::new(NoopVideoSearch),
    };
    let store = Arc::new(PostgresCourseStore::new(pool.clone()));

    let deps = Arc::new(ServerDeps::new(store, generative, image, video));
    let jwt_service = Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.clone()));

    // Build application
    let app = build_app(pool, deps, jwt_service);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
