//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! rendered by `heroes::HeroesError`.

mod config;

use axum::{
    Router, http,
    http::{Method, header},
};
use config::ServerConfig;
use heroes::infra::{schema, seed};
use heroes::{heroes_router, store::HeroesStore};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,heroes=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Database connection; a file-backed store is created on first start
    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(connect_options)
        .await?;

    tracing::info!(database_url = %config.database_url, "Connected to database");

    // Schema is in place before the listener accepts traffic
    schema::run_migrations(&pool).await?;

    tracing::info!("Migrations completed");

    if config.seed_database {
        // Errors here should not prevent server startup
        match seed::seed_sample_data(&pool).await {
            Ok(report) => {
                tracing::info!(
                    heroes = report.heroes,
                    powers = report.powers,
                    hero_powers = report.hero_powers,
                    "Seeding completed"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Seeding failed, continuing anyway");
            }
        }
    }

    let store = HeroesStore::new(pool.clone());

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    // Build router
    let app = Router::new()
        .merge(heroes_router(store))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    pool.close().await;

    Ok(())
}
