use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use booking_cell::BookingService;
use catalog_cell::Catalog;
use phong_kham_api::router;
use shared_config::AppConfig;
use shared_utils::SystemClock;

// Local development frontends allowed to call the API.
const ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:4200",
    "http://localhost:3000",
    "http://127.0.0.1:4200",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Khởi động Phòng Khám Tâm Thần Kinh API...");

    // Load configuration
    let config = AppConfig::from_env();

    // Seed the immutable catalog and check its invariants before serving
    let catalog = Arc::new(Catalog::seeded());
    catalog
        .validate()
        .context("catalog seed data violates its invariants")?;

    let booking = Arc::new(BookingService::new(
        Arc::clone(&catalog),
        Arc::new(SystemClock),
    ));

    // CORS: fixed allow-list of local development origins. Credentials rule
    // out wildcards, so methods and headers mirror the request instead.
    let origins = ALLOWED_ORIGINS
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .context("invalid CORS origin")?;
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    // Build the application router
    let app = router::create_router(catalog, booking)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors);

    // Run the server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("invalid HOST/PORT")?;
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
