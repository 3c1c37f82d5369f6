use std::sync::Arc;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{self, TraceLayer};
use tracing::{Level, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod router;

use patient_cell::PatientContext;
use shared_config::AppConfig;

// One thread: store dispatches and fetch completions share a single cooperative loop.
#[tokio::main(flavor = "current_thread")]
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

    info!("Starting Patientor");

    let config = AppConfig::from_env();
    info!("Reading patients from {}", config.api_base_url);

    let context = Arc::new(PatientContext::new(&config));

    // Completions dispatch into the store whenever they land; views render whatever is there.
    let initial_load = context.sync.spawn_initial_load();
    tokio::spawn(async move {
        match initial_load.await {
            Ok(summary) => info!(
                patients = ?summary.patients,
                diagnoses = ?summary.diagnoses,
                "Initial load finished"
            ),
            Err(e) => warn!("Initial load task failed: {}", e),
        }
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router::create_router(context)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new()
                    .level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new()
                    .level(Level::INFO)),
        )
        .layer(cors);

    let listener = TcpListener::bind(config.bind_address.as_str()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
