use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scene_editor_api::config::ServerConfig;
use scene_editor_api::loader::spawn_reference_fetch;
use scene_editor_api::router::build_app_router;
use scene_editor_api::session::EditorSession;
use scene_editor_api::state::AppState;
use scene_editor_graphql::api::GraphqlApi;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scene_editor_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        graphql_url = %config.graphql_url,
        "Loaded server configuration"
    );

    // --- Reference data client ---
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.graphql_timeout_secs))
        .build()
        .expect("Failed to build HTTP client");
    let provider = Arc::new(GraphqlApi::with_client(http, config.graphql_url.clone()));

    // --- Editor session + fire-once fetches ---
    let session = Arc::new(EditorSession::default());
    let fetch = spawn_reference_fetch(provider, Arc::clone(&session));
    tracing::info!("Reference data fetch started");

    // --- App state + router ---
    let state = AppState {
        config: Arc::new(config.clone()),
        session,
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // Fetches may still be in flight if the upstream is slow.
    fetch.abort();
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
