//! Doorman API
//!
//! Authentication service with a JSON-file user store.
//!
//! ## REST Endpoints
//!
//! - `POST /api/public/signup` - Register a new user
//! - `POST /api/public/login` - Authenticate and receive an access token
//! - `POST /api/public/verify-token` - Check a token without using it
//! - `GET /api/private/profile` - Profile of the bearer-token user
//!
//! ## Pages
//!
//! - `GET /`, `GET /signup`, `GET /login` - HTML pages
//!
//! ## Health
//!
//! - `GET /health` - Liveness probe

mod config;
mod error;
mod extractors;
mod handlers;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use doorman_core::AuthService;
use doorman_store::JsonUserStore;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("doorman_api=debug".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Doorman API");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        http_port = config.http_port,
        users_file = %config.users_file.display(),
        "Configuration loaded"
    );

    // Wire the store and the auth service
    let store = Arc::new(JsonUserStore::new(&config.users_file));
    let auth = AuthService::new(config.auth.clone(), Arc::clone(&store));
    let state = AppState::new(auth, store, config.clone());

    // Build HTTP router
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    // Public auth routes
    let api_public = Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .route("/verify-token", post(handlers::verify_token));

    // Routes behind the bearer extractor
    let api_private = Router::new().route("/profile", get(handlers::profile));

    // HTML pages
    let pages = Router::new()
        .route("/", get(handlers::home))
        .route("/signup", get(handlers::signup_page))
        .route("/login", get(handlers::login_page));

    // Middleware stack (outermost first)
    let middleware = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive());

    Router::new()
        .nest("/api/public", api_public)
        .nest("/api/private", api_private)
        .merge(pages)
        .route("/health", get(handlers::health))
        .layer(middleware)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

// ============================================================================
// Tests
// ============================================================================
