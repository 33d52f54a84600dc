use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use crate::config::HostConfig;
use crate::manager::AppManager;

pub async fn start_server(config: HostConfig) -> anyhow::Result<()> {
    let addr = config.bind_address.clone();
    let manager = Arc::new(AppManager::new(config)?);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Server listening on http://{}", addr);

    // Serve with graceful shutdown
    axum::serve(listener, router(manager))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Build the API router around a running app
pub fn router(manager: Arc<AppManager>) -> Router {
    Router::new()
        // Navigation routes
        .route("/api/deeplink", post(handlers::deeplink_handler))
        .route(
            "/api/app/initialization",
            post(handlers::app_initialization_handler),
        )
        .route("/api/navigation", get(handlers::get_navigation_handler))
        .route(
            "/api/navigation/debug",
            post(handlers::debug_menu_handler),
        )
        .route(
            "/api/navigation/back",
            post(handlers::back_to_tabs_handler),
        )
        // Wallet event routes
        .route("/api/events", get(handlers::get_events_handler))
        .route("/api/events/start", post(handlers::start_events_handler))
        .route("/api/events/stop", post(handlers::stop_events_handler))
        .route("/api/events/list", post(handlers::show_list_handler))
        .route(
            "/api/events/selection",
            delete(handlers::clear_selection_handler),
        )
        .route(
            "/api/events/prompt/confirm",
            post(handlers::confirm_prompt_handler),
        )
        .route(
            "/api/events/prompt/dismiss",
            post(handlers::dismiss_prompt_handler),
        )
        .route(
            "/api/events/:id/select",
            post(handlers::select_event_handler),
        )
        .route("/api/events/:id/copy", post(handlers::copy_event_handler))
        .route("/api/events/:id/open", post(handlers::open_event_handler))
        .route("/api/clipboard", get(handlers::clipboard_handler))
        .layer(cors_layer())
        .with_state(manager)
}

/// Configure CORS based on environment
///
/// Set `ALLOWED_ORIGINS="https://a.example,https://b.example"` to restrict
/// origins; otherwise any origin is allowed (development mode).
fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = std::env::var("ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("⚠️  Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        log::warn!("CORS: Allowing all origins (development mode). Set ALLOWED_ORIGINS env var for production.");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        log::info!("CORS configured for {} origin(s)", origins.len());
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            log::info!("Received SIGTERM signal");
        },
    }

    log::info!("Shutdown signal received, exiting gracefully...");
}
