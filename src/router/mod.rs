//! Routing module for the widget gateway

use std::sync::Arc;

use axum::{body::Body, extract::Request, middleware::Next, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, warn};

use crate::mcp::server::McpServer;

pub mod assets;

pub use assets::WidgetAssets;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Application state: the protocol server's registration tables plus the
/// widget HTML assets the fetcher round-trips against.
pub struct AppState {
    pub mcp: Arc<McpServer>,
    pub assets: WidgetAssets,
}

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        let res = next.run(req).await;
        if res.status().is_success() {
            debug!("REQ: {} {}", method, uri);
        } else {
            warn!("REQ: {} {} -> {}", method, uri, res.status());
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::mcp::routes())
        .merge(assets::routes())
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}
