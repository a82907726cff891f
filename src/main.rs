use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use widget_gateway_rust::gateway::{base_url, load_widgets, registry, HttpHtmlSource, SharedContext};
use widget_gateway_rust::mcp::server::McpServer;
use widget_gateway_rust::router::{create_app_router, AppState, WidgetAssets};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Resolve the environment signal once; it is threaded explicitly from
    // here rather than re-read from ambient process state.
    let is_production = std::env::var("APP_ENV").is_ok_and(|v| v == "production");

    // Shared protocol server and application state
    let mcp = Arc::new(McpServer::new());
    let state = Arc::new(AppState {
        mcp: Arc::clone(&mcp),
        assets: WidgetAssets::new(),
    });
    let app = create_app_router(state);

    // Configure the server address
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on http://{}", addr);

    // Serve before loading: widgets fetch their HTML over HTTP during
    // registration, so the listener must already be accepting.
    let server = tokio::spawn(async move { axum::serve(listener, app).await });

    let shared = SharedContext {
        server: mcp,
        html: Arc::new(HttpHtmlSource::new(base_url())),
    };
    load_widgets(&registry(), &shared, is_production).await;

    server.await??;
    Ok(())
}
