//! Widget HTML asset serving
//!
//! Serves each widget's built HTML surface under its base path. The
//! gateway's HTML fetcher performs its registration-time round trip
//! against these routes.

use std::path::{Path as FsPath, PathBuf};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use tracing::info;

use super::SharedState;

/// Creates routes for widget asset serving
pub fn routes() -> Router<SharedState> {
    Router::new().route("/widgets/:widget", get(serve_widget_html))
}

/// Endpoint: GET /widgets/:widget
/// Returns the widget's HTML surface from the assets directory.
async fn serve_widget_html(
    State(state): State<SharedState>,
    Path(widget): Path<String>,
) -> Result<Html<String>, StatusCode> {
    state.assets.load_widget_html(&widget).await.map(Html)
}

/// Locates and reads widget HTML build outputs.
pub struct WidgetAssets {
    assets_dir: PathBuf,
}

impl Default for WidgetAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetAssets {
    /// Locates the assets directory relative to the working directory.
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let assets_dir = Self::locate_assets_directory(&current_dir);

        info!("Using assets directory: {:?}", assets_dir);

        Self { assets_dir }
    }

    /// Attempts to locate the assets directory using a multi-step strategy
    fn locate_assets_directory(current_dir: &FsPath) -> PathBuf {
        // Strategy to locate assets:
        // 1. ./assets
        // 2. ../assets (if running from a subdir)
        // 3. Fallback to "assets" relative path

        if current_dir.join("assets").exists() {
            return current_dir.join("assets");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("assets").exists() {
                return parent.join("assets");
            }
        }

        PathBuf::from("assets") // Fallback
    }

    /// Reads `<widget>.html` or a hashed-build fallback.
    pub async fn load_widget_html(&self, widget: &str) -> Result<String, StatusCode> {
        // Widget ids never contain path syntax
        if widget.contains(['/', '\\', '.']) {
            return Err(StatusCode::NOT_FOUND);
        }

        // First try the primary HTML file
        let primary_html_path = self.assets_dir.join(format!("{widget}.html"));
        if primary_html_path.exists() {
            return tokio::fs::read_to_string(primary_html_path)
                .await
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR);
        }

        // Search for fallbacks (e.g., headphones-123.html)
        let fallback_path = self.find_fallback_html_file(widget).await?;

        tokio::fs::read_to_string(fallback_path)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Finds a fallback HTML file when the primary one is not available
    async fn find_fallback_html_file(&self, widget: &str) -> Result<PathBuf, StatusCode> {
        let mut entries = tokio::fs::read_dir(&self.assets_dir)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;

        let prefix = format!("{widget}-");
        let mut fallbacks = Vec::new();
        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with(&prefix) && name.ends_with(".html") {
                    fallbacks.push(path);
                }
            }
        }

        // Use the lexicographically last fallback (likely the latest build)
        fallbacks.sort();
        fallbacks
            .last()
            .cloned()
            .ok_or(StatusCode::NOT_FOUND)
    }
}
