//! Widget Registration Context
//!
//! The capability bundle handed to each widget package at registration
//! time: the shared protocol server handle, an HTML source, and the
//! widget's own base path. The gateway loader owns construction; packages
//! only borrow the context for the duration of `register_widget`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::mcp::server::McpServer;

/// Retrieves a widget's renderable HTML by path.
#[async_trait]
pub trait HtmlSource: Send + Sync {
    async fn get_html(&self, path: &str) -> anyhow::Result<String>;
}

/// [`HtmlSource`] backed by an HTTP round trip against the host serving
/// the widget assets. No caching: every call is a fresh fetch.
pub struct HttpHtmlSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpHtmlSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HtmlSource for HttpHtmlSource {
    async fn get_html(&self, path: &str) -> anyhow::Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Resolves the base URL widget HTML is fetched from.
///
/// A cloud-assigned hostname wins when present; otherwise the local
/// development address on the configured port.
pub fn base_url() -> String {
    if let Ok(host) = std::env::var("CLOUD_HOSTNAME") {
        return format!("https://{host}");
    }

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);
    format!("http://127.0.0.1:{port}")
}

/// The capabilities shared by reference across all widgets in one load
/// pass. `basePath` is the only entry-specific piece, injected per widget
/// via [`SharedContext::with_base_path`].
#[derive(Clone)]
pub struct SharedContext {
    pub server: Arc<McpServer>,
    pub html: Arc<dyn HtmlSource>,
}

impl SharedContext {
    /// Synthesizes a full per-widget context from the shared capabilities.
    pub fn with_base_path(&self, base_path: impl Into<String>) -> WidgetContext {
        WidgetContext {
            server: Arc::clone(&self.server),
            html: Arc::clone(&self.html),
            base_path: base_path.into(),
        }
    }
}

/// Context provided to each widget during registration.
pub struct WidgetContext {
    /// Shared protocol server handle
    pub server: Arc<McpServer>,

    /// HTML source for the widget's renderable surface
    pub html: Arc<dyn HtmlSource>,

    /// Namespace prefix unique to this widget
    pub base_path: String,
}
