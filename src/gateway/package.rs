//! Widget Package Contract
//!
//! A widget package is the unit of pluggability: stable identity metadata
//! plus a single registration operation. Packages share no state and never
//! see each other's context or registry entry.

use async_trait::async_trait;

use super::context::WidgetContext;

/// Widget identity, set at package definition time.
#[derive(Debug, Clone, Copy)]
pub struct WidgetConfig {
    /// Unique registry key, stable across deployments
    pub id: &'static str,

    /// Human-readable display name
    pub name: &'static str,
}

/// Presentation metadata attached to a widget's tool and resource
/// registrations.
#[derive(Debug, Clone, Copy)]
pub struct WidgetMetadata {
    /// URI of the widget HTML template (e.g. `ui://widget/<name>-template.html`)
    pub template_uri: &'static str,

    /// Message shown while the tool runs
    pub invoking: &'static str,

    /// Message shown once the tool has completed
    pub invoked: &'static str,

    /// Whether the host should draw a border around the widget
    pub prefers_border: bool,
}

/// Prompt-engineering strings for a widget's protocol surface. These are
/// what the model and the end user read, so they are kept together and
/// worded deliberately.
#[derive(Debug, Clone, Copy)]
pub struct WidgetPrompts {
    pub tool_title: &'static str,
    pub tool_description: &'static str,
    pub resource_title: &'static str,
    pub resource_description: &'static str,
    pub widget_description: &'static str,
}

/// The capability every widget package implements.
///
/// `register_widget` is called exactly once per successful load pass. It
/// must fetch its own HTML surface through the context, then register one
/// resource and at least one tool on the shared server. Failures propagate
/// to the caller; isolation happens one level up, in the gateway loader.
#[async_trait]
pub trait WidgetPackage: Send + Sync {
    /// Identity metadata for this package.
    fn config(&self) -> &WidgetConfig;

    /// Registers this widget's tools and resources on the shared server.
    async fn register_widget(&self, context: &WidgetContext) -> anyhow::Result<()>;
}
