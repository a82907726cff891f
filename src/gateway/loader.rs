//! Gateway Loader
//!
//! Orchestrates the load pass: evaluates the activation policy over the
//! registry, builds each active widget's context, and invokes its
//! registration. Widgets register strictly sequentially so log output and
//! shared-server side effects stay deterministic, and a single widget's
//! failure never aborts the rest of the pass.

use tracing::{error, info};

use super::context::SharedContext;
use super::registry::{is_active, WidgetRegistry};

/// Loads and registers all active widgets from the registry.
///
/// Per-widget registration failures are logged with the widget id and
/// swallowed here; they never propagate to the caller. A registry with
/// zero active entries completes with zero registrations.
pub async fn load_widgets(
    registry: &WidgetRegistry,
    context: &SharedContext,
    is_production: bool,
) {
    info!(
        "Loading widgets from registry (production: {})...",
        is_production
    );

    // Filter based on environment, preserving registry order
    let active: Vec<_> = registry
        .entries()
        .filter(|(_, entry)| is_active(entry, is_production))
        .collect();

    info!(
        "Found {} {} widgets: {}",
        active.len(),
        if is_production { "production" } else { "enabled" },
        active
            .iter()
            .map(|(id, _)| *id)
            .collect::<Vec<_>>()
            .join(", ")
    );

    for (widget_id, entry) in active {
        let config = entry.package.config();
        info!("Registering widget: {} ({})", config.name, widget_id);

        // Per-widget context with the entry's base path injected
        let widget_context = context.with_base_path(entry.mcp.base_path);

        match entry.package.register_widget(&widget_context).await {
            Ok(()) => info!("Successfully registered widget: {}", config.name),
            // Continue with other widgets even if one fails
            Err(e) => error!("Failed to register widget {}: {}", widget_id, e),
        }
    }

    info!("Widget loading complete");
}
