//! Widget Registry and Activation Policy
//!
//! The registry is the sole source of truth for what can be loaded: an
//! insertion-ordered pairing of widget packages with their deployment
//! policy. It is declared once at startup and never mutated. Activation
//! policy is owned by the registry, not by the widgets themselves, keeping
//! identity separate from deployment concerns.

use std::sync::Arc;

use super::package::WidgetPackage;
use crate::widgets::headphones::HeadphonesWidget;

/// Activation and namespace configuration for one registry entry.
#[derive(Debug, Clone, Copy)]
pub struct WidgetMcpPolicy {
    /// Disabled widgets never load, in any environment
    pub enabled: bool,

    /// Whether the registry owner asserts this widget as production-ready
    pub production: bool,

    /// Path the widget's HTML is served under
    pub base_path: &'static str,
}

/// Pairs a widget package with its deployment policy.
pub struct WidgetRegistryEntry {
    pub package: Arc<dyn WidgetPackage>,
    pub mcp: WidgetMcpPolicy,
}

/// The static widget registry. Read-only after construction; iteration
/// preserves declaration order so load logging stays deterministic.
pub struct WidgetRegistry {
    entries: Vec<WidgetRegistryEntry>,
}

impl WidgetRegistry {
    pub fn new(entries: Vec<WidgetRegistryEntry>) -> Self {
        Self { entries }
    }

    /// Iterates `(widget id, entry)` in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &WidgetRegistryEntry)> {
        self.entries.iter().map(|e| (e.package.config().id, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decides whether an entry is loaded in the given environment.
///
/// An entry is active iff it is enabled, and, in production, also marked
/// production-ready. Outside production every enabled widget loads.
pub fn is_active(entry: &WidgetRegistryEntry, is_production: bool) -> bool {
    entry.mcp.enabled && (!is_production || entry.mcp.production)
}

/// The gateway's widget registry. Add new widgets here as they are created.
pub fn registry() -> WidgetRegistry {
    WidgetRegistry::new(vec![WidgetRegistryEntry {
        package: Arc::new(HeadphonesWidget),
        mcp: WidgetMcpPolicy {
            enabled: true,
            production: true,
            base_path: "/widgets/headphones",
        },
    }])
}
