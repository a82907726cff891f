//! Widget Gateway Core
//!
//! This module contains the widget registration and dispatch machinery:
//! - The widget package contract and identity metadata
//! - The static widget registry and activation policy
//! - The per-widget registration context
//! - The sequential, failure-isolating load pass

pub mod context;
pub mod loader;
pub mod package;
pub mod registry;

// Re-export commonly used types and functions
pub use context::{base_url, HtmlSource, HttpHtmlSource, SharedContext, WidgetContext};
pub use loader::load_widgets;
pub use package::{WidgetConfig, WidgetMetadata, WidgetPackage, WidgetPrompts};
pub use registry::{is_active, registry, WidgetMcpPolicy, WidgetRegistry, WidgetRegistryEntry};
