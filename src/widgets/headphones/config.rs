//! Headphones widget identity, metadata and prompt strings.

use crate::gateway::package::{WidgetConfig, WidgetMetadata, WidgetPrompts};

/// Name of the headphones search tool
pub const TOOL_NAME: &str = "find_headphones";

/// Identity for the headphones widget
pub const HEADPHONES_WIDGET_CONFIG: WidgetConfig = WidgetConfig {
    id: "headphones",
    name: "Headphones Widget",
};

/// Display metadata for the headphones widget
pub const HEADPHONES_WIDGET_METADATA: WidgetMetadata = WidgetMetadata {
    template_uri: "ui://widget/headphones-template.html",
    invoking: "Finding headphones...",
    invoked: "Headphones loaded",
    prefers_border: true,
};

/// Prompt strings for the headphones widget. Worded for LLM consumption.
pub const HEADPHONES_WIDGET_PROMPTS: WidgetPrompts = WidgetPrompts {
    tool_title: "Find Headphones",
    tool_description: "Search and display headphones based on price range, activity type, and \
                       style preferences. Returns personalized recommendations.",
    resource_title: "Headphones Widget",
    resource_description: "Interactive headphones recommendation interface",
    widget_description: "Displays an interactive carousel of headphone recommendations with \
                         filters for price, activity, and style",
};
