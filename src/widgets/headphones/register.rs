//! Headphones widget registration and tool logic.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

use super::config::{
    HEADPHONES_WIDGET_CONFIG, HEADPHONES_WIDGET_METADATA, HEADPHONES_WIDGET_PROMPTS, TOOL_NAME,
};
use super::data::filter_headphones;
use super::models::{Filter, FindHeadphonesInput, FindHeadphonesOutput};
use crate::gateway::context::WidgetContext;
use crate::gateway::package::{WidgetConfig, WidgetPackage};
use crate::mcp::helpers::{resource_meta, widget_meta};
use crate::mcp::models::WIDGET_MIME_TYPE;
use crate::mcp::server::{ResourceRegistration, ToolCallError, ToolRegistration};

/// Headphones Widget Package
pub struct HeadphonesWidget;

#[async_trait]
impl WidgetPackage for HeadphonesWidget {
    fn config(&self) -> &WidgetConfig {
        &HEADPHONES_WIDGET_CONFIG
    }

    async fn register_widget(&self, context: &WidgetContext) -> anyhow::Result<()> {
        info!("Registering headphones widget at {}", context.base_path);

        // Fetch the HTML for the widget surface. A failure here is this
        // widget's overall registration failure; the loader isolates it.
        let html = context.html.get_html(&context.base_path).await?;

        // Register the resource (widget UI)
        let meta = resource_meta(
            HEADPHONES_WIDGET_PROMPTS.widget_description,
            HEADPHONES_WIDGET_METADATA.prefers_border,
        );
        let contents_meta = meta.clone();
        let wrapped = format!("<html>{html}</html>");
        context.server.register_resource(ResourceRegistration {
            name: "headphones-widget".to_string(),
            uri: HEADPHONES_WIDGET_METADATA.template_uri.to_string(),
            title: HEADPHONES_WIDGET_PROMPTS.resource_title.to_string(),
            description: HEADPHONES_WIDGET_PROMPTS.resource_description.to_string(),
            mime_type: WIDGET_MIME_TYPE.to_string(),
            meta,
            handler: Box::new(move |uri| {
                json!({
                    "uri": uri,
                    "mimeType": WIDGET_MIME_TYPE,
                    "text": wrapped.clone(),
                    "_meta": contents_meta.clone(),
                })
            }),
        })?;

        // Register the tool
        let tool_meta = widget_meta(&HEADPHONES_WIDGET_METADATA);
        let result_meta = tool_meta.clone();
        context.server.register_tool(ToolRegistration {
            name: TOOL_NAME.to_string(),
            title: HEADPHONES_WIDGET_PROMPTS.tool_title.to_string(),
            description: HEADPHONES_WIDGET_PROMPTS.tool_description.to_string(),
            input_schema: input_schema(),
            output_schema: output_schema(),
            meta: tool_meta,
            handler: Box::new(move |args| {
                // Missing arguments mean an unconstrained search
                let args = if args.is_null() { json!({}) } else { args };
                let input: FindHeadphonesInput = serde_json::from_value(args)
                    .map_err(|e| ToolCallError::InvalidArguments(e.to_string()))?;

                let output = find_headphones(input);
                let summary = output.summary.clone();
                Ok(json!({
                    "content": [{ "type": "text", "text": summary }],
                    "structuredContent": output,
                    "_meta": result_meta.clone(),
                }))
            }),
        })?;

        info!("Headphones widget registered successfully");
        Ok(())
    }
}

/// Runs the headphones search: filter the catalog, then summarize which
/// constraints were applied, in the fixed order price → activity → style.
pub fn find_headphones(input: FindHeadphonesInput) -> FindHeadphonesOutput {
    let headphones = filter_headphones(&input);

    let applied: Vec<&str> = [
        constraint(&input.price_bracket, |v| v.as_str()),
        constraint(&input.activity, |v| v.as_str()),
        constraint(&input.style, |v| v.as_str()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let summary = if applied.is_empty() {
        format!("Showing all {} headphones", headphones.len())
    } else {
        format!(
            "Found {} headphones matching: {}",
            headphones.len(),
            applied.join(", ")
        )
    };

    FindHeadphonesOutput {
        headphones,
        summary,
    }
}

/// Wire label of a filter, or `None` when absent or the `"all"` wildcard.
fn constraint<T: Copy>(
    filter: &Option<Filter<T>>,
    name: fn(T) -> &'static str,
) -> Option<&'static str> {
    match filter {
        Some(Filter::Only(v)) => Some(name(*v)),
        _ => None,
    }
}

/// JSON Schema for the tool arguments. Every field is optional.
fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "priceBracket": {
                "type": "string",
                "enum": ["budget", "midrange", "premium", "all"],
                "description": "Price range filter: budget, midrange, premium, or all"
            },
            "activity": {
                "type": "string",
                "enum": ["commuting", "gaming", "studio", "fitness", "all"],
                "description": "Activity filter: commuting, gaming, studio, fitness, or all"
            },
            "style": {
                "type": "string",
                "enum": ["in-ear", "on-ear", "over-ear", "all"],
                "description": "Style filter: in-ear, on-ear, over-ear, or all"
            }
        }
    })
}

/// JSON Schema for the structured tool result.
fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "headphones": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["id", "name", "priceBracket", "activity", "style", "price", "description", "ctaUrl"],
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                        "priceBracket": { "type": "string", "enum": ["budget", "midrange", "premium"] },
                        "activity": { "type": "string", "enum": ["commuting", "gaming", "studio", "fitness"] },
                        "style": { "type": "string", "enum": ["in-ear", "on-ear", "over-ear"] },
                        "price": { "type": "string" },
                        "description": { "type": "string" },
                        "ctaUrl": { "type": "string" },
                        "imageUrl": { "type": "string" }
                    }
                }
            },
            "summary": {
                "type": "string",
                "description": "Optional summary of the results"
            }
        },
        "required": ["headphones"]
    })
}
