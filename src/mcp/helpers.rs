//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication
//! and OpenAI widget metadata construction.

use serde_json::{json, Value};

use crate::gateway::package::WidgetMetadata;

/// Constructs the `_meta` object attached to a widget's tool registration
/// and tool results.
///
/// The fields are defined by the Apps SDK:
/// - `openai/outputTemplate` – URI of the widget HTML template.
/// - `openai/toolInvocation/invoking` / `invoked` – human readable
///   messages for the tool lifecycle.
pub fn widget_meta(metadata: &WidgetMetadata) -> Value {
    json!({
        "openai/outputTemplate": metadata.template_uri,
        "openai/toolInvocation/invoking": metadata.invoking,
        "openai/toolInvocation/invoked": metadata.invoked,
    })
}

/// Constructs the `_meta` object attached to a widget's resource
/// registration and resource contents.
pub fn resource_meta(description: &str, prefers_border: bool) -> Value {
    json!({
        "openai/widgetDescription": description,
        "openai/widgetPrefersBorder": prefers_border,
    })
}

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}
