//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the JSON-RPC endpoint for the widget gateway.
//! Method dispatch resolves tools and resources against the shared
//! [`McpServer`](super::server::McpServer) registration tables populated
//! during the gateway load pass.

use super::{helpers::*, models::*};
use crate::router::SharedState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    // Parse JSON-RPC Request (POST)
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!("JSON parse error: {}", e.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, -32700, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    debug!("MCP call: {} (id: {:?})", method_name, id);

    // Dispatch Method
    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, state.mcp.list_tools()),
        "resources/list" => rpc_success(id, state.mcp.list_resources()),
        "resources/read" => {
            let uri = params.get("uri").and_then(|u| u.as_str()).unwrap_or("");
            match state.mcp.read_resource(uri) {
                Some(result) => rpc_success(id, result),
                None => rpc_error(id, -32602, format!("Unknown resource: {uri}")),
            }
        }
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match state.mcp.call_tool(tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(e) => rpc_error(id, -32602, e.to_string()),
            }
        }
        "ping" => rpc_success(id, json!({})), // Optional but good for health checks
        _ => {
            warn!("Unknown method: {}", method_name);
            rpc_error(id, -32601, "Method not found")
        }
    };

    Json(response_body).into_response()
}

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true },
            "resources": { "listChanged": true, "subscribe": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}
