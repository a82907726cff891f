//! MCP Protocol Models and Constants
//!
//! This module contains the data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// MIME type for renderable widget surfaces
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";
/// Server identifier
pub const SERVER_NAME: &str = "widget-gateway-rust";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}
