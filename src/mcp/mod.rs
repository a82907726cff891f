//! Model Context Protocol (MCP) Module
//!
//! This module contains the MCP protocol implementation, including:
//! - Protocol models (JsonRpcRequest, constants)
//! - RPC helpers (success/error envelopes, widget metadata)
//! - The registration-table server shared by all widgets
//! - The JSON-RPC endpoint handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod server;

// Re-export commonly used types and functions
pub use handlers::routes;
pub use server::{McpServer, RegistrationError, ResourceRegistration, ToolRegistration};
