//! Widget Gateway Library
//!
//! This library exposes independently packaged UI widgets as MCP
//! (Model Context Protocol) tools and resources behind a single
//! gateway server.

// Core gateway: registry, activation policy, context, load pass
pub mod gateway;

// MCP protocol server and JSON-RPC endpoint
pub mod mcp;

// Widget packages wired into the registry
pub mod widgets;

// Infrastructure
pub mod router;
