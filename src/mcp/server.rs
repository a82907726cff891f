//! MCP Registration-Table Server
//!
//! The protocol server shared by all widgets. During the gateway load pass
//! each widget registers its tool(s) and resource onto the tables below;
//! after the pass the tables are read-only and serve `tools/list`,
//! `tools/call`, `resources/list` and `resources/read`.

use serde_json::{json, Value};
use std::sync::RwLock;
use thiserror::Error;

/// Synchronous tool handler: structured arguments in, tool result out.
pub type ToolHandler = Box<dyn Fn(Value) -> Result<Value, ToolCallError> + Send + Sync>;

/// Resource handler: the requested URI in, a `contents` entry out.
pub type ResourceHandler = Box<dyn Fn(&str) -> Value + Send + Sync>;

/// Error raised when a widget's registration collides with an existing one.
///
/// Tool and resource identifiers are globally chosen by each widget package;
/// a collision is that widget's registration failure, isolated by the
/// gateway loader.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("tool '{0}' is already registered")]
    DuplicateTool(String),

    #[error("resource '{0}' is already registered")]
    DuplicateResource(String),
}

/// Error raised while dispatching a `tools/call` request.
#[derive(Debug, Error)]
pub enum ToolCallError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// A tool registration: name, schemas, metadata and the handler itself.
pub struct ToolRegistration {
    /// Globally unique tool name (e.g. `find_headphones`)
    pub name: String,
    pub title: String,
    pub description: String,
    /// JSON Schema for the tool arguments
    pub input_schema: Value,
    /// JSON Schema for the structured result
    pub output_schema: Value,
    /// `_meta` object carrying the widget template reference
    pub meta: Value,
    pub handler: ToolHandler,
}

/// A resource registration: the renderable widget surface.
pub struct ResourceRegistration {
    pub name: String,
    /// Globally unique template URI (e.g. `ui://widget/headphones-template.html`)
    pub uri: String,
    pub title: String,
    pub description: String,
    pub mime_type: String,
    /// `_meta` object carrying the widget description and border preference
    pub meta: Value,
    pub handler: ResourceHandler,
}

/// The shared protocol server.
///
/// Registration tables are insertion-ordered so `tools/list` and
/// `resources/list` are deterministic. They are written only during the
/// sequential load pass at process start and read-only afterwards.
#[derive(Default)]
pub struct McpServer {
    tools: RwLock<Vec<ToolRegistration>>,
    resources: RwLock<Vec<ResourceRegistration>>,
}

impl McpServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool, rejecting duplicate names.
    pub fn register_tool(&self, registration: ToolRegistration) -> Result<(), RegistrationError> {
        let mut tools = self.tools.write().expect("tool table lock poisoned");
        if tools.iter().any(|t| t.name == registration.name) {
            return Err(RegistrationError::DuplicateTool(registration.name));
        }
        tools.push(registration);
        Ok(())
    }

    /// Registers a resource, rejecting duplicate URIs.
    pub fn register_resource(
        &self,
        registration: ResourceRegistration,
    ) -> Result<(), RegistrationError> {
        let mut resources = self.resources.write().expect("resource table lock poisoned");
        if resources.iter().any(|r| r.uri == registration.uri) {
            return Err(RegistrationError::DuplicateResource(registration.uri));
        }
        resources.push(registration);
        Ok(())
    }

    /// Builds the `tools/list` result from the registration table.
    pub fn list_tools(&self) -> Value {
        let tools = self.tools.read().expect("tool table lock poisoned");
        let entries: Vec<Value> = tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "title": t.title,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "outputSchema": t.output_schema,
                    "_meta": t.meta,
                })
            })
            .collect();

        json!({ "tools": entries })
    }

    /// Builds the `resources/list` result from the registration table.
    pub fn list_resources(&self) -> Value {
        let resources = self.resources.read().expect("resource table lock poisoned");
        let entries: Vec<Value> = resources
            .iter()
            .map(|r| {
                json!({
                    "name": r.name,
                    "uri": r.uri,
                    "title": r.title,
                    "description": r.description,
                    "mimeType": r.mime_type,
                    "_meta": r.meta,
                })
            })
            .collect();

        json!({ "resources": entries })
    }

    /// Resolves a `resources/read` request against the registered handlers.
    pub fn read_resource(&self, uri: &str) -> Option<Value> {
        let resources = self.resources.read().expect("resource table lock poisoned");
        let resource = resources.iter().find(|r| r.uri == uri)?;
        let contents = (resource.handler)(uri);
        Some(json!({ "contents": [contents] }))
    }

    /// Dispatches a `tools/call` request to the named tool's handler.
    pub fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, ToolCallError> {
        let tools = self.tools.read().expect("tool table lock poisoned");
        let tool = tools
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| ToolCallError::UnknownTool(name.to_string()))?;
        (tool.handler)(arguments)
    }

    /// Number of registered tools. Used for load-pass logging and tests.
    pub fn tool_count(&self) -> usize {
        self.tools.read().expect("tool table lock poisoned").len()
    }
}
