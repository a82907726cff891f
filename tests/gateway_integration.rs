//! Integration tests for the widget gateway
//!
//! These tests verify the complete gateway behavior including:
//! - Widget load pass onto the shared MCP server
//! - Server initialization and handshake
//! - Tool and resource discovery
//! - Tool execution (find_headphones) and summary determinism
//! - Error handling and per-widget failure isolation

use anyhow::bail;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use widget_gateway_rust::gateway::{
    load_widgets, registry, HtmlSource, SharedContext, WidgetConfig, WidgetContext,
    WidgetMcpPolicy, WidgetPackage, WidgetRegistry, WidgetRegistryEntry,
};
use widget_gateway_rust::mcp::server::{McpServer, ToolRegistration};
use widget_gateway_rust::router::{create_app_router, AppState, WidgetAssets};

/// HTML source stub so the load pass needs no running HTTP listener.
struct StaticHtml;

#[async_trait]
impl HtmlSource for StaticHtml {
    async fn get_html(&self, path: &str) -> anyhow::Result<String> {
        Ok(format!("<div data-widget=\"{path}\"></div>"))
    }
}

/// Runs a full load pass over the real registry and returns the app.
async fn create_test_app() -> axum::Router {
    let mcp = Arc::new(McpServer::new());
    let shared = SharedContext {
        server: Arc::clone(&mcp),
        html: Arc::new(StaticHtml),
    };
    load_widgets(&registry(), &shared, false).await;

    let state = Arc::new(AppState {
        mcp,
        assets: WidgetAssets::new(),
    });
    create_app_router(state)
}

/// Helper function to send a JSON-RPC request and get the response
async fn send_jsonrpc_request(
    app: &axum::Router,
    method: &str,
    params: Option<Value>,
    id: i32,
) -> (StatusCode, Value) {
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": id
    });

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&request_body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

#[tokio::test]
async fn test_mcp_sse_endpoint() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/mcp")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(content_type, "text/event-stream");

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body_bytes.to_vec()).unwrap();

    assert!(body_str.contains("event: endpoint"));
    assert!(body_str.contains("data: /mcp"));
}

#[tokio::test]
async fn test_mcp_initialize() {
    let app = create_test_app().await;

    let (status, body) = send_jsonrpc_request(&app, "initialize", None, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 1);

    let result = &body["result"];
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "widget-gateway-rust");
    assert!(result["capabilities"]["tools"]["listChanged"]
        .as_bool()
        .unwrap());
    assert!(result["capabilities"]["resources"]["listChanged"]
        .as_bool()
        .unwrap());
}

#[tokio::test]
async fn test_mcp_tools_list() {
    let app = create_test_app().await;

    let (status, body) = send_jsonrpc_request(&app, "tools/list", None, 2).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 2);

    let tools = body["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 1);

    let find_headphones = &tools[0];
    assert_eq!(find_headphones["name"], "find_headphones");
    assert_eq!(find_headphones["title"], "Find Headphones");
    assert!(!find_headphones["description"].as_str().unwrap().is_empty());

    let properties = &find_headphones["inputSchema"]["properties"];
    assert!(properties["priceBracket"].is_object());
    assert!(properties["activity"].is_object());
    assert!(properties["style"].is_object());

    let meta = &find_headphones["_meta"];
    assert_eq!(
        meta["openai/outputTemplate"],
        "ui://widget/headphones-template.html"
    );
    assert_eq!(meta["openai/toolInvocation/invoking"], "Finding headphones...");
    assert_eq!(meta["openai/toolInvocation/invoked"], "Headphones loaded");
}

#[tokio::test]
async fn test_mcp_resources_list() {
    let app = create_test_app().await;

    let (status, body) = send_jsonrpc_request(&app, "resources/list", None, 3).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");

    let resources = body["result"]["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 1);

    let widget = &resources[0];
    assert_eq!(widget["name"], "headphones-widget");
    assert_eq!(widget["uri"], "ui://widget/headphones-template.html");
    assert_eq!(widget["mimeType"], "text/html+skybridge");
    assert_eq!(widget["_meta"]["openai/widgetPrefersBorder"], true);
}

#[tokio::test]
async fn test_mcp_resources_read() {
    let app = create_test_app().await;

    let params = json!({ "uri": "ui://widget/headphones-template.html" });
    let (status, body) = send_jsonrpc_request(&app, "resources/read", Some(params), 4).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");

    let contents = body["result"]["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1);

    let content = &contents[0];
    assert_eq!(content["uri"], "ui://widget/headphones-template.html");
    assert_eq!(content["mimeType"], "text/html+skybridge");

    // HTML fetched at registration time, wrapped in a root element
    let text = content["text"].as_str().unwrap();
    assert!(text.starts_with("<html>"));
    assert!(text.ends_with("</html>"));
    assert!(text.contains("/widgets/headphones"));
}

#[tokio::test]
async fn test_mcp_resources_read_unknown_uri() {
    let app = create_test_app().await;

    let params = json!({ "uri": "ui://widget/missing.html" });
    let (status, body) = send_jsonrpc_request(&app, "resources/read", Some(params), 5).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], -32602);
}

#[tokio::test]
async fn test_mcp_tool_call_unfiltered() {
    let app = create_test_app().await;

    let params = json!({
        "name": "find_headphones",
        "arguments": {}
    });

    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 6).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 6);

    let result = &body["result"];
    let content = &result["content"][0];
    assert_eq!(content["type"], "text");
    assert_eq!(content["text"], "Showing all 6 headphones");

    let structured = &result["structuredContent"];
    assert_eq!(structured["summary"], "Showing all 6 headphones");

    let headphones = structured["headphones"].as_array().unwrap();
    assert_eq!(headphones.len(), 6);
    assert_eq!(headphones[0]["id"], "arc-commuter");
    assert_eq!(headphones[0]["priceBracket"], "budget");
    assert_eq!(headphones[0]["style"], "over-ear");

    assert_eq!(
        result["_meta"]["openai/outputTemplate"],
        "ui://widget/headphones-template.html"
    );
}

#[tokio::test]
async fn test_mcp_tool_call_filtered_summary() {
    let app = create_test_app().await;

    // "all" is a wildcard: only price and style constrain the search
    let params = json!({
        "name": "find_headphones",
        "arguments": {
            "priceBracket": "budget",
            "activity": "all",
            "style": "on-ear"
        }
    });

    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 7).await;

    assert_eq!(status, StatusCode::OK);

    let result = &body["result"];
    assert_eq!(
        result["content"][0]["text"],
        "Found 0 headphones matching: budget, on-ear"
    );

    // A combination matching nothing is an empty result, not an error
    let headphones = result["structuredContent"]["headphones"].as_array().unwrap();
    assert!(headphones.is_empty());
}

#[tokio::test]
async fn test_mcp_tool_call_single_dimension() {
    let app = create_test_app().await;

    let params = json!({
        "name": "find_headphones",
        "arguments": { "priceBracket": "midrange" }
    });

    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 8).await;

    assert_eq!(status, StatusCode::OK);

    let result = &body["result"];
    assert_eq!(
        result["content"][0]["text"],
        "Found 2 headphones matching: midrange"
    );

    let headphones = result["structuredContent"]["headphones"].as_array().unwrap();
    assert_eq!(headphones.len(), 2);
    assert_eq!(headphones[0]["id"], "nova-gx");
    assert_eq!(headphones[1]["id"], "auris-flow");
}

#[tokio::test]
async fn test_mcp_tool_call_invalid_arguments() {
    let app = create_test_app().await;

    let params = json!({
        "name": "find_headphones",
        "arguments": { "priceBracket": "luxury" }
    });

    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 9).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], -32602);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid arguments"));
}

#[tokio::test]
async fn test_mcp_tool_call_unknown_tool() {
    let app = create_test_app().await;

    let params = json!({ "name": "find_speakers", "arguments": {} });
    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 10).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], -32602);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Unknown tool"));
}

#[tokio::test]
async fn test_mcp_unknown_method() {
    let app = create_test_app().await;

    let (status, body) = send_jsonrpc_request(&app, "prompts/list", None, 11).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], -32601);
    assert_eq!(body["error"]["message"], "Method not found");
}

#[tokio::test]
async fn test_mcp_malformed_body() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["error"]["code"], -32700);
}

#[tokio::test]
async fn test_widget_asset_endpoint() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/widgets/headphones")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body_bytes.to_vec()).unwrap();
    assert!(body_str.contains("headphones"));
}

// =============================================================================
// Namespace and isolation behavior
// =============================================================================

/// Test package that registers one trivial tool under a chosen name.
struct NamedToolWidget {
    config: WidgetConfig,
    tool_name: &'static str,
}

#[async_trait]
impl WidgetPackage for NamedToolWidget {
    fn config(&self) -> &WidgetConfig {
        &self.config
    }

    async fn register_widget(&self, context: &WidgetContext) -> anyhow::Result<()> {
        context.server.register_tool(ToolRegistration {
            name: self.tool_name.to_string(),
            title: self.config.name.to_string(),
            description: "Test tool".to_string(),
            input_schema: json!({"type": "object"}),
            output_schema: json!({"type": "object"}),
            meta: json!({}),
            handler: Box::new(|_| Ok(json!({"content": []}))),
        })?;
        Ok(())
    }
}

/// Test package whose registration always fails.
struct AlwaysFailingWidget {
    config: WidgetConfig,
}

#[async_trait]
impl WidgetPackage for AlwaysFailingWidget {
    fn config(&self) -> &WidgetConfig {
        &self.config
    }

    async fn register_widget(&self, _context: &WidgetContext) -> anyhow::Result<()> {
        bail!("widget intentionally refuses to register");
    }
}

fn policy() -> WidgetMcpPolicy {
    WidgetMcpPolicy {
        enabled: true,
        production: true,
        base_path: "/widgets/test",
    }
}

#[tokio::test]
async fn test_two_widgets_register_distinct_tools() {
    let mcp = Arc::new(McpServer::new());
    let shared = SharedContext {
        server: Arc::clone(&mcp),
        html: Arc::new(StaticHtml),
    };

    let registry = WidgetRegistry::new(vec![
        WidgetRegistryEntry {
            package: Arc::new(NamedToolWidget {
                config: WidgetConfig { id: "alpha", name: "Alpha" },
                tool_name: "alpha_tool",
            }),
            mcp: policy(),
        },
        WidgetRegistryEntry {
            package: Arc::new(NamedToolWidget {
                config: WidgetConfig { id: "beta", name: "Beta" },
                tool_name: "beta_tool",
            }),
            mcp: policy(),
        },
    ]);

    load_widgets(&registry, &shared, false).await;

    let tools = mcp.list_tools();
    let names: Vec<&str> = tools["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alpha_tool", "beta_tool"]);
}

#[tokio::test]
async fn test_duplicate_tool_name_is_isolated_failure() {
    let mcp = Arc::new(McpServer::new());
    let shared = SharedContext {
        server: Arc::clone(&mcp),
        html: Arc::new(StaticHtml),
    };

    let registry = WidgetRegistry::new(vec![
        WidgetRegistryEntry {
            package: Arc::new(NamedToolWidget {
                config: WidgetConfig { id: "first", name: "First" },
                tool_name: "shared_tool",
            }),
            mcp: policy(),
        },
        WidgetRegistryEntry {
            package: Arc::new(NamedToolWidget {
                config: WidgetConfig { id: "colliding", name: "Colliding" },
                tool_name: "shared_tool",
            }),
            mcp: policy(),
        },
        WidgetRegistryEntry {
            package: Arc::new(NamedToolWidget {
                config: WidgetConfig { id: "last", name: "Last" },
                tool_name: "last_tool",
            }),
            mcp: policy(),
        },
    ]);

    // The collision fails the second widget only; the pass completes
    load_widgets(&registry, &shared, false).await;

    assert_eq!(mcp.tool_count(), 2);
    assert!(mcp.call_tool("shared_tool", json!({})).is_ok());
    assert!(mcp.call_tool("last_tool", json!({})).is_ok());
}

#[tokio::test]
async fn test_failing_widget_leaves_others_callable() {
    let mcp = Arc::new(McpServer::new());
    let shared = SharedContext {
        server: Arc::clone(&mcp),
        html: Arc::new(StaticHtml),
    };

    let registry = WidgetRegistry::new(vec![
        WidgetRegistryEntry {
            package: Arc::new(AlwaysFailingWidget {
                config: WidgetConfig { id: "broken", name: "Broken" },
            }),
            mcp: policy(),
        },
        WidgetRegistryEntry {
            package: Arc::new(NamedToolWidget {
                config: WidgetConfig { id: "healthy", name: "Healthy" },
                tool_name: "healthy_tool",
            }),
            mcp: policy(),
        },
    ]);

    load_widgets(&registry, &shared, false).await;

    // The broken widget is simply absent from the protocol surface
    assert_eq!(mcp.tool_count(), 1);
    assert!(mcp.call_tool("healthy_tool", json!({})).is_ok());
}
