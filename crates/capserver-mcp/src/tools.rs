// Rust guideline compliant 2026-02-13

use std::sync::Arc;

use capserver::{capabilities, ResourceRegistry};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        AnnotateAble, CallToolResult, Content, ListResourcesResult, RawResource,
        ReadResourceResult, Resource, ResourceContents,
    },
    schemars, ErrorData as McpError,
};
use serde::Deserialize;

/// Input for the `add` tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddInput {
    #[schemars(description = "First addend")]
    pub a: i64,
    #[schemars(description = "Second addend")]
    pub b: i64,
}

/// MCP server exposing the `add` tool and the `status://ping` resource.
///
/// Cloned once per session by the transport; the resource registry is
/// shared, never copied.
#[derive(Debug, Clone)]
pub struct CapabilityServer {
    pub tool_router: ToolRouter<Self>,
    resources: Arc<ResourceRegistry>,
}

#[rmcp::tool_router]
impl CapabilityServer {
    /// Construct a server over an already populated resource registry.
    pub fn new(resources: Arc<ResourceRegistry>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            resources,
        }
    }

    /// Add two integers.
    #[rmcp::tool(description = "Add two numbers.")]
    fn add(&self, Parameters(input): Parameters<AddInput>) -> Result<CallToolResult, McpError> {
        let sum = capabilities::add(input.a, input.b).ok_or_else(|| {
            McpError::invalid_params(
                format!("{} + {} overflows a 64-bit integer", input.a, input.b),
                None,
            )
        })?;
        tracing::debug!(a = input.a, b = input.b, sum, "add");
        let mut result = CallToolResult::success(vec![Content::text(sum.to_string())]);
        result.structured_content = Some(serde_json::json!({ "result": sum }));
        Ok(result)
    }
}

impl CapabilityServer {
    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    pub(crate) fn list_resources_impl(&self) -> ListResourcesResult {
        let resources: Vec<Resource> = self
            .resources
            .iter()
            .map(|entry| {
                RawResource {
                    description: entry.description.clone(),
                    mime_type: Some(entry.mime_type.clone()),
                    ..RawResource::new(entry.uri.clone(), entry.name.clone())
                }
                .no_annotation()
            })
            .collect();
        ListResourcesResult::with_all_items(resources)
    }

    pub(crate) fn read_resource_impl(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        let entry = self.resources.get(uri).ok_or_else(|| {
            tracing::debug!(uri, "resource not found");
            McpError::resource_not_found(
                format!("resource '{uri}' not found"),
                Some(serde_json::json!({ "uri": uri })),
            )
        })?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: entry.uri.clone(),
                mime_type: Some(entry.mime_type.clone()),
                text: entry.read(),
                meta: None,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capserver::capabilities::{PING_PAYLOAD, PING_URI};

    fn server() -> CapabilityServer {
        let registry = capabilities::default_resources().expect("default registry");
        CapabilityServer::new(Arc::new(registry))
    }

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.clone()))
            .collect()
    }

    #[test]
    fn router_exposes_add_only() {
        let tools = server().tool_router.list_all();
        let names: Vec<String> = tools.iter().map(|t| t.name.to_string()).collect();
        assert_eq!(names, vec!["add".to_string()]);

        let schema = serde_json::Value::Object((*tools[0].input_schema).clone());
        let props = &schema["properties"];
        assert!(props.get("a").is_some());
        assert!(props.get("b").is_some());
    }

    #[test]
    fn add_returns_sum() {
        let result = server()
            .add(Parameters(AddInput { a: 2, b: 40 }))
            .expect("add succeeds");
        assert_ne!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "42");
        assert_eq!(
            result.structured_content,
            Some(serde_json::json!({ "result": 42 }))
        );
    }

    #[test]
    fn add_handles_negative_numbers() {
        let result = server()
            .add(Parameters(AddInput { a: -10, b: 3 }))
            .expect("add succeeds");
        assert_eq!(text_of(&result), "-7");
    }

    #[test]
    fn add_overflow_is_invalid_params() {
        let err = server()
            .add(Parameters(AddInput {
                a: i64::MAX,
                b: 1,
            }))
            .unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn non_integer_arguments_do_not_decode() {
        let bad = serde_json::json!({ "a": "one", "b": 2 });
        assert!(serde_json::from_value::<AddInput>(bad).is_err());

        let missing = serde_json::json!({ "a": 1 });
        assert!(serde_json::from_value::<AddInput>(missing).is_err());

        let good = serde_json::json!({ "a": 1, "b": 2 });
        let input: AddInput = serde_json::from_value(good).expect("valid input");
        assert_eq!((input.a, input.b), (1, 2));
    }

    #[test]
    fn lists_ping_resource() {
        let listed = server().list_resources_impl();
        assert_eq!(listed.resources.len(), 1);
        let res = &listed.resources[0];
        assert_eq!(res.uri, PING_URI);
        assert_eq!(res.name, "ping");
        assert_eq!(res.mime_type.as_deref(), Some("text/plain"));
        assert!(listed.next_cursor.is_none());
    }

    #[test]
    fn reads_ping_repeatedly() {
        let server = server();
        for _ in 0..3 {
            let result = server.read_resource_impl(PING_URI).expect("ping readable");
            assert_eq!(result.contents.len(), 1);
            match &result.contents[0] {
                ResourceContents::TextResourceContents {
                    uri,
                    mime_type,
                    text,
                    ..
                } => {
                    assert_eq!(uri, PING_URI);
                    assert_eq!(mime_type.as_deref(), Some("text/plain"));
                    assert_eq!(text, PING_PAYLOAD);
                }
                other => panic!("unexpected contents: {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_resource_is_not_found() {
        let err = server()
            .read_resource_impl("status://missing")
            .unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::RESOURCE_NOT_FOUND);
        assert!(err.message.contains("status://missing"));
    }
}
