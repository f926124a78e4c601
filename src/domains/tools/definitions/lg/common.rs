//! Common plumbing shared by the Looking Glass tools.
//!
//! Each tool only declares its name, description and parameter type; routing,
//! argument parsing, off-runtime execution and result formatting live here.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::domains::looking_glass::{
    Backend, DelayResult, LookingGlassError, LookingGlassService, NO_DATA_SENTINEL, QueryOutput,
    QueryRequest,
};
use crate::domains::tools::ToolError;

/// A tool backed by a single Looking Glass query.
pub trait LookingGlassTool: 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Into<QueryRequest> + Send + 'static;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Run the query behind this tool and format the outcome.
    fn execute<B: Backend>(
        params: Self::Params,
        service: Arc<LookingGlassService<B>>,
    ) -> impl Future<Output = Result<CallToolResult, ToolError>> + Send {
        async move {
            let outcome = service.handle_detached(params.into()).await;
            tool_result(outcome)
        }
    }

    /// Create a ToolRoute for the rmcp tool router.
    fn create_route<S, B>(service: Arc<LookingGlassService<B>>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
        B: Backend,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let service = service.clone();
            async move {
                let params: Self::Params = parse_params(args).map_err(McpError::from)?;
                info!("Tool called: {}", Self::NAME);
                Self::execute(params, service).await.map_err(McpError::from)
            }
            .boxed()
        })
    }
}

/// Deserialize a tool's argument object.
pub fn parse_params<P: DeserializeOwned>(args: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Convert a query outcome into the MCP result sent back to the client.
pub fn tool_result(
    outcome: Result<QueryOutput, LookingGlassError>,
) -> Result<CallToolResult, ToolError> {
    match outcome {
        Ok(output) => success_result(&output),
        Err(err) => Ok(error_result(&err)),
    }
}

/// Summary text, the JSON rendering, and the typed result as structured content.
pub fn success_result(output: &QueryOutput) -> Result<CallToolResult, ToolError> {
    let structured = serde_json::to_value(output)?;
    let rendered = serde_json::to_string_pretty(&structured)?;

    Ok(CallToolResult {
        content: vec![Content::text(summarize(output)), Content::text(rendered)],
        structured_content: Some(structured),
        is_error: Some(false),
        meta: None,
    })
}

/// Error result carrying the classified message and its kind.
pub fn error_result(err: &LookingGlassError) -> CallToolResult {
    let message = err.to_string();
    CallToolResult {
        content: vec![Content::text(message.clone())],
        structured_content: Some(serde_json::json!({
            "error": err.kind(),
            "message": message,
        })),
        is_error: Some(true),
        meta: None,
    }
}

/// One-line human summary of a result.
pub fn summarize(output: &QueryOutput) -> String {
    match output {
        QueryOutput::CityDelay(DelayResult::Single(d)) => format!(
            "{} delay from {} to {}: {}",
            capitalize(d.network_type.label()),
            d.from,
            d.to,
            d.delay
        ),
        QueryOutput::CityDelay(DelayResult::Dual(d)) => format!(
            "Delay from {} to {}: private line {}, public network {}",
            d.from,
            d.to,
            display_delay(&d.private_line_delay),
            display_delay(&d.public_network_delay)
        ),
        QueryOutput::EyeballCoverage(report) if report.entries.is_empty() => {
            format!("No eyeball coverage entries for '{}'", report.city)
        }
        QueryOutput::EyeballCoverage(report) => format!(
            "Found {} eyeball network(s) covered from '{}'",
            report.total_count, report.city
        ),
        QueryOutput::ZgaTest(report) if report.entries.is_empty() => {
            format!("No acceleration test results for '{}'", report.city)
        }
        QueryOutput::ZgaTest(report) => format!(
            "Found {} acceleration test result(s) for '{}'",
            report.total_count, report.city
        ),
        QueryOutput::RouterExplore(r) => format!("{} result:\n{}", r.explore_type, r.result),
        QueryOutput::City(c) => format!(
            "{} ({}), {}: city code {}",
            c.name_en, c.name_local, c.country_en, c.code
        ),
    }
}

fn display_delay(value: &str) -> &str {
    if value == NO_DATA_SENTINEL {
        "no data"
    } else {
        value
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
