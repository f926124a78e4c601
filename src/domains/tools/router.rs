//! Tool Router - builds the rmcp ToolRouter.
//!
//! Every route shares one query service, so all tools hit the same backend.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::looking_glass::{Backend, LookingGlassService};

use super::definitions::{
    LgCityCodeTool, LgCityDelayTool, LgEyeballCoverageTool, LgRouterExploreTool, LgZgaTestTool,
    LookingGlassTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S, B>(service: Arc<LookingGlassService<B>>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
    B: Backend,
{
    ToolRouter::new()
        .with_route(LgCityDelayTool::create_route(service.clone()))
        .with_route(LgEyeballCoverageTool::create_route(service.clone()))
        .with_route(LgZgaTestTool::create_route(service.clone()))
        .with_route(LgRouterExploreTool::create_route(service.clone()))
        .with_route(LgCityCodeTool::create_route(service))
}
