//! Tool Registry - names of every available tool.

use super::definitions::{
    LgCityCodeTool, LgCityDelayTool, LgEyeballCoverageTool, LgRouterExploreTool, LgZgaTestTool,
    LookingGlassTool,
};

/// Tool registry - lists the tools the server exposes.
///
/// Must stay in step with `build_tool_router`; the router tests check it.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            LgCityDelayTool::NAME,
            LgEyeballCoverageTool::NAME,
            LgZgaTestTool::NAME,
            LgRouterExploreTool::NAME,
            LgCityCodeTool::NAME,
        ]
    }
}
