//! Acceleration (ZGA) comparison tool.

use schemars::JsonSchema;
use serde::Deserialize;

use super::common::LookingGlassTool;
use crate::domains::looking_glass::QueryRequest;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LgZgaTestParams {
    #[schemars(description = "City code to run the acceleration test from, e.g. HKG")]
    pub city: String,
}

impl From<LgZgaTestParams> for QueryRequest {
    fn from(p: LgZgaTestParams) -> Self {
        QueryRequest::ZgaTest { city: p.city }
    }
}

#[derive(Debug, Clone)]
pub struct LgZgaTestTool;

impl LookingGlassTool for LgZgaTestTool {
    const NAME: &'static str = "run_zga_test";

    const DESCRIPTION: &'static str = "Compare latency from a city toward each test target via \
        the public internet and via the ZGA acceleration overlay. Each entry gives both delays, \
        the target, and the improvement percentage.";

    type Params = LgZgaTestParams;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_metadata() {
        let tool = LgZgaTestTool::to_tool();
        assert_eq!(tool.name, "run_zga_test");
        assert!(tool.description.unwrap().contains("acceleration"));
    }
}
