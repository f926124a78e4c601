//! Router diagnostics tool (ping, mtr, bgp).

use schemars::JsonSchema;
use serde::Deserialize;

use super::common::LookingGlassTool;
use crate::domains::looking_glass::QueryRequest;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LgRouterExploreParams {
    #[schemars(description = "Datacenter whose router runs the command")]
    pub datacenter: String,

    #[schemars(description = "Diagnostic to run: ping, mtr or bgp")]
    pub explore_type: String,

    #[schemars(description = "Target IP address or domain name")]
    pub target_ip_or_domain: String,
}

impl From<LgRouterExploreParams> for QueryRequest {
    fn from(p: LgRouterExploreParams) -> Self {
        QueryRequest::RouterExplore {
            datacenter: p.datacenter,
            explore_type: p.explore_type,
            target_ip_or_domain: p.target_ip_or_domain,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LgRouterExploreTool;

impl LookingGlassTool for LgRouterExploreTool {
    const NAME: &'static str = "router_explore";

    const DESCRIPTION: &'static str = "Run a router diagnostic (ping, mtr traceroute, or bgp \
        route lookup) from a datacenter toward an IP address or domain. Returns the raw command \
        output unchanged.";

    type Params = LgRouterExploreParams;
}
