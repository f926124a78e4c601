//! Eyeball network coverage tool.

use schemars::JsonSchema;
use serde::Deserialize;

use super::common::LookingGlassTool;
use crate::domains::looking_glass::QueryRequest;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LgEyeballCoverageParams {
    #[schemars(description = "City code of the point of presence, e.g. HKG")]
    pub city: String,
}

impl From<LgEyeballCoverageParams> for QueryRequest {
    fn from(p: LgEyeballCoverageParams) -> Self {
        QueryRequest::EyeballCoverage { city: p.city }
    }
}

/// Lists the end-user ISP networks reachable from a city and their latency.
#[derive(Debug, Clone)]
pub struct LgEyeballCoverageTool;

impl LookingGlassTool for LgEyeballCoverageTool {
    const NAME: &'static str = "get_eyeball_coverage";

    const DESCRIPTION: &'static str = "List the eyeball (end-user ISP) networks covered from a \
        city's point of presence: city and country of the eyeball network, organization, ASN and \
        measured delay in milliseconds. An empty list means no coverage data for that city.";

    type Params = LgEyeballCoverageParams;
}
