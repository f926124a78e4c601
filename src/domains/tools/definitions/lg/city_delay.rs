//! City-to-city latency tool.
//!
//! Queries the private line (SDN backbone) and/or public network delay between
//! two IATA metropolitan area codes.

use schemars::JsonSchema;
use serde::Deserialize;

use super::common::LookingGlassTool;
use crate::domains::looking_glass::QueryRequest;

/// Parameters for the city delay tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LgCityDelayParams {
    /// Source city code.
    #[schemars(description = "Source city code (IATA metropolitan area code), e.g. HKG, TYO, NYC")]
    pub from_city: String,

    /// Destination city code.
    #[schemars(description = "Destination city code (IATA metropolitan area code), e.g. LON, MOW, SIN")]
    pub to_city: String,

    /// Restrict the query to one network.
    #[serde(default)]
    #[schemars(
        description = "Optional: 'private_line' or 'public_network'. Omit to get both networks side by side"
    )]
    pub network_type: Option<String>,
}

impl From<LgCityDelayParams> for QueryRequest {
    fn from(p: LgCityDelayParams) -> Self {
        QueryRequest::CityDelay {
            from_city: p.from_city,
            to_city: p.to_city,
            network_type: p.network_type,
        }
    }
}

/// Looking Glass city delay tool.
#[derive(Debug, Clone)]
pub struct LgCityDelayTool;

impl LookingGlassTool for LgCityDelayTool {
    const NAME: &'static str = "get_city_delay";

    const DESCRIPTION: &'static str = "Query network latency between two cities over the private \
        backbone (dedicated lines) and/or the public internet. City codes are IATA metropolitan \
        area codes such as HKG (Hong Kong), TYO (Tokyo), NYC (New York), LON (London), \
        SIN (Singapore), LAX (Los Angeles). Without network_type both delays are returned; a \
        network without a measurement reports 'no data provide'. Useful for planning Private \
        Connect (L2) and Cloud Router (L3) links.";

    type Params = LgCityDelayParams;
}
