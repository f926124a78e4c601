//! City code resolution tool.

use schemars::JsonSchema;
use serde::Deserialize;

use super::common::LookingGlassTool;
use crate::domains::looking_glass::QueryRequest;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LgCityCodeParams {
    #[schemars(description = "English city name, e.g. Tokyo (case-insensitive)")]
    pub city_name_en: String,
}

impl From<LgCityCodeParams> for QueryRequest {
    fn from(p: LgCityCodeParams) -> Self {
        QueryRequest::CityCode {
            city_name_en: p.city_name_en,
        }
    }
}

/// Resolves an English city name to its code, local name and country.
#[derive(Debug, Clone)]
pub struct LgCityCodeTool;

impl LookingGlassTool for LgCityCodeTool {
    const NAME: &'static str = "get_city_code";

    const DESCRIPTION: &'static str = "Resolve an English city name to the 3-letter city code \
        used by the other looking glass tools, with local and English city and country names. \
        Use this first when you only know a city by name.";

    type Params = LgCityCodeParams;
}
