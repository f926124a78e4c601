//! Tagged query model.
//!
//! A [`QueryRequest`] carries loosely-typed caller input. Validation turns it
//! into a [`Query`], which alone decides the backend endpoint, the query-string
//! parameters and the wording of error messages.

use serde::Serialize;

use super::model::{
    CityCode, CityEntries, CityInfo, DelayResult, EyeballCoverageEntry, ExploreType, NetworkType,
    RouterExploreResult, ZgaTestEntry,
};

/// Raw, unvalidated input for one of the five lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRequest {
    CityDelay {
        from_city: String,
        to_city: String,
        network_type: Option<String>,
    },
    EyeballCoverage {
        city: String,
    },
    ZgaTest {
        city: String,
    },
    RouterExplore {
        datacenter: String,
        explore_type: String,
        target_ip_or_domain: String,
    },
    CityCode {
        city_name_en: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayQuery {
    /// Canonical codes, sent to the backend.
    pub from: CityCode,
    pub to: CityCode,
    /// Codes as the caller spelled them, quoted in messages.
    pub from_input: String,
    pub to_input: String,
    /// `None` asks for both networks at once.
    pub network_type: Option<NetworkType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterExploreQuery {
    pub datacenter: String,
    pub explore_type: ExploreType,
    pub target: String,
}

/// A validated query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    CityDelay(DelayQuery),
    EyeballCoverage { city: String },
    ZgaTest { city: String },
    RouterExplore(RouterExploreQuery),
    CityCode { city_name_en: String },
}

/// Backend endpoints, relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CityDelay,
    SdnCityDelay,
    PublicCityDelay,
    EyeballCoverage,
    ZgaTest,
    RouterExplore,
    City,
}

impl Endpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Self::CityDelay => "/city/delay",
            Self::SdnCityDelay => "/sdn/city/delay",
            Self::PublicCityDelay => "/public/city/delay",
            Self::EyeballCoverage => "/eyeball/coverage",
            Self::ZgaTest => "/zga/test",
            Self::RouterExplore => "/router/explore",
            Self::City => "/city",
        }
    }
}

impl Query {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CityDelay(_) => "city_delay",
            Self::EyeballCoverage { .. } => "eyeball_coverage",
            Self::ZgaTest { .. } => "zga_test",
            Self::RouterExplore(_) => "router_explore",
            Self::CityCode { .. } => "city_code",
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::CityDelay(q) => match q.network_type {
                None => Endpoint::CityDelay,
                Some(NetworkType::PrivateLine) => Endpoint::SdnCityDelay,
                Some(NetworkType::PublicNetwork) => Endpoint::PublicCityDelay,
            },
            Self::EyeballCoverage { .. } => Endpoint::EyeballCoverage,
            Self::ZgaTest { .. } => Endpoint::ZgaTest,
            Self::RouterExplore(_) => Endpoint::RouterExplore,
            Self::CityCode { .. } => Endpoint::City,
        }
    }

    /// Query-string parameters, in the order they are sent.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::CityDelay(q) => vec![
                ("from_city", q.from.to_string()),
                ("to_city", q.to.to_string()),
            ],
            Self::EyeballCoverage { city } | Self::ZgaTest { city } => {
                vec![("city", city.clone())]
            }
            Self::RouterExplore(q) => vec![
                ("datacenter", q.datacenter.clone()),
                ("explore_type", q.explore_type.to_string()),
                ("target_ip_or_domain", q.target.clone()),
            ],
            Self::CityCode { city_name_en } => vec![("city_name_en", city_name_en.clone())],
        }
    }

    /// What the query retrieves, phrased for the middle of a sentence.
    pub fn describe(&self) -> String {
        match self {
            Self::CityDelay(q) => match q.network_type {
                None => format!("delay data between '{}' and '{}'", q.from_input, q.to_input),
                Some(nt) => format!(
                    "{} delay data between '{}' and '{}'",
                    nt.label(),
                    q.from_input,
                    q.to_input
                ),
            },
            Self::EyeballCoverage { city } => format!("eyeball coverage for city '{}'", city),
            Self::ZgaTest { city } => format!("acceleration test results for city '{}'", city),
            Self::RouterExplore(q) => format!(
                "{} results from datacenter '{}' toward '{}'",
                q.explore_type, q.datacenter, q.target
            ),
            Self::CityCode { city_name_en } => format!("the city code of '{}'", city_name_en),
        }
    }

    /// Message for an HTTP 404.
    pub fn not_found_message(&self) -> String {
        match self {
            Self::CityDelay(q) => format!(
                "Route not found between '{}' and '{}'. Please verify the city names.",
                q.from_input, q.to_input
            ),
            Self::EyeballCoverage { city } | Self::ZgaTest { city } => format!(
                "City '{}' not found. Please verify the city code.",
                city
            ),
            Self::RouterExplore(q) => format!(
                "Datacenter '{}' or target '{}' not found. Please verify the datacenter name and the target.",
                q.datacenter, q.target
            ),
            Self::CityCode { city_name_en } => format!(
                "City '{}' not found. Please verify the English city name.",
                city_name_en
            ),
        }
    }

    /// Message when the backend answers successfully with nothing in it.
    pub fn empty_message(&self) -> String {
        match self {
            Self::CityDelay(_) => format!(
                "No {} found. Please check if both cities exist in the network.",
                self.describe()
            ),
            Self::RouterExplore(q) => format!(
                "No {} result returned by datacenter '{}' for '{}'. \
                 Please verify the datacenter name and re-resolve the target.",
                q.explore_type, q.datacenter, q.target
            ),
            Self::CityCode { city_name_en } => format!(
                "No city found for '{}'. Please verify the English city name and try again.",
                city_name_en
            ),
            Self::EyeballCoverage { .. } | Self::ZgaTest { .. } => {
                format!("No {} found.", self.describe())
            }
        }
    }

    /// Message for an HTTP 400.
    pub fn bad_request_message(&self) -> String {
        match self {
            Self::CityDelay(q) => format!(
                "Invalid request: Please check the city names '{}' and '{}' for correct spelling and format.",
                q.from_input, q.to_input
            ),
            Self::EyeballCoverage { city } | Self::ZgaTest { city } => format!(
                "Invalid request: Please check the city '{}' for correct spelling and format.",
                city
            ),
            Self::RouterExplore(q) => format!(
                "Invalid request: Please check datacenter '{}', explore type '{}' and target '{}'.",
                q.datacenter, q.explore_type, q.target
            ),
            Self::CityCode { city_name_en } => format!(
                "Invalid request: Please check the city name '{}' for correct spelling and format.",
                city_name_en
            ),
        }
    }
}

/// A successful, fully typed query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    CityDelay(DelayResult),
    EyeballCoverage(CityEntries<EyeballCoverageEntry>),
    ZgaTest(CityEntries<ZgaTestEntry>),
    RouterExplore(RouterExploreResult),
    City(CityInfo),
}
