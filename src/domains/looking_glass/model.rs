//! Value types for Looking Glass queries and results.
//!
//! Every value here is built fresh for a single tool call and never mutated
//! afterwards.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placeholder the backend puts in a dual-network delay when one network has
/// no measurement for the city pair.
pub const NO_DATA_SENTINEL: &str = "no data provide";

/// A 3-letter city code (IATA metropolitan area code), always uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct CityCode(String);

impl CityCode {
    /// Parse a caller-supplied code: exactly three ASCII letters, folded to
    /// uppercase. Padding is not stripped.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() == 3 && raw.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(Self(raw.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which network a single-network delay measurement refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NetworkType {
    /// Dedicated SDN backbone.
    PrivateLine,
    /// Public internet routing.
    PublicNetwork,
}

impl NetworkType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrivateLine => "private_line",
            Self::PublicNetwork => "public_network",
        }
    }

    /// Human-readable label used in summaries and messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PrivateLine => "private line",
            Self::PublicNetwork => "public network",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "private_line" => Ok(Self::PrivateLine),
            "public_network" => Ok(Self::PublicNetwork),
            _ => Err(()),
        }
    }
}

/// Diagnostic command run by a datacenter router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExploreType {
    Ping,
    Mtr,
    Bgp,
}

impl ExploreType {
    pub const ALL: [ExploreType; 3] = [Self::Ping, Self::Mtr, Self::Bgp];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Mtr => "mtr",
            Self::Bgp => "bgp",
        }
    }
}

impl fmt::Display for ExploreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExploreType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or(())
    }
}

// ============================================================================
// Results
// ============================================================================

/// Delay measured on one network only.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SingleNetworkDelay {
    pub from: String,
    pub to: String,
    pub network_type: NetworkType,
    pub delay: String,
}

/// Delay on both networks. Either value may be [`NO_DATA_SENTINEL`].
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct DualNetworkDelay {
    pub from: String,
    pub to: String,
    pub private_line_delay: String,
    pub public_network_delay: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum DelayResult {
    Single(SingleNetworkDelay),
    Dual(DualNetworkDelay),
}

/// One eyeball (end-user ISP) network reachable from a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EyeballCoverageEntry {
    pub agent_city_code: String,
    pub eye_city_name: String,
    pub eye_country_name: String,
    pub org_name: String,
    pub asn: String,
    /// Milliseconds.
    pub delay: f64,
}

/// Public internet vs accelerated overlay latency toward one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ZgaTestEntry {
    pub via_public_internet_delay: String,
    pub via_zga_delay: String,
    pub target: String,
    pub improvement_percentage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct RouterExploreResult {
    pub explore_type: ExploreType,
    /// Raw command output, passed through untouched.
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CityInfo {
    pub code: CityCode,
    pub name_local: String,
    pub name_en: String,
    pub country_local: String,
    pub country_en: String,
}

/// Zero or more entries returned for a single city.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CityEntries<T> {
    pub city: String,
    pub entries: Vec<T>,
    pub total_count: usize,
}

impl<T> CityEntries<T> {
    pub fn new(city: impl Into<String>, entries: Vec<T>) -> Self {
        Self {
            city: city.into(),
            total_count: entries.len(),
            entries,
        }
    }
}
