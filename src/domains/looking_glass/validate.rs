//! Input validation, run before any backend request is made.

use super::error::LookingGlassError;
use super::model::{CityCode, ExploreType, NetworkType};
use super::query::{DelayQuery, Query, QueryRequest, RouterExploreQuery};

/// Validate a raw request into a [`Query`].
pub fn validate(request: &QueryRequest) -> Result<Query, LookingGlassError> {
    match request {
        QueryRequest::CityDelay {
            from_city,
            to_city,
            network_type,
        } => validate_delay_query(from_city, to_city, network_type.as_deref()).map(Query::CityDelay),
        QueryRequest::EyeballCoverage { city } => Ok(Query::EyeballCoverage {
            city: require("city", city)?,
        }),
        QueryRequest::ZgaTest { city } => Ok(Query::ZgaTest {
            city: require("city", city)?,
        }),
        QueryRequest::RouterExplore {
            datacenter,
            explore_type,
            target_ip_or_domain,
        } => validate_router_query(datacenter, explore_type, target_ip_or_domain)
            .map(Query::RouterExplore),
        QueryRequest::CityCode { city_name_en } => Ok(Query::CityCode {
            city_name_en: require("city_name_en", city_name_en)?,
        }),
    }
}

/// Validate a city-pair delay query.
///
/// Both codes must be three ASCII letters and must differ once folded to
/// uppercase. An empty `network_type` means "both networks".
pub fn validate_delay_query(
    from: &str,
    to: &str,
    network_type: Option<&str>,
) -> Result<DelayQuery, LookingGlassError> {
    let from_input = from;
    let to_input = to;
    let from = city_code("from_city", from_input)?;
    let to = city_code("to_city", to_input)?;

    if from == to {
        return Err(LookingGlassError::invalid_input(format!(
            "Invalid input: same city supplied twice ('{}' and '{}'). Source and destination must differ.",
            from_input, to_input
        )));
    }

    let network_type = match network_type.map(str::trim).filter(|s| !s.is_empty()) {
        None => None,
        Some(raw) => Some(raw.parse::<NetworkType>().map_err(|_| {
            LookingGlassError::invalid_input(format!(
                "Invalid input: unknown network_type '{}'. Use 'private_line' or 'public_network', \
                 or omit it to query both networks.",
                raw
            ))
        })?),
    };

    Ok(DelayQuery {
        from,
        to,
        from_input: from_input.to_string(),
        to_input: to_input.to_string(),
        network_type,
    })
}

pub fn validate_router_query(
    datacenter: &str,
    explore_type: &str,
    target: &str,
) -> Result<RouterExploreQuery, LookingGlassError> {
    let datacenter = require("datacenter", datacenter)?;
    let explore_type = explore_type.parse::<ExploreType>().map_err(|_| {
        LookingGlassError::invalid_input(format!(
            "Invalid input: unknown explore_type '{}'. Use one of: ping, mtr, bgp.",
            explore_type.trim()
        ))
    })?;
    let target = require("target_ip_or_domain", target)?;

    Ok(RouterExploreQuery {
        datacenter,
        explore_type,
        target,
    })
}

fn city_code(field: &str, raw: &str) -> Result<CityCode, LookingGlassError> {
    CityCode::parse(raw).ok_or_else(|| {
        LookingGlassError::invalid_input(format!(
            "Invalid input: {} '{}' is not a 3-letter city code (e.g. HKG, TYO, NYC).",
            field, raw
        ))
    })
}

/// Free-form fields only need to be non-blank; legitimacy is the backend's call.
/// The value is kept exactly as supplied.
fn require(field: &str, raw: &str) -> Result<String, LookingGlassError> {
    if raw.trim().is_empty() {
        return Err(LookingGlassError::invalid_input(format!(
            "Invalid input: {} must not be empty.",
            field
        )));
    }
    Ok(raw.to_string())
}
