//! Shape raw backend JSON into typed results.
//!
//! "Empty" conventions differ per query kind:
//! - dual-network delay relies on the backend's own sentinel strings, so an
//!   unusable payload is a shape error;
//! - single-network delay, router and city lookups treat an empty payload as
//!   "nothing found";
//! - coverage and acceleration lists treat `[]` as a valid empty result.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::model::{
    CityCode, CityEntries, CityInfo, DelayResult, DualNetworkDelay, ExploreType, NetworkType,
    RouterExploreResult, SingleNetworkDelay,
};
use super::query::{DelayQuery, Query, QueryOutput};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Payload carries no data (null, empty, or only falsy values).
    #[error("payload is empty")]
    Empty,

    /// Payload is missing required fields or has the wrong structure.
    #[error("{0}")]
    Shape(String),
}

impl NormalizeError {
    fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }
}

impl From<serde_json::Error> for NormalizeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Shape(e.to_string())
    }
}

/// Shape `raw` into the result type of `query`.
pub fn normalize(query: &Query, raw: Value) -> Result<QueryOutput, NormalizeError> {
    match query {
        Query::CityDelay(q) => delay(q, raw).map(QueryOutput::CityDelay),
        Query::EyeballCoverage { city } => {
            Ok(QueryOutput::EyeballCoverage(CityEntries::new(city, entries(raw)?)))
        }
        Query::ZgaTest { city } => Ok(QueryOutput::ZgaTest(CityEntries::new(city, entries(raw)?))),
        Query::RouterExplore(_) => router_explore(raw).map(QueryOutput::RouterExplore),
        Query::CityCode { .. } => city(raw).map(QueryOutput::City),
    }
}

pub fn delay(query: &DelayQuery, raw: Value) -> Result<DelayResult, NormalizeError> {
    match query.network_type {
        None => dual_delay(raw).map(DelayResult::Dual),
        Some(network_type) => single_delay(query, network_type, raw).map(DelayResult::Single),
    }
}

#[derive(Deserialize)]
struct RawDualDelay {
    from_city: String,
    to_city: String,
    private_line_delay: String,
    public_network_delay: String,
}

fn dual_delay(raw: Value) -> Result<DualNetworkDelay, NormalizeError> {
    expect_object(&raw)?;
    let raw: RawDualDelay = serde_json::from_value(raw)?;
    Ok(DualNetworkDelay {
        from: raw.from_city,
        to: raw.to_city,
        private_line_delay: raw.private_line_delay,
        public_network_delay: raw.public_network_delay,
    })
}

#[derive(Deserialize)]
struct RawSingleDelay {
    #[serde(default)]
    from_city: Option<String>,
    #[serde(default)]
    to_city: Option<String>,
    delay: String,
}

fn single_delay(
    query: &DelayQuery,
    network_type: NetworkType,
    raw: Value,
) -> Result<SingleNetworkDelay, NormalizeError> {
    if is_empty_payload(&raw) {
        return Err(NormalizeError::Empty);
    }
    expect_object(&raw)?;
    let raw: RawSingleDelay = serde_json::from_value(raw)?;

    Ok(SingleNetworkDelay {
        from: non_blank(raw.from_city).unwrap_or_else(|| query.from.to_string()),
        to: non_blank(raw.to_city).unwrap_or_else(|| query.to.to_string()),
        // The request decides the network, whatever the payload says.
        network_type,
        delay: raw.delay,
    })
}

/// Map a JSON array item-wise. `[]` is a valid, empty result.
pub fn entries<T: DeserializeOwned>(raw: Value) -> Result<Vec<T>, NormalizeError> {
    let Value::Array(items) = raw else {
        return Err(NormalizeError::shape(format!(
            "expected a list of entries, got {}",
            json_type(&raw)
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|e| NormalizeError::shape(format!("entry {}: {}", index, e)))
        })
        .collect()
}

#[derive(Deserialize)]
struct RawRouterExplore {
    explore_type: String,
    result: String,
}

pub fn router_explore(raw: Value) -> Result<RouterExploreResult, NormalizeError> {
    if is_empty_payload(&raw) {
        return Err(NormalizeError::Empty);
    }
    expect_object(&raw)?;
    let raw: RawRouterExplore = serde_json::from_value(raw)?;
    let explore_type = raw.explore_type.parse::<ExploreType>().map_err(|_| {
        NormalizeError::shape(format!("unknown explore_type '{}'", raw.explore_type))
    })?;

    Ok(RouterExploreResult {
        explore_type,
        result: raw.result,
    })
}

#[derive(Deserialize)]
struct RawCity {
    city_code: String,
    city_name: String,
    city_name_en: String,
    country_name: String,
    country_name_en: String,
}

pub fn city(raw: Value) -> Result<CityInfo, NormalizeError> {
    if is_empty_payload(&raw) {
        return Err(NormalizeError::Empty);
    }
    expect_object(&raw)?;
    let raw: RawCity = serde_json::from_value(raw)?;
    let code = CityCode::parse(&raw.city_code)
        .ok_or_else(|| NormalizeError::shape(format!("invalid city_code '{}'", raw.city_code)))?;

    Ok(CityInfo {
        code,
        name_local: raw.city_name,
        name_en: raw.city_name_en,
        country_local: raw.country_name,
        country_en: raw.country_name_en,
    })
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` carry no data.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Falsy, or an object whose every value is falsy.
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Object(o) => o.values().all(is_falsy),
        other => is_falsy(other),
    }
}

fn expect_object(value: &Value) -> Result<(), NormalizeError> {
    if value.is_object() {
        Ok(())
    } else {
        Err(NormalizeError::shape(format!(
            "expected an object, got {}",
            json_type(value)
        )))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::looking_glass::model::{EyeballCoverageEntry, NO_DATA_SENTINEL, ZgaTestEntry};
    use serde_json::json;

    fn delay_query(network_type: Option<NetworkType>) -> DelayQuery {
        DelayQuery {
            from: CityCode::parse("HKG").unwrap(),
            to: CityCode::parse("NYC").unwrap(),
            from_input: "HKG".into(),
            to_input: "NYC".into(),
            network_type,
        }
    }

    #[test]
    fn test_dual_delay_keeps_values_verbatim() {
        let raw = json!({
            "from_city": "HKG",
            "to_city": "NYC",
            "private_line_delay": "120ms",
            "public_network_delay": "no data provide"
        });
        let result = delay(&delay_query(None), raw).unwrap();
        assert_eq!(
            result,
            DelayResult::Dual(DualNetworkDelay {
                from: "HKG".into(),
                to: "NYC".into(),
                private_line_delay: "120ms".into(),
                public_network_delay: NO_DATA_SENTINEL.into(),
            })
        );
    }

    #[test]
    fn test_dual_delay_missing_key_is_shape_error() {
        let raw = json!({"from_city": "HKG", "to_city": "NYC", "private_line_delay": "120ms"});
        let err = delay(&delay_query(None), raw).unwrap_err();
        match err {
            NormalizeError::Shape(msg) => assert!(msg.contains("public_network_delay"), "{msg}"),
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_dual_delay_null_is_shape_error() {
        let err = delay(&delay_query(None), Value::Null).unwrap_err();
        assert!(matches!(err, NormalizeError::Shape(_)));
    }

    #[test]
    fn test_single_delay_empty_payloads_are_not_found() {
        let query = delay_query(Some(NetworkType::PrivateLine));
        for raw in [
            Value::Null,
            json!({}),
            json!([]),
            json!(""),
            json!({"from_city": "", "to_city": null, "delay": ""}),
        ] {
            assert_eq!(delay(&query, raw.clone()).unwrap_err(), NormalizeError::Empty, "{raw}");
        }
    }

    #[test]
    fn test_single_delay_injects_network_type_and_falls_back_to_input() {
        let query = delay_query(Some(NetworkType::PublicNetwork));
        let raw = json!({"delay": "210ms", "network_type": "private_line"});
        let result = delay(&query, raw).unwrap();
        assert_eq!(
            result,
            DelayResult::Single(SingleNetworkDelay {
                from: "HKG".into(),
                to: "NYC".into(),
                network_type: NetworkType::PublicNetwork,
                delay: "210ms".into(),
            })
        );
    }

    #[test]
    fn test_single_delay_missing_delay_is_shape_error() {
        let query = delay_query(Some(NetworkType::PrivateLine));
        let err = delay(&query, json!({"from_city": "HKG", "to_city": "NYC"})).unwrap_err();
        assert!(matches!(err, NormalizeError::Shape(_)));
    }

    #[test]
    fn test_entries_accept_empty_list() {
        let list: Vec<EyeballCoverageEntry> = entries(json!([])).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_entries_keep_backend_order() {
        let raw = json!([
            {"agent_city_code": "HKG", "eye_city_name": "Hong Kong", "eye_country_name": "China",
             "org_name": "HKBN", "asn": "9269", "delay": 3.5},
            {"agent_city_code": "HKG", "eye_city_name": "Macau", "eye_country_name": "China",
             "org_name": "CTM", "asn": "4609", "delay": 1}
        ]);
        let list: Vec<EyeballCoverageEntry> = entries(raw).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].org_name, "HKBN");
        assert_eq!(list[1].delay, 1.0);
    }

    #[test]
    fn test_entries_reject_non_list_and_bad_items() {
        let err = entries::<ZgaTestEntry>(json!({"target": "x"})).unwrap_err();
        assert_eq!(err, NormalizeError::shape("expected a list of entries, got an object"));

        let err = entries::<ZgaTestEntry>(json!([{"target": "x"}])).unwrap_err();
        match err {
            NormalizeError::Shape(msg) => assert!(msg.starts_with("entry 0:"), "{msg}"),
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_router_explore() {
        let result = router_explore(json!({"explore_type": "MTR", "result": "  1 10.0.0.1\n"}))
            .unwrap();
        assert_eq!(result.explore_type, ExploreType::Mtr);
        assert_eq!(result.result, "  1 10.0.0.1\n");

        assert_eq!(router_explore(Value::Null).unwrap_err(), NormalizeError::Empty);
        assert!(matches!(
            router_explore(json!({"explore_type": "ping"})).unwrap_err(),
            NormalizeError::Shape(_)
        ));
    }

    #[test]
    fn test_city() {
        let info = city(json!({
            "city_code": "TYO",
            "city_name": "东京",
            "city_name_en": "Tokyo",
            "country_name": "日本",
            "country_name_en": "Japan"
        }))
        .unwrap();
        assert_eq!(info.code.as_str(), "TYO");
        assert_eq!(info.name_local, "东京");
        assert_eq!(info.country_en, "Japan");

        assert_eq!(city(Value::Null).unwrap_err(), NormalizeError::Empty);
        assert!(matches!(
            city(json!({"city_code": "TYO"})).unwrap_err(),
            NormalizeError::Shape(_)
        ));
    }

    #[test]
    fn test_normalize_switches_on_query() {
        let query = Query::ZgaTest { city: "HKG".into() };
        let output = normalize(&query, json!([])).unwrap();
        match output {
            QueryOutput::ZgaTest(report) => {
                assert_eq!(report.city, "HKG");
                assert_eq!(report.total_count, 0);
            }
            other => panic!("unexpected output {other:?}"),
        }
    }
}
