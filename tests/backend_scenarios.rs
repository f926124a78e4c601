// End-to-end query tests against a mock Looking Glass backend (wiremock).
//
// The HTTP backend is blocking, so queries run off the async runtime:
// through `handle_detached`, or on a plain thread.

use std::sync::Arc;
use std::time::Duration;

use rmcp::model::RawContent;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use looking_glass_mcp::core::config::BackendConfig;
use looking_glass_mcp::domains::looking_glass::{
    DelayResult, DualNetworkDelay, LookingGlassError, LookingGlassService, NetworkType,
    QueryOutput, QueryRequest, SingleNetworkDelay,
};
use looking_glass_mcp::domains::tools::definitions::{
    LgCityDelayParams, LgCityDelayTool, LookingGlassTool,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Arc<LookingGlassService>) {
    let server = MockServer::start().await;
    let service = service_for(&format!("{}/looking-glass", server.uri()), 5);
    (server, service)
}

fn service_for(base_url: &str, timeout_secs: u64) -> Arc<LookingGlassService> {
    Arc::new(LookingGlassService::from_config(&BackendConfig {
        base_url: base_url.to_string(),
        timeout_secs,
    }))
}

fn delay_request(from: &str, to: &str, network_type: Option<&str>) -> QueryRequest {
    QueryRequest::CityDelay {
        from_city: from.into(),
        to_city: to.into(),
        network_type: network_type.map(Into::into),
    }
}

async fn mount_json(server: &MockServer, route: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

// ── City delay ──────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_private_line_delay() {
    let (server, service) = setup().await;

    Mock::given(method("GET"))
        .and(path("/looking-glass/sdn/city/delay"))
        .and(query_param("from_city", "HKG"))
        .and(query_param("to_city", "NYC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "from_city": "HKG",
            "to_city": "NYC",
            "delay": "180ms"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = service
        .handle_detached(delay_request("hkg", "nyc", Some("private_line")))
        .await
        .unwrap();

    assert_eq!(
        result,
        QueryOutput::CityDelay(DelayResult::Single(SingleNetworkDelay {
            from: "HKG".into(),
            to: "NYC".into(),
            network_type: NetworkType::PrivateLine,
            delay: "180ms".into(),
        }))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dual_network_delay_keeps_sentinel() {
    let (server, service) = setup().await;
    mount_json(
        &server,
        "/looking-glass/city/delay",
        200,
        json!({
            "from_city": "HKG",
            "to_city": "NYC",
            "private_line_delay": "120ms",
            "public_network_delay": "no data provide"
        }),
    )
    .await;

    let result = service
        .handle_detached(delay_request("HKG", "NYC", None))
        .await
        .unwrap();

    assert_eq!(
        result,
        QueryOutput::CityDelay(DelayResult::Dual(DualNetworkDelay {
            from: "HKG".into(),
            to: "NYC".into(),
            private_line_delay: "120ms".into(),
            public_network_delay: "no data provide".into(),
        }))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_public_network_empty_object_is_not_found() {
    let (server, service) = setup().await;
    mount_json(&server, "/looking-glass/public/city/delay", 200, json!({})).await;

    let err = service
        .handle_detached(delay_request("HKG", "LON", Some("public_network")))
        .await
        .unwrap_err();

    assert!(
        matches!(err, LookingGlassError::NotFound(ref msg) if msg.contains("'HKG'") && msg.contains("'LON'")),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_route_not_found() {
    let (server, service) = setup().await;
    mount_json(&server, "/looking-glass/sdn/city/delay", 404, json!({"detail": "Not Found"})).await;

    let err = service
        .handle_detached(delay_request("HKG", "NYC", Some("private_line")))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        LookingGlassError::NotFound(
            "Route not found between 'HKG' and 'NYC'. Please verify the city names.".into()
        )
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_quotes_codes_as_typed() {
    let (server, service) = setup().await;
    Mock::given(method("GET"))
        .and(path("/looking-glass/sdn/city/delay"))
        .and(query_param("from_city", "HKG"))
        .and(query_param("to_city", "NYC"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = service
        .handle_detached(delay_request("hkg", "nyc", Some("private_line")))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        LookingGlassError::NotFound(
            "Route not found between 'hkg' and 'nyc'. Please verify the city names.".into()
        )
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_padded_code_is_rejected() {
    let (server, service) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    for padded in [" HKG", "HKG ", "\tHKG\n"] {
        let err = service
            .clone()
            .handle_detached(delay_request(padded, "NYC", None))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_input", "accepted {padded:?}");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bad_request() {
    let (server, service) = setup().await;
    mount_json(&server, "/looking-glass/city/delay", 400, json!({"detail": "bad"})).await;

    let err = service
        .handle_detached(delay_request("HKG", "NYC", None))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "bad_request");
    assert!(err.to_string().contains("'HKG' and 'NYC'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_reports_status() {
    let (server, service) = setup().await;
    Mock::given(method("GET"))
        .and(path("/looking-glass/city/delay"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = service
        .handle_detached(delay_request("HKG", "NYC", None))
        .await
        .unwrap_err();

    match err {
        LookingGlassError::ServiceError { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("503"));
        }
        other => panic!("expected ServiceError, got: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_body_is_shape_error() {
    let (server, service) = setup().await;
    Mock::given(method("GET"))
        .and(path("/looking-glass/city/delay"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = service
        .handle_detached(delay_request("HKG", "NYC", None))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "shape_error");
    assert!(err.to_string().starts_with("Data format error"));
}

// ── Lists ───────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_eyeball_coverage_empty_list() {
    let (server, service) = setup().await;
    mount_json(&server, "/looking-glass/eyeball/coverage", 200, json!([])).await;

    let result = service
        .handle_detached(QueryRequest::EyeballCoverage { city: "SIN".into() })
        .await
        .unwrap();

    match result {
        QueryOutput::EyeballCoverage(report) => {
            assert_eq!(report.city, "SIN");
            assert!(report.entries.is_empty());
            assert_eq!(report.total_count, 0);
        }
        other => panic!("expected coverage, got: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_eyeball_coverage_entries() {
    let (server, service) = setup().await;
    Mock::given(method("GET"))
        .and(path("/looking-glass/eyeball/coverage"))
        .and(query_param("city", "HKG"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "agent_city_code": "HKG",
            "eye_city_name": "Kowloon",
            "eye_country_name": "Hong Kong",
            "org_name": "Example Broadband",
            "asn": "AS64500",
            "delay": 2.5
        }])))
        .mount(&server)
        .await;

    let result = service
        .handle_detached(QueryRequest::EyeballCoverage { city: "HKG".into() })
        .await
        .unwrap();

    let QueryOutput::EyeballCoverage(report) = result else {
        panic!("expected coverage");
    };
    assert_eq!(report.total_count, 1);
    assert_eq!(report.entries[0].asn, "AS64500");
    assert_eq!(report.entries[0].delay, 2.5);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_zga_results() {
    let (server, service) = setup().await;
    mount_json(
        &server,
        "/looking-glass/zga/test",
        200,
        json!([{
            "via_public_internet_delay": "210ms",
            "via_zga_delay": "150ms",
            "target": "203.0.113.10",
            "improvement_percentage": "28.57%"
        }]),
    )
    .await;

    let result = service
        .handle_detached(QueryRequest::ZgaTest { city: "TYO".into() })
        .await
        .unwrap();

    let QueryOutput::ZgaTest(report) = result else {
        panic!("expected zga results");
    };
    assert_eq!(report.city, "TYO");
    assert_eq!(report.entries[0].improvement_percentage, "28.57%");
}

// ── Router and city ─────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_router_explore_passes_output_through() {
    let (server, service) = setup().await;
    let output = "PING 1.1.1.1: 56 data bytes\n64 bytes from 1.1.1.1: icmp_seq=0 ttl=58 time=1.2 ms";
    Mock::given(method("GET"))
        .and(path("/looking-glass/router/explore"))
        .and(query_param("datacenter", "HKG"))
        .and(query_param("explore_type", "ping"))
        .and(query_param("target_ip_or_domain", "1.1.1.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "explore_type": "ping",
            "result": output
        })))
        .mount(&server)
        .await;

    let result = service
        .handle_detached(QueryRequest::RouterExplore {
            datacenter: "HKG".into(),
            explore_type: "PING".into(),
            target_ip_or_domain: "1.1.1.1".into(),
        })
        .await
        .unwrap();

    let QueryOutput::RouterExplore(explored) = result else {
        panic!("expected router result");
    };
    assert_eq!(explored.result, output);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_city_name_is_not_found() {
    let (server, service) = setup().await;
    Mock::given(method("GET"))
        .and(path("/looking-glass/city"))
        .and(query_param("city_name_en", "Atlantis"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let err = service
        .handle_detached(QueryRequest::CityCode {
            city_name_en: "Atlantis".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "not_found");
    assert!(err.to_string().contains("verify"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_city_lookup() {
    let (server, service) = setup().await;
    mount_json(
        &server,
        "/looking-glass/city",
        200,
        json!({
            "city_code": "tyo",
            "city_name": "東京",
            "city_name_en": "Tokyo",
            "country_name": "日本",
            "country_name_en": "Japan"
        }),
    )
    .await;

    let result = service
        .handle_detached(QueryRequest::CityCode {
            city_name_en: "tokyo".into(),
        })
        .await
        .unwrap();

    let QueryOutput::City(info) = result else {
        panic!("expected city info");
    };
    assert_eq!(info.code.as_str(), "TYO");
    assert_eq!(info.country_en, "Japan");
}

// ── Validation and transport ────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_input_never_reaches_backend() {
    let (server, service) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let err = service
        .handle_detached(delay_request("HKG", "hkg", None))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "invalid_input");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a local port nobody listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let service = service_for(&format!("http://127.0.0.1:{port}/looking-glass"), 2);

    let err = service
        .handle_detached(delay_request("HKG", "NYC", Some("private_line")))
        .await
        .unwrap_err();

    assert!(
        matches!(err, LookingGlassError::Transport(ref msg) if msg.starts_with("Network error")),
        "expected Transport, got: {err:?}"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/looking-glass/city/delay"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let service = service_for(&format!("{}/looking-glass", server.uri()), 1);

    let err = service
        .handle_detached(delay_request("HKG", "NYC", None))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "transport_error");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_one_thread_serves_backends_with_different_timeouts() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/looking-glass/sdn/city/delay",
        200,
        json!({"from_city": "HKG", "to_city": "NYC", "delay": "180ms"}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/looking-glass/city/delay"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let base = format!("{}/looking-glass", server.uri());
    let patient = service_for(&base, 5);
    let hasty = service_for(&base, 1);

    // Both queries run on the same worker thread and share its client.
    let (tx, rx) = tokio::sync::oneshot::channel();
    std::thread::spawn(move || {
        let first = patient.handle(&delay_request("HKG", "NYC", Some("private_line")));
        let second = hasty.handle(&delay_request("HKG", "NYC", None));
        let _ = tx.send((first, second));
    });
    let (first, second) = rx.await.unwrap();

    assert!(first.is_ok(), "{first:?}");
    assert_eq!(second.unwrap_err().kind(), "transport_error");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_repeated_queries_are_identical() {
    let (server, service) = setup().await;
    mount_json(
        &server,
        "/looking-glass/sdn/city/delay",
        200,
        json!({"from_city": "HKG", "to_city": "NYC", "delay": "180ms"}),
    )
    .await;

    let first = service
        .clone()
        .handle_detached(delay_request("HKG", "NYC", Some("private_line")))
        .await
        .unwrap();
    let second = service
        .handle_detached(delay_request("HKG", "NYC", Some("private_line")))
        .await
        .unwrap();
    assert_eq!(first, second);
}

// ── Tool surface ────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_city_delay_tool_reports_error_in_result() {
    let (server, service) = setup().await;
    mount_json(&server, "/looking-glass/sdn/city/delay", 404, json!({})).await;

    let params = LgCityDelayParams {
        from_city: "HKG".into(),
        to_city: "NYC".into(),
        network_type: Some("private_line".into()),
    };
    let result = LgCityDelayTool::execute(params, service).await.unwrap();

    assert_eq!(result.is_error, Some(true));
    let RawContent::Text(text) = &result.content[0].raw else {
        panic!("expected text content");
    };
    assert!(text.text.starts_with("Route not found between 'HKG' and 'NYC'"));
    assert_eq!(result.structured_content.unwrap()["error"], "not_found");
}
