//! Behavior-driven tests for the request builder and dispatcher.
//!
//! These run against the offline `StaticHttpClient`, so they check exactly
//! what the client would put on the wire and how it treats each kind of
//! response.

use std::sync::Arc;

use oxr_core::{
    Client, ClientConfig, ClientError, ClientErrorKind, Currency, HttpError, HttpResponse,
    RatesOptions, StaticHttpClient, ValidationError,
};
use time::macros::{date, datetime};

const RATES_BODY: &str = r#"{"disclaimer":"d","license":"l","timestamp":1705312800,"base":"USD","rates":{"EUR":0.9}}"#;

fn client_with(transport: Arc<StaticHttpClient>, base: &str) -> Client {
    let config = ClientConfig::new("behavior-app")
        .expect("valid config")
        .with_base(Currency::parse(base).expect("valid base"))
        .with_base_url("https://oxr.test/api")
        .expect("valid url");
    Client::with_http_client(config, transport)
}

fn codes(values: &[&str]) -> Vec<Currency> {
    Currency::parse_list(values).expect("valid codes")
}

// =============================================================================
// Query Encoding
// =============================================================================

#[tokio::test]
async fn when_show_alternative_is_set_wire_value_is_lowercase_literal() {
    // Given: A client and both boolean settings
    let transport = Arc::new(StaticHttpClient::ok_json(RATES_BODY));
    let client = client_with(transport.clone(), "USD");

    // When: Rates are requested once with each setting
    client
        .latest(RatesOptions::new().with_show_alternative(true))
        .await
        .expect("decodes");
    client
        .latest(RatesOptions::new().with_show_alternative(false))
        .await
        .expect("decodes");

    // Then: The query carries exactly "true" then "false"
    let values: Vec<String> = transport
        .requests()
        .iter()
        .map(|request| request.query_value("show_alternative").unwrap_or_default().to_owned())
        .collect();
    assert_eq!(values, ["true", "false"]);

    let full_url = transport.requests()[0].full_url();
    assert!(full_url.contains("show_alternative=true"), "{full_url}");
    assert!(!full_url.contains("True"));
}

#[tokio::test]
async fn when_symbols_are_given_they_travel_as_one_comma_joined_value() {
    // Given: A client
    let transport = Arc::new(StaticHttpClient::ok_json(RATES_BODY));
    let client = client_with(transport.clone(), "USD");

    // When: Rates are requested with two symbols
    client
        .latest(RatesOptions::new().with_symbols(codes(&["USD", "EUR"])))
        .await
        .expect("decodes");

    // Then: One `symbols` key holds both codes
    let request = transport.last_request().expect("recorded");
    assert_eq!(request.query_value("symbols"), Some("USD,EUR"));
    assert_eq!(
        request.query.iter().filter(|(key, _)| key == "symbols").count(),
        1
    );
}

#[tokio::test]
async fn when_symbols_are_empty_the_key_is_sent_blank_but_absent_when_omitted() {
    // Given: A client
    let transport = Arc::new(StaticHttpClient::ok_json(RATES_BODY));
    let client = client_with(transport.clone(), "USD");

    // When: One call sends an empty list and another omits symbols
    client
        .latest(RatesOptions::new().with_symbols(Vec::new()))
        .await
        .expect("decodes");
    client.latest(RatesOptions::new()).await.expect("decodes");

    // Then: The first carries `symbols=` and the second has no such key
    let requests = transport.requests();
    assert_eq!(requests[0].query_value("symbols"), Some(""));
    assert_eq!(requests[1].query_value("symbols"), None);
}

// =============================================================================
// Base Currency
// =============================================================================

#[tokio::test]
async fn when_no_base_is_given_configured_default_is_used() {
    // Given: A client whose default base is EUR
    let transport = Arc::new(StaticHttpClient::ok_json(RATES_BODY));
    let client = client_with(transport.clone(), "EUR");

    // When: Rates are requested without a base
    client.latest(RatesOptions::new()).await.expect("decodes");

    // Then: The configured base is sent
    let request = transport.last_request().expect("recorded");
    assert_eq!(request.query_value("base"), Some("EUR"));
}

#[tokio::test]
async fn when_base_is_given_it_overrides_the_default() {
    // Given: A client whose default base is USD
    let transport = Arc::new(StaticHttpClient::ok_json(RATES_BODY));
    let client = client_with(transport.clone(), "USD");

    // When: Rates are requested against EUR across every rate endpoint
    let options = RatesOptions::new().with_base(Currency::parse("EUR").expect("valid"));
    client.latest(options.clone()).await.expect("decodes");
    client
        .historical(date!(2024 - 01 - 15), options.clone())
        .await
        .expect("decodes");

    // Then: Every request carries the override
    for request in transport.requests() {
        assert_eq!(request.query_value("base"), Some("EUR"), "{}", request.url);
    }
    assert_eq!(client.config().base().as_str(), "USD");
}

// =============================================================================
// Paths
// =============================================================================

#[tokio::test]
async fn when_historical_rates_are_requested_date_is_a_path_segment() {
    // Given: A client
    let transport = Arc::new(StaticHttpClient::ok_json(RATES_BODY));
    let client = client_with(transport.clone(), "USD");

    // When: Rates for 2024-01-15 are requested
    client
        .historical(date!(2024 - 01 - 15), RatesOptions::new())
        .await
        .expect("decodes");

    // Then: The path holds the date and the query does not
    let request = transport.last_request().expect("recorded");
    assert!(request.url.contains("/historical/2024-01-15"), "{}", request.url);
    assert!(request.query.iter().all(|(key, _)| key != "date"));
    assert!(!request.full_url().contains("date="));
}

#[tokio::test]
async fn every_endpoint_resolves_under_the_configured_host() {
    // Given: Canned bodies routed per endpoint
    let transport = Arc::new(
        StaticHttpClient::ok_json("{}")
            .with_route("latest.json", HttpResponse::ok_json(RATES_BODY))
            .with_route("historical/", HttpResponse::ok_json(RATES_BODY))
            .with_route(
                "time-series.json",
                HttpResponse::ok_json(r#"{"start_date":"a","end_date":"b","rates":{}}"#),
            )
            .with_route(
                "ohlc.json",
                HttpResponse::ok_json(r#"{"start_time":"a","end_time":"b","rates":{}}"#),
            ),
    );
    let client = client_with(transport.clone(), "USD");

    // When: Each endpoint is called
    client.currencies().await.expect("currencies");
    client.latest(RatesOptions::new()).await.expect("latest");
    client
        .historical(date!(2024 - 01 - 15), RatesOptions::new())
        .await
        .expect("historical");
    client
        .time_series(date!(2024 - 01 - 01), date!(2024 - 01 - 31), RatesOptions::new())
        .await
        .expect("time series");
    client
        .ohlc(
            datetime!(2024-01-15 10:00:00 UTC),
            oxr_core::Period::ThirtyMinutes,
            RatesOptions::new(),
        )
        .await
        .expect("ohlc");

    // Then: Each URL matches its template and carries the app id
    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        [
            "https://oxr.test/api/currencies.json",
            "https://oxr.test/api/latest.json",
            "https://oxr.test/api/historical/2024-01-15.json",
            "https://oxr.test/api/time-series.json",
            "https://oxr.test/api/ohlc.json",
        ]
    );
    for request in transport.requests() {
        assert_eq!(request.query_value("app_id"), Some("behavior-app"));
    }
}

// =============================================================================
// Response Handling
// =============================================================================

#[tokio::test]
async fn when_api_returns_401_user_gets_status_error_regardless_of_body() {
    // Given: The API rejects the key with a body that would decode as rates
    let transport = Arc::new(StaticHttpClient::new(HttpResponse::new(401, RATES_BODY)));
    let client = client_with(transport, "USD");

    // When: Rates are requested
    let err = client.latest(RatesOptions::new()).await.expect_err("must fail");

    // Then: The status error surfaces with code and raw body
    assert_eq!(err.kind(), ClientErrorKind::Status);
    assert_eq!(err.status(), Some(401));
    assert!(matches!(err, ClientError::Status { ref body, .. } if body == RATES_BODY));
}

#[tokio::test]
async fn when_api_returns_rates_they_are_exposed_unmodified() {
    // Given: The API answers with a single EUR rate
    let transport = Arc::new(StaticHttpClient::ok_json(r#"{"rates": {"EUR": 0.9}}"#));
    let client = client_with(transport, "USD");

    // When: Latest rates are requested
    let rates = client.latest(RatesOptions::new()).await.expect("decodes");

    // Then: The rate comes through as-is
    assert_eq!(rates.rates.get("EUR"), Some(&0.9));
    assert_eq!(rates.rates.len(), 1);
}

#[tokio::test]
async fn three_failure_categories_are_distinguishable() {
    // Given: Bad input, a dead network and a rejecting API
    let bad_input = Currency::parse("U$D").expect_err("invalid code");
    let offline = client_with(
        Arc::new(StaticHttpClient::failing(HttpError::new("dns failure"))),
        "USD",
    );
    let rejecting = client_with(
        Arc::new(StaticHttpClient::new(HttpResponse::new(403, "{}"))),
        "USD",
    );

    // When: Each scenario plays out
    let validation = ClientError::from(bad_input);
    let connectivity = offline.usage().await.expect_err("must fail");
    let status = rejecting.usage().await.expect_err("must fail");

    // Then: Each lands in its own category
    assert_eq!(validation.kind(), ClientErrorKind::Validation);
    assert_eq!(connectivity.kind(), ClientErrorKind::Connectivity);
    assert_eq!(status.kind(), ClientErrorKind::Status);
}

#[tokio::test]
async fn when_base_url_is_malformed_user_gets_validation_error_not_connectivity() {
    // Given: A misconfigured OXR_BASE_URL
    let lookup = |name: &str| match name {
        "OXR_APP_ID" => Some(String::from("behavior-app")),
        "OXR_BASE_URL" => Some(String::from("not a url")),
        _ => None,
    };

    // When: The configuration is loaded, and the URL is set directly
    let from_env = ClientConfig::from_lookup(lookup).expect_err("must fail");
    let direct = ClientConfig::new("behavior-app")
        .expect("valid config")
        .with_base_url("not a url")
        .expect_err("must fail");

    // Then: Both surface as bad input before any request exists
    for err in [from_env, direct] {
        assert!(matches!(err, ValidationError::InvalidBaseUrl { .. }), "{err:?}");
        assert_eq!(ClientError::from(err).kind(), ClientErrorKind::Validation);
    }
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_calls_resolve_with_their_own_responses() {
    // Given: Distinct canned bodies for usage and latest
    let usage_body = r#"{"status":200,"data":{"app_id":"behavior-app","status":"active",
        "plan":{"name":"Free"},
        "usage":{"requests":7,"requests_quota":1000,"requests_remaining":993}}}"#;
    let transport = Arc::new(
        StaticHttpClient::ok_json("{}")
            .with_route("usage.json", HttpResponse::ok_json(usage_body))
            .with_route("latest.json", HttpResponse::ok_json(RATES_BODY)),
    );
    let client = client_with(transport.clone(), "USD");

    // When: Both calls run at the same time from separate tasks
    let usage_client = client.clone();
    let usage = tokio::spawn(async move { usage_client.usage().await });
    let latest_client = client.clone();
    let latest = tokio::spawn(async move { latest_client.latest(RatesOptions::new()).await });

    let usage = usage.await.expect("task").expect("usage decodes");
    let latest = latest.await.expect("task").expect("latest decodes");

    // Then: Neither result is contaminated by the other
    assert_eq!(usage.data.usage.requests, 7);
    assert_eq!(usage.data.plan.name, "Free");
    assert_eq!(latest.rate("EUR"), Some(0.9));
    assert_eq!(transport.requests().len(), 2);
}
