#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use stokab_api::types::{EstimateRequest, PointRef};
use stokab_api::{ApiClient, Credentials, Error};

// ── Helpers ─────────────────────────────────────────────────────────

/// Matches requests that do NOT carry an Authorization header.
struct NoAuthorizationHeader;

impl Match for NoAuthorizationHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

fn credentials() -> Credentials {
    Credentials::new(
        "test-client",
        ["availability", "pricing"],
        "test-secret".to_owned().into(),
    )
}

async fn mount_token(server: &MockServer, access_token: &str) {
    Mock::given(method("POST"))
        .and(path("/connect/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 3600,
            "access_token": access_token,
        })))
        .mount(server)
        .await;
}

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    mount_token(&server, "tok-123").await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = ApiClient::connect(base_url, credentials()).await.unwrap();
    (server, client)
}

fn point_record(id: &str, related: &[&str]) -> serde_json::Value {
    json!({
        "pointId": id,
        "address": {
            "city": "Stockholm",
            "street": "Luntmakargatan",
            "number": "18",
        },
        "realEstate": { "name": "BRANDVAKTEN 7" },
        "coordinates": {
            "projection": "RT90_2.5_GON_V_0:-15",
            "latitude": 6_581_822.0,
            "longitude": 1_628_308.0,
        },
        "district": "Norrmalm",
        "cityArea": "Vasastan",
        "fiberStatus": "AVAILABLE",
        "relatedPointIds": related.iter().map(|n| json!({ "name": n })).collect::<Vec<_>>(),
        "pointInfo": { "pointType": 5, "aNode": "A123", "oNode": "O456" },
    })
}

// ── Token grant ─────────────────────────────────────────────────────

#[tokio::test]
async fn token_grant_sends_form_without_auth_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/connect/token"))
        .and(NoAuthorizationHeader)
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=test-client"))
        .and(body_string_contains("client_secret=test-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 3600,
            "access_token": "tok-123",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = Url::parse(&server.uri()).unwrap();
    let client = ApiClient::connect(base_url, credentials()).await.unwrap();

    assert_eq!(client.token().token_type(), "Bearer");
    assert_eq!(client.token().access_token(), "tok-123");
    assert_eq!(client.token().authorization_value(), "Bearer tok-123");
    assert_eq!(client.token().expires_in(), 3600);
}

#[tokio::test]
async fn token_response_missing_fields_is_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/connect/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": "invalid_client" })),
        )
        .mount(&server)
        .await;

    let base_url = Url::parse(&server.uri()).unwrap();
    let result = ApiClient::connect(base_url, credentials()).await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert!(
                message.contains("missing expected fields"),
                "unexpected message: {message}"
            );
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn token_grant_rejection_is_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/connect/token"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid_scope"))
        .mount(&server)
        .await;

    let base_url = Url::parse(&server.uri()).unwrap();
    let result = ApiClient::connect(base_url, credentials()).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn reauthenticate_replaces_the_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/connect/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 3600,
            "access_token": "tok-old",
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let base_url = Url::parse(&server.uri()).unwrap();
    let mut client = ApiClient::connect(base_url, credentials()).await.unwrap();
    assert_eq!(client.token().access_token(), "tok-old");

    mount_token(&server, "tok-new").await;
    client.reauthenticate().await.unwrap();

    assert_eq!(client.token().authorization_value(), "Bearer tok-new");
}

#[tokio::test]
async fn custom_transport_settings_apply_to_every_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/connect/token"))
        .and(header("User-Agent", "fiber-planner/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 3600,
            "access_token": "tok-123",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = stokab_api::TransportConfig {
        user_agent: "fiber-planner/2.0".to_owned(),
        ..stokab_api::TransportConfig::default()
    };
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = ApiClient::connect_with_transport(base_url, credentials(), &transport)
        .await
        .unwrap();

    assert_eq!(client.token().access_token(), "tok-123");
}

// ── Authenticated calls ─────────────────────────────────────────────

#[tokio::test]
async fn calls_carry_the_authorization_header() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/1.3/invoiceGroup"))
        .and(header("Authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "ig-1", "name": "Default group" },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let groups = client.invoice_groups().await.unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, "ig-1");
    assert_eq!(groups[0].name, "Default group");
}

#[tokio::test]
async fn get_by_point_id_sends_the_id_param() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/1.3/availability/getByPointId"))
        .and(query_param("pointId", "A-427011"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([point_record("A-427011", &[])])),
        )
        .mount(&server)
        .await;

    let rows = client.get_by_point_id("A-427011").await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].point_id, "A-427011");
    assert_eq!(rows[0].address.street, "Luntmakargatan");
    assert_eq!(rows[0].fiber_status, "AVAILABLE");
    assert_eq!(rows[0].point_info.point_type, Some(5));
    assert!(rows[0].related_point_ids.is_empty());
}

#[tokio::test]
async fn get_by_address_sends_every_param() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/1.3/availability/getByAddress"))
        .and(query_param("city", "Stockholm"))
        .and(query_param("street", "Luntmakargatan"))
        .and(query_param("number", "18"))
        .and(query_param("littera", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let rows = client
        .get_by_address("Stockholm", "Luntmakargatan", "18", None)
        .await
        .unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
async fn get_by_estate_sends_suffix_even_when_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/1.3/availability/getByEstate"))
        .and(query_param("realestate", "BRANDVAKTEN 7"))
        .and(query_param("estatesuffix", ""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([point_record("A-427011", &[])])),
        )
        .mount(&server)
        .await;

    let rows = client.get_by_estate("BRANDVAKTEN 7", "").await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].real_estate.name, "BRANDVAKTEN 7");
}

// ── Error envelope ──────────────────────────────────────────────────

#[tokio::test]
async fn message_envelope_becomes_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/1.3/availability/getByEstate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "not found" })))
        .mount(&server)
        .await;

    let result = client.get_by_estate("NONESUCH 1", "").await;

    match result {
        Err(Error::Api { ref message }) => assert_eq!(message, "not found"),
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn non_2xx_surfaces_as_transport_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/1.3/frameworkAgreement"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.framework_agreements().await;

    assert!(
        matches!(result, Err(Error::Transport(_))),
        "expected Transport error, got: {result:?}"
    );
}

// ── Price estimate ──────────────────────────────────────────────────

#[tokio::test]
async fn price_estimate_posts_the_request_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/1.3/priceEstimate"))
        .and(header("Authorization", "Bearer tok-123"))
        .and(wiremock::matchers::body_partial_json(json!({
            "invoiceGroupId": "ig-1",
            "frameworkAgreementId": "fa-1",
            "from": { "pointId": "A-1" },
            "to": { "pointId": "B-2" },
            "customerType": "Operator",
            "contractPeriodYears": 2,
            "noOfSingleFibers": 0,
            "noOfFiberPairs": 1,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "products": [
                    {
                        "id": "p-1",
                        "name": "Point to point fiber pair",
                        "type": "FiberPair",
                        "comment": null,
                        "price": {
                            "contractPeriodYears": 2,
                            "oneTimeFee": 1000.0,
                            "monthlyFee": 200.0,
                        },
                    },
                ],
            },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let request = EstimateRequest {
        invoice_group_id: "ig-1".to_owned(),
        framework_agreement_id: "fa-1".to_owned(),
        from: PointRef {
            point_id: "A-1".to_owned(),
        },
        to: PointRef {
            point_id: "B-2".to_owned(),
        },
        customer_type: "Operator".to_owned(),
        contract_period_years: 2,
        no_of_single_fibers: 0,
        no_of_fiber_pairs: 1,
    };

    let estimates = client.price_estimate(&request).await.unwrap();

    assert_eq!(estimates.len(), 1);
    assert_eq!(estimates[0].products.len(), 1);
    assert_eq!(estimates[0].products[0].kind, "FiberPair");
    assert!((estimates[0].products[0].price.monthly_fee - 200.0).abs() < f64::EPSILON);
}
