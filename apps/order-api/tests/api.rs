use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use order_api::{app, ApiConfig, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn router() -> Router {
    app(AppState::new(ApiConfig::default()))
}

async fn send(router: Router, method: Method, uri: &str, body: impl Into<Body>) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body.into())
        .unwrap();
    router.oneshot(request).await.unwrap()
}

async fn post_order(order: Value) -> Response {
    send(router(), Method::POST, "/order", order.to_string()).await
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_standard_order_returns_total() {
    let response = post_order(json!({
        "prices": [100.0],
        "quantities": [10],
        "country": "DE",
        "reduction": "STANDARD"
    }))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(json_body(response).await, json!({ "total": 1164.0 }));
}

#[tokio::test]
async fn test_capitalized_fields_accepted() {
    let response = post_order(json!({
        "Prices": [50],
        "Quantities": [2],
        "Country": "IT",
        "Reduction": "HALF PRICE"
    }))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "total": 62.5 }));
}

#[tokio::test]
async fn test_zero_total_is_success() {
    let response = post_order(json!({
        "prices": [0.0],
        "quantities": [3],
        "country": "FR",
        "reduction": "STANDARD"
    }))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "total": 0.0 }));
}

#[tokio::test]
async fn test_empty_tier_is_bad_request() {
    let response = post_order(json!({
        "prices": [100.0],
        "quantities": [10],
        "country": "DE",
        "reduction": ""
    }))
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_black_friday_is_not_found() {
    let response = post_order(json!({
        "prices": [100.0],
        "quantities": [10],
        "country": "DE",
        "reduction": "BLACK FRIDAY"
    }))
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_orders_are_bad_requests() {
    let cases = [
        json!({ "prices": [1.0, 2.0], "quantities": [1], "country": "DE", "reduction": "STANDARD" }),
        json!({ "prices": [-1.0], "quantities": [1], "country": "DE", "reduction": "STANDARD" }),
        json!({ "prices": [1.0], "quantities": [-1], "country": "DE", "reduction": "STANDARD" }),
        json!({ "prices": [1.0], "quantities": [1], "country": "US", "reduction": "STANDARD" }),
        json!({ "prices": [1.0], "quantities": [1.5], "country": "DE", "reduction": "STANDARD" }),
    ];

    for case in cases {
        let response = post_order(case.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{case}");
    }
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let response = send(router(), Method::POST, "/order", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("malformed order"));
}

#[tokio::test]
async fn test_sub_cent_prices_priced_at_full_precision() {
    let response = post_order(json!({
        "prices": [0.005],
        "quantities": [1000],
        "country": "DE",
        "reduction": "NONE"
    }))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "total": 6.0 }));
}

#[tokio::test]
async fn test_field_names_match_any_case() {
    let response = post_order(json!({
        "PRICES": [100.0],
        "quantities": [10],
        "COUNTRY": "DE",
        "rEdUcTiOn": "STANDARD"
    }))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "total": 1164.0 }));
}

#[tokio::test]
async fn test_oversized_order_is_bad_request() {
    let config = ApiConfig {
        max_body_bytes: 16,
        ..ApiConfig::default()
    };
    let router = app(AppState::new(config));

    let order = json!({
        "prices": [100.0],
        "quantities": [10],
        "country": "DE",
        "reduction": "STANDARD"
    });
    let response = send(router, Method::POST, "/order", order.to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("unreadable order body"));
}

#[tokio::test]
async fn test_order_requires_post() {
    let response = send(router(), Method::GET, "/order", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(router(), Method::PUT, "/order", "{}").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_feedback_is_acknowledged() {
    let response = send(router(), Method::POST, "/feedback", "great service").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(router(), Method::POST, "/feedback", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unreadable_feedback_is_no_content() {
    let config = ApiConfig {
        max_body_bytes: 8,
        ..ApiConfig::default()
    };
    let router = app(AppState::new(config));

    let response = send(router, Method::POST, "/feedback", "x".repeat(64)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_health() {
    let response = send(router(), Method::GET, "/health", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"OK");
}
