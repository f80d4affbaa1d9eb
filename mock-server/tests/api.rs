use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- canned bodies ---

#[tokio::test]
async fn json_returns_test_object() {
    let resp = app().oneshot(request("GET", "/json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let value: serde_json::Value = body_json(resp).await;
    assert_eq!(value, serde_json::json!({ "test": "true" }));
}

#[tokio::test]
async fn text_returns_plain_text() {
    let resp = app().oneshot(request("GET", "/text")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[http::header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body_bytes(resp).await.as_ref(), b"test");
}

#[tokio::test]
async fn json_rejects_post() {
    let resp = app().oneshot(request("POST", "/json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- no content ---

#[tokio::test]
async fn no_content_for_any_method() {
    for method in ["GET", "POST", "PUT", "DELETE"] {
        let resp = app().oneshot(request(method, "/no-content")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT, "{method}");
        assert!(body_bytes(resp).await.is_empty(), "{method}");
    }
}

// --- status ---

#[tokio::test]
async fn status_returns_requested_code() {
    let resp = app().oneshot(request("GET", "/status/404")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_bytes(resp).await.as_ref(),
        b"<!DOCTYPE html><title>404</title>"
    );
}

#[tokio::test]
async fn status_accepts_post() {
    let resp = app()
        .oneshot(json_request("POST", "/status/500", r#""body""#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn status_out_of_range_returns_400() {
    let resp = app().oneshot(request("GET", "/status/42")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn status_not_a_number_returns_400() {
    let resp = app().oneshot(request("GET", "/status/teapot")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- echo ---

#[tokio::test]
async fn echo_reports_method_headers_and_body() {
    let resp = app()
        .oneshot(json_request("PUT", "/echo", r#"{"title":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "PUT");
    assert_eq!(echo.headers["content-type"], "application/json");
    assert_eq!(echo.body, Some(serde_json::json!({ "title": "Buy milk" })));
}

#[tokio::test]
async fn echo_without_body() {
    let resp = app().oneshot(request("DELETE", "/echo")).await.unwrap();

    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "DELETE");
    assert!(echo.body.is_none());
}

#[tokio::test]
async fn echo_non_json_body_is_none() {
    let resp = app()
        .oneshot(json_request("POST", "/echo", "not json"))
        .await
        .unwrap();

    let echo: Echo = body_json(resp).await;
    assert!(echo.body.is_none());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = app().oneshot(request("GET", "/missing")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
