use axum::body::Body;
use axum::extract::Extension;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Router, middleware};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use legalyze::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, request_id_middleware,
};

/// Echoes the request id the middleware stored in the extensions.
fn echo_router() -> Router {
    Router::new()
        .route(
            "/",
            get(|Extension(RequestId(id)): Extension<RequestId>| async move { id }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

async fn send(request: Request<Body>) -> (StatusCode, String, String) {
    let response = echo_router().oneshot(request).await.unwrap();
    let status = response.status();
    let header = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, header, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn given_empty_request_id_header_when_handling_then_generates_uuid() {
    let request = Request::builder()
        .uri("/")
        .header(REQUEST_ID_HEADER, "")
        .body(Body::empty())
        .unwrap();

    let (status, header, extension_id) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(Uuid::parse_str(&header).is_ok());
    assert_eq!(extension_id, header);
}

#[tokio::test]
async fn given_caller_request_id_when_handling_then_handler_sees_same_id() {
    let request = Request::builder()
        .uri("/")
        .header(REQUEST_ID_HEADER, "lease-upload-42")
        .body(Body::empty())
        .unwrap();

    let (_, header, extension_id) = send(request).await;

    assert_eq!(header, "lease-upload-42");
    assert_eq!(extension_id, "lease-upload-42");
}
