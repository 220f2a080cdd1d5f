use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::json;
use std::time::Duration;
use tower::ServiceExt;

use crate::applications::router::submit_handler;
use crate::applications::{application_router, BasicInfo};
use crate::forwarder::{AttemptError, WebhookReply};
use crate::notifications::MemoryConfirmations;

fn post_json(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request builds")
}

#[tokio::test]
async fn submit_route_returns_submission_id() {
    let (service, transport, confirmations) =
        build_service(Ok(WebhookReply::accepted(Some("row-7"))));
    let router = application_router(service);

    let body = serde_json::to_vec(&application()).expect("serializes");
    let response = router
        .oneshot(post_json("/api/submit", body))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!({ "success": true, "submissionId": "row-7" }));
    assert_eq!(transport.calls(), 1);
    assert_eq!(confirmations.sent().len(), 1);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (service, transport, _) = build_service(Ok(WebhookReply::accepted(None)));
    let router = application_router(service);

    let response = router
        .oneshot(post_json("/api/submit", b"{\"basicInfo\":".to_vec()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["success"], false);
    assert!(payload["error"]
        .as_str()
        .expect("error text")
        .starts_with("Invalid application body"));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn validation_failures_are_bad_requests() {
    let (service, transport, _) = build_service(Ok(WebhookReply::accepted(None)));

    let mut missing_resume = application();
    missing_resume.resume_url = "not a url".to_string();
    let response = submit_handler(State(service.clone()), Ok(Json(missing_resume))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let blank_identity = crate::applications::Application {
        basic_info: BasicInfo::default(),
        ..application()
    };
    let response = submit_handler(State(service), Ok(Json(blank_identity))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "First name is required");

    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn exhausted_retries_ask_the_applicant_to_try_again() {
    let (service, transport, confirmations) =
        build_service(Err(AttemptError::Timeout(Duration::from_millis(200))));

    let response = submit_handler(State(service), Ok(Json(application()))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["error"],
        "Failed to submit application. Please try again."
    );
    assert_eq!(transport.calls(), 2);
    assert!(confirmations.sent().is_empty());
}

#[tokio::test]
async fn permanent_rejections_surface_the_webhook_reason() {
    let (service, transport, _) = build_service(Ok(WebhookReply::refused("Missing resume")));

    let response = submit_handler(State(service), Ok(Json(application()))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "Missing resume");
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn unconfigured_webhook_is_a_server_error() {
    let forwarder = crate::forwarder::SubmissionForwarder::from_config(
        &crate::config::WebhookConfig::default(),
        std::sync::Arc::new(crate::catalog::CommitteeCatalog::standard()),
    )
    .expect("forwarder builds");
    let service = std::sync::Arc::new(crate::applications::ApplicationService::new(
        std::sync::Arc::new(forwarder),
        std::sync::Arc::new(MemoryConfirmations::default()),
    ));

    let response = application_router(service)
        .oneshot(post_json(
            "/api/submit",
            serde_json::to_vec(&application()).expect("serializes"),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "spreadsheet webhook URL is not configured");
}

#[tokio::test]
async fn catalog_routes_list_and_find_committees() {
    let (service, _, _) = build_service(Ok(WebhookReply::accepted(None)));
    let router = application_router(service);

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/committees")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["version"], "2025-fall");
    assert_eq!(payload["committees"].as_array().map(Vec::len), Some(13));

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/committees/marketing")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["questions"][2]["type"], "url");

    let response = router
        .oneshot(
            Request::get("/api/committees/chess")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
