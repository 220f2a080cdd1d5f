use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::{Application, SubmissionResult};
use super::service::ApplicationService;
use crate::forwarder::{ForwardError, WebhookTransport};
use crate::notifications::ConfirmationPublisher;

const RETRY_LATER: &str = "Failed to submit application. Please try again.";

/// Router builder exposing the submit endpoint and the read-only catalog.
pub fn application_router<P, T>(service: Arc<ApplicationService<P, T>>) -> Router
where
    P: ConfirmationPublisher + 'static,
    T: WebhookTransport + 'static,
{
    Router::new()
        .route("/api/submit", post(submit_handler::<P, T>))
        .route("/api/committees", get(catalog_handler::<P, T>))
        .route(
            "/api/committees/:committee_id",
            get(committee_handler::<P, T>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<P, T>(
    State(service): State<Arc<ApplicationService<P, T>>>,
    body: Result<Json<Application>, JsonRejection>,
) -> Response
where
    P: ConfirmationPublisher + 'static,
    T: WebhookTransport + 'static,
{
    let Json(application) = match body {
        Ok(body) => body,
        Err(rejection) => {
            let payload = SubmissionResult::failed(format!(
                "Invalid application body: {}",
                rejection.body_text()
            ));
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match service.submit(application).await {
        Ok(receipt) => {
            let payload = SubmissionResult::succeeded(receipt.submission_id);
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(ForwardError::Invalid(error)) => {
            let payload = SubmissionResult::failed(error.to_string());
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(error @ ForwardError::NotConfigured) => {
            let payload = SubmissionResult::failed(error.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
        Err(ForwardError::Rejected { last_error, .. }) => {
            let payload = SubmissionResult::failed(last_error.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
        Err(ForwardError::Exhausted { .. }) => {
            let payload = SubmissionResult::failed(RETRY_LATER);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn catalog_handler<P, T>(
    State(service): State<Arc<ApplicationService<P, T>>>,
) -> Response
where
    P: ConfirmationPublisher + 'static,
    T: WebhookTransport + 'static,
{
    (StatusCode::OK, Json(service.catalog())).into_response()
}

pub(crate) async fn committee_handler<P, T>(
    State(service): State<Arc<ApplicationService<P, T>>>,
    Path(committee_id): Path<String>,
) -> Response
where
    P: ConfirmationPublisher + 'static,
    T: WebhookTransport + 'static,
{
    match service.catalog().get(&committee_id) {
        Some(committee) => (StatusCode::OK, Json(committee)).into_response(),
        None => {
            let payload = json!({
                "error": format!("unknown committee: {committee_id}"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
