mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::StatusCode;
use common::*;

use hbsa_apply::catalog::CommitteeCatalog;
use hbsa_apply::forwarder::{AttemptError, ForwardError, SubmissionForwarder, WebhookPayload};

fn forwarder(config: &hbsa_apply::config::WebhookConfig) -> SubmissionForwarder {
    SubmissionForwarder::from_config(config, Arc::new(CommitteeCatalog::standard()))
        .expect("forwarder builds")
}

#[tokio::test]
async fn recovers_after_two_server_errors() {
    let mock = MockWebhook::new(|call| match call {
        1 | 2 => MockReply::status(StatusCode::SERVICE_UNAVAILABLE),
        _ => MockReply::accepted("row-12"),
    });
    let url = mock.spawn().await;

    let receipt = forwarder(&webhook_config(url))
        .forward(&application())
        .await
        .expect("third attempt succeeds");

    assert_eq!(mock.calls(), 3);
    assert_eq!(receipt.attempts, 3);
    assert_eq!(receipt.submission_id.as_str(), "row-12");
}

#[tokio::test]
async fn bad_request_fails_after_one_call() {
    let mock = MockWebhook::new(|_| MockReply::status(StatusCode::BAD_REQUEST));
    let url = mock.spawn().await;

    let err = forwarder(&webhook_config(url))
        .forward(&application())
        .await
        .expect_err("400 is permanent");

    assert_eq!(mock.calls(), 1);
    match err {
        ForwardError::Rejected {
            attempts,
            last_error: AttemptError::Status { status, .. },
        } => {
            assert_eq!(attempts, 1);
            assert_eq!(status, 400);
        }
        other => panic!("expected permanent rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn stalled_webhook_times_out_each_attempt() {
    let mock = MockWebhook::new(|_| MockReply::Stall(Duration::from_secs(5)));
    let url = mock.spawn().await;
    let config = hbsa_apply::config::WebhookConfig {
        timeout: Duration::from_millis(150),
        max_attempts: 2,
        base_delay: Duration::from_millis(50),
        ..webhook_config(url)
    };

    let started = Instant::now();
    let err = forwarder(&config)
        .forward(&application())
        .await
        .expect_err("every attempt stalls");
    let elapsed = started.elapsed();

    assert_eq!(
        err,
        ForwardError::Exhausted {
            attempts: 2,
            last_error: AttemptError::Timeout(Duration::from_millis(150)),
        }
    );
    assert_eq!(mock.calls(), 2);
    assert!(
        elapsed >= Duration::from_millis(2 * 150 + 50),
        "elapsed {elapsed:?}"
    );
    assert!(elapsed < Duration::from_secs(5), "elapsed {elapsed:?}");
}

#[tokio::test]
async fn webhook_receives_committee_answers_intact() {
    let mock = MockWebhook::new(|_| MockReply::accepted("row-1"));
    let url = mock.spawn().await;
    let application = application();

    forwarder(&webhook_config(url))
        .forward(&application)
        .await
        .expect("delivered");

    let received = mock.received();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0]["selectedCommittees"],
        serde_json::json!(["marketing", "sustainability"])
    );
    assert_eq!(received[0]["generalResponses"]["whyJoinHBSA"], "The people.");

    let payload: WebhookPayload =
        serde_json::from_value(received[0].clone()).expect("payload parses back");
    assert_eq!(payload.committee_responses, application.committee_responses);
    assert_eq!(payload.selected_committees, application.selected_committees);
}

#[tokio::test]
async fn webhook_reported_bad_input_is_final() {
    let mock = MockWebhook::new(|_| {
        MockReply::Json(
            StatusCode::OK,
            serde_json::json!({ "success": false, "error": "Missing required fields" }),
        )
    });
    let url = mock.spawn().await;

    let err = forwarder(&webhook_config(url))
        .forward(&application())
        .await
        .expect_err("webhook refused");

    assert_eq!(mock.calls(), 1);
    assert_eq!(
        err.last_error(),
        Some(&AttemptError::Rejected("Missing required fields".to_string()))
    );
}

#[tokio::test]
async fn unreadable_reply_is_retried() {
    let mock = MockWebhook::new(|call| match call {
        1 => MockReply::Text(StatusCode::OK, "<html>redirecting</html>"),
        _ => MockReply::accepted("row-2"),
    });
    let url = mock.spawn().await;

    let receipt = forwarder(&webhook_config(url))
        .forward(&application())
        .await
        .expect("second attempt succeeds");

    assert_eq!(mock.calls(), 2);
    assert_eq!(receipt.submission_id.as_str(), "row-2");
}

#[tokio::test]
async fn invalid_application_never_calls_webhook() {
    let mock = MockWebhook::new(|_| MockReply::accepted("row-3"));
    let url = mock.spawn().await;
    let mut application = application();
    application.resume_url = "not a url".to_string();

    let err = forwarder(&webhook_config(url))
        .forward(&application)
        .await
        .expect_err("invalid resume");

    assert!(matches!(err, ForwardError::Invalid(_)));
    assert_eq!(mock.calls(), 0);
}
