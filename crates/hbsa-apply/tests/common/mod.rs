#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use hbsa_apply::applications::{
    Application, BasicInfo, GeneralResponses, QuestionResponses, ResponseValue,
};
use hbsa_apply::config::WebhookConfig;

/// What the mock webhook does on a given (1-based) call.
pub enum MockReply {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
    Stall(Duration),
}

impl MockReply {
    pub fn accepted(submission_id: &str) -> Self {
        MockReply::Json(
            StatusCode::OK,
            json!({ "success": true, "submissionId": submission_id }),
        )
    }

    pub fn status(status: StatusCode) -> Self {
        MockReply::Json(status, json!({ "success": false, "error": "mock failure" }))
    }
}

type Behavior = dyn Fn(usize) -> MockReply + Send + Sync;

#[derive(Clone)]
pub struct MockWebhook {
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Value>>>,
    behavior: Arc<Behavior>,
}

impl MockWebhook {
    pub fn new(behavior: impl Fn(usize) -> MockReply + Send + Sync + 'static) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
            behavior: Arc::new(behavior),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().expect("received mutex poisoned").clone()
    }

    /// Serve the mock on an ephemeral port and return its URL.
    pub async fn spawn(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock webhook");
        let addr = listener.local_addr().expect("mock webhook address");
        let app = Router::new()
            .route("/exec", post(handle))
            .with_state(self.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock webhook server");
        });
        format!("http://{addr}/exec")
    }
}

async fn handle(State(mock): State<MockWebhook>, Json(body): Json<Value>) -> Response {
    let call = mock.calls.fetch_add(1, Ordering::SeqCst) + 1;
    mock.received
        .lock()
        .expect("received mutex poisoned")
        .push(body);

    match (mock.behavior)(call) {
        MockReply::Json(status, value) => (status, Json(value)).into_response(),
        MockReply::Text(status, text) => (status, text).into_response(),
        MockReply::Stall(delay) => {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, Json(json!({ "success": true }))).into_response()
        }
    }
}

pub fn webhook_config(url: String) -> WebhookConfig {
    WebhookConfig {
        url: Some(url),
        timeout: Duration::from_millis(500),
        max_attempts: 3,
        base_delay: Duration::from_millis(20),
        max_delay: Duration::from_millis(100),
        jitter: false,
    }
}

pub fn answers(pairs: &[(&str, &str)]) -> QuestionResponses {
    pairs
        .iter()
        .map(|(question, answer)| (question.to_string(), ResponseValue::from(*answer)))
        .collect()
}

pub fn marketing_answers() -> QuestionResponses {
    answers(&[
        ("workload", "Calendar blocking and a weekly review."),
        ("initiative", "Alumni spotlight reels."),
        ("portfolio", "https://portfolio.example.com/ari"),
    ])
}

pub fn sustainability_answers() -> QuestionResponses {
    answers(&[
        ("interest", "Zero waste events."),
        ("embody", "Thrifting and composting."),
        ("change", "Water refill stations in every building."),
    ])
}

pub fn basic_info() -> BasicInfo {
    BasicInfo {
        first_name: "Ari".to_string(),
        last_name: "Lopez".to_string(),
        email: "ari.lopez@berkeley.edu".to_string(),
        graduating_year: "2026".to_string(),
        core_value: "Confidence without attitude".to_string(),
    }
}

pub fn application() -> Application {
    let mut committee_responses = BTreeMap::new();
    committee_responses.insert("marketing".to_string(), marketing_answers());
    committee_responses.insert("sustainability".to_string(), sustainability_answers());

    Application {
        basic_info: basic_info(),
        selected_committees: vec!["marketing".to_string(), "sustainability".to_string()],
        committee_responses,
        general_responses: GeneralResponses {
            why_join_hbsa: "The people.".to_string(),
        },
        resume_url: "https://drive.google.com/file/d/ari/view".to_string(),
        submitted_at: None,
    }
}
