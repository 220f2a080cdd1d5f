use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::applications::{
    Application, ApplicationService, BasicInfo, GeneralResponses, QuestionResponses, ResponseValue,
};
use crate::catalog::CommitteeCatalog;
use crate::config::WebhookConfig;
use crate::forwarder::{
    AttemptError, SubmissionForwarder, WebhookPayload, WebhookReply, WebhookTransport,
};
use crate::notifications::{
    ConfirmationMessage, ConfirmationPublisher, MemoryConfirmations, NotificationError,
};

pub(super) fn answers(pairs: &[(&str, &str)]) -> QuestionResponses {
    pairs
        .iter()
        .map(|(question, answer)| (question.to_string(), ResponseValue::from(*answer)))
        .collect()
}

pub(super) fn application() -> Application {
    let mut committee_responses = BTreeMap::new();
    committee_responses.insert(
        "marketing".to_string(),
        answers(&[
            ("workload", "Two shoots a week while taking 16 units."),
            ("initiative", "A short video series on transfer students."),
            ("portfolio", "https://portfolio.example.com/jamie"),
        ]),
    );
    committee_responses.insert(
        "sustainability".to_string(),
        answers(&[
            ("interest", "Campus composting."),
            ("embody", "I bike everywhere."),
            ("change", "Reusable cups at every HBSA event."),
        ]),
    );

    Application {
        basic_info: BasicInfo {
            first_name: "Jamie".to_string(),
            last_name: "Park".to_string(),
            email: "jamie.park@berkeley.edu".to_string(),
            graduating_year: "2027".to_string(),
            core_value: "Students always".to_string(),
        },
        selected_committees: vec!["marketing".to_string(), "sustainability".to_string()],
        committee_responses,
        general_responses: GeneralResponses {
            why_join_hbsa: "To build community at Haas.".to_string(),
        },
        resume_url: "https://drive.google.com/file/d/jamie/view".to_string(),
        submitted_at: None,
    }
}

pub(super) fn webhook_config() -> WebhookConfig {
    WebhookConfig {
        url: Some("https://script.example.com/exec".to_string()),
        timeout: Duration::from_millis(200),
        max_attempts: 2,
        base_delay: Duration::from_millis(5),
        max_delay: Duration::from_millis(20),
        jitter: false,
    }
}

/// Transport that answers every attempt the same way.
pub(super) struct FixedTransport {
    reply: Result<WebhookReply, AttemptError>,
    calls: AtomicUsize,
}

impl FixedTransport {
    pub(super) fn new(reply: Result<WebhookReply, AttemptError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WebhookTransport for FixedTransport {
    async fn deliver(&self, _payload: &WebhookPayload) -> Result<WebhookReply, AttemptError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

pub(super) fn build_service_with<P>(
    transport: Arc<FixedTransport>,
    confirmations: Arc<P>,
) -> Arc<ApplicationService<P, FixedTransport>>
where
    P: ConfirmationPublisher + 'static,
{
    let forwarder = SubmissionForwarder::new(
        transport,
        Arc::new(CommitteeCatalog::standard()),
        &webhook_config(),
    );
    Arc::new(ApplicationService::new(Arc::new(forwarder), confirmations))
}

pub(super) fn build_service(
    reply: Result<WebhookReply, AttemptError>,
) -> (
    Arc<ApplicationService<MemoryConfirmations, FixedTransport>>,
    Arc<FixedTransport>,
    Arc<MemoryConfirmations>,
) {
    let transport = FixedTransport::new(reply);
    let confirmations = Arc::new(MemoryConfirmations::default());
    let service = build_service_with(transport.clone(), confirmations.clone());
    (service, transport, confirmations)
}

#[derive(Default)]
pub(super) struct BrokenConfirmations;

impl ConfirmationPublisher for BrokenConfirmations {
    fn publish(&self, _message: ConfirmationMessage) -> Result<(), NotificationError> {
        Err(NotificationError::Transport("smtp down".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("json body")
}
