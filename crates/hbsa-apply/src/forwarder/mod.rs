//! Delivery of validated applications to the spreadsheet webhook.
//!
//! Each attempt is one POST bounded by a timeout; transient failures are retried with
//! exponential backoff. A retry after a lost response can append a duplicate row, since
//! the webhook offers no idempotency key. That gap is accepted and left visible.

pub mod payload;
pub mod retry;
pub mod transport;


use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use crate::applications::{
    validate_application, Application, SubmissionId, SubmissionResult, ValidationError,
};
use crate::catalog::CommitteeCatalog;
use crate::config::WebhookConfig;

pub use payload::{WebhookPayload, WebhookReply};
pub use retry::RetryPolicy;
pub use transport::{AttemptError, HttpWebhookTransport, TransportSetupError, WebhookTransport};

/// Successful delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardReceipt {
    pub submission_id: SubmissionId,
    pub attempts: u32,
    /// `false` when the id was derived locally because the webhook returned none.
    pub assigned_by_webhook: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForwardError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("spreadsheet webhook URL is not configured")]
    NotConfigured,
    #[error("spreadsheet webhook rejected the submission: {last_error}")]
    Rejected { attempts: u32, last_error: AttemptError },
    #[error("submission failed after {attempts} attempts: {last_error}")]
    Exhausted { attempts: u32, last_error: AttemptError },
}

impl ForwardError {
    /// Network attempts made before giving up.
    pub fn attempts(&self) -> u32 {
        match self {
            ForwardError::Invalid(_) | ForwardError::NotConfigured => 0,
            ForwardError::Rejected { attempts, .. } | ForwardError::Exhausted { attempts, .. } => {
                *attempts
            }
        }
    }

    pub fn last_error(&self) -> Option<&AttemptError> {
        match self {
            ForwardError::Rejected { last_error, .. }
            | ForwardError::Exhausted { last_error, .. } => Some(last_error),
            ForwardError::Invalid(_) | ForwardError::NotConfigured => None,
        }
    }
}

impl From<Result<ForwardReceipt, ForwardError>> for SubmissionResult {
    fn from(outcome: Result<ForwardReceipt, ForwardError>) -> Self {
        match outcome {
            Ok(receipt) => SubmissionResult::succeeded(receipt.submission_id),
            Err(ForwardError::Invalid(err)) => SubmissionResult::failed(err.to_string()),
            Err(ForwardError::NotConfigured) => {
                SubmissionResult::failed(ForwardError::NotConfigured.to_string())
            }
            Err(ForwardError::Rejected { last_error, .. })
            | Err(ForwardError::Exhausted { last_error, .. }) => {
                SubmissionResult::failed(last_error.to_string())
            }
        }
    }
}

/// Validates applications and delivers them to the webhook with bounded retries.
pub struct SubmissionForwarder<T = HttpWebhookTransport> {
    transport: Option<Arc<T>>,
    catalog: Arc<CommitteeCatalog>,
    policy: RetryPolicy,
    timeout: Duration,
}

impl SubmissionForwarder<HttpWebhookTransport> {
    /// Build an HTTP forwarder; a missing URL yields a forwarder that fails every submission
    /// with [`ForwardError::NotConfigured`] instead of refusing to start.
    pub fn from_config(
        config: &WebhookConfig,
        catalog: Arc<CommitteeCatalog>,
    ) -> Result<Self, TransportSetupError> {
        let transport = config
            .url
            .as_deref()
            .map(HttpWebhookTransport::new)
            .transpose()?
            .map(Arc::new);
        Ok(Self::assemble(transport, catalog, config))
    }
}

impl<T> SubmissionForwarder<T>
where
    T: WebhookTransport + 'static,
{
    pub fn new(transport: Arc<T>, catalog: Arc<CommitteeCatalog>, config: &WebhookConfig) -> Self {
        Self::assemble(Some(transport), catalog, config)
    }

    fn assemble(
        transport: Option<Arc<T>>,
        catalog: Arc<CommitteeCatalog>,
        config: &WebhookConfig,
    ) -> Self {
        Self {
            transport,
            catalog,
            policy: RetryPolicy::from_config(config),
            timeout: config.timeout,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    pub fn catalog(&self) -> &CommitteeCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Validate then deliver. Nothing is sent when validation fails.
    pub async fn forward(&self, application: &Application) -> Result<ForwardReceipt, ForwardError> {
        validate_application(application, &self.catalog)?;
        let transport = self.transport.as_ref().ok_or(ForwardError::NotConfigured)?;

        let payload = WebhookPayload::from(application);
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.attempt(transport.as_ref(), &payload).await {
                Ok(reply) => {
                    let (submission_id, assigned_by_webhook) = match reply.assigned_id() {
                        Some(id) => (SubmissionId(id.to_string()), true),
                        None => (
                            SubmissionId::derive(
                                &application.basic_info,
                                application.submitted_at.unwrap_or_else(Utc::now),
                            ),
                            false,
                        ),
                    };
                    info!(
                        attempt,
                        submission_id = %submission_id,
                        committees = ?application.selected_committees,
                        "application delivered to spreadsheet webhook"
                    );
                    return Ok(ForwardReceipt {
                        submission_id,
                        attempts: attempt,
                        assigned_by_webhook,
                    });
                }
                Err(err) if !err.is_transient() => {
                    warn!(attempt, error = %err, "spreadsheet webhook rejected submission");
                    return Err(ForwardError::Rejected {
                        attempts: attempt,
                        last_error: err,
                    });
                }
                Err(err) if !self.policy.allows_another(attempt) => {
                    warn!(attempt, error = %err, "webhook delivery attempts exhausted");
                    return Err(ForwardError::Exhausted {
                        attempts: attempt,
                        last_error: err,
                    });
                }
                Err(err) => {
                    let delay = self.policy.backoff(attempt);
                    warn!(
                        attempt,
                        max_attempts = self.policy.max_attempts,
                        error = %err,
                        retry_in_ms = delay.as_millis() as u64,
                        "webhook delivery attempt failed"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    async fn attempt(
        &self,
        transport: &T,
        payload: &WebhookPayload,
    ) -> Result<WebhookReply, AttemptError> {
        let reply = tokio::time::timeout(self.timeout, transport.deliver(payload))
            .await
            .map_err(|_| AttemptError::Timeout(self.timeout))??;

        if reply.success {
            Ok(reply)
        } else {
            Err(AttemptError::Rejected(reply.failure_reason()))
        }
    }
}
