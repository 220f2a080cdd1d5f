use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::domain::Application;
use crate::catalog::CommitteeCatalog;
use crate::forwarder::{
    ForwardError, ForwardReceipt, HttpWebhookTransport, SubmissionForwarder, WebhookTransport,
};
use crate::notifications::{ConfirmationMessage, ConfirmationPublisher};

/// Service freezing applications, forwarding them, and firing confirmations.
pub struct ApplicationService<P, T = HttpWebhookTransport> {
    forwarder: Arc<SubmissionForwarder<T>>,
    confirmations: Arc<P>,
}

impl<P, T> ApplicationService<P, T>
where
    P: ConfirmationPublisher + 'static,
    T: WebhookTransport + 'static,
{
    pub fn new(forwarder: Arc<SubmissionForwarder<T>>, confirmations: Arc<P>) -> Self {
        Self {
            forwarder,
            confirmations,
        }
    }

    pub fn catalog(&self) -> &CommitteeCatalog {
        self.forwarder.catalog()
    }

    pub fn forwarder(&self) -> &SubmissionForwarder<T> {
        &self.forwarder
    }

    /// Stamp the application with the current time and submit it.
    pub async fn submit(&self, application: Application) -> Result<ForwardReceipt, ForwardError> {
        self.submit_at(application, Utc::now()).await
    }

    pub async fn submit_at(
        &self,
        application: Application,
        now: DateTime<Utc>,
    ) -> Result<ForwardReceipt, ForwardError> {
        let application = application.freeze(now);
        let receipt = match self.forwarder.forward(&application).await {
            Ok(receipt) => receipt,
            Err(ForwardError::Invalid(err)) => {
                info!(error = %err, "application rejected by validation");
                return Err(ForwardError::Invalid(err));
            }
            Err(err) => {
                warn!(attempts = err.attempts(), error = %err, "application forwarding failed");
                return Err(err);
            }
        };

        let message = ConfirmationMessage::for_submission(&application, &receipt.submission_id);
        if let Err(err) = self.confirmations.publish(message) {
            warn!(
                submission_id = %receipt.submission_id,
                error = %err,
                "confirmation could not be sent"
            );
        }

        Ok(receipt)
    }
}
