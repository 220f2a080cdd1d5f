//! Confirmation hooks fired after a submission lands in the spreadsheet.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::applications::{Application, SubmissionId};

/// What an applicant is told once their row has been appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationMessage {
    pub recipient: String,
    pub name: String,
    pub committees: Vec<String>,
    pub submission_id: SubmissionId,
}

impl ConfirmationMessage {
    pub fn for_submission(application: &Application, submission_id: &SubmissionId) -> Self {
        Self {
            recipient: application.basic_info.email.trim().to_string(),
            name: application.basic_info.full_name(),
            committees: application.selected_committees.clone(),
            submission_id: submission_id.clone(),
        }
    }
}

/// Outbound confirmation hook (e-mail or chat adapters).
pub trait ConfirmationPublisher: Send + Sync {
    fn publish(&self, message: ConfirmationMessage) -> Result<(), NotificationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("confirmation transport unavailable: {0}")]
    Transport(String),
}

/// Writes confirmations to the log instead of mailing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingConfirmationPublisher;

impl ConfirmationPublisher for LoggingConfirmationPublisher {
    fn publish(&self, message: ConfirmationMessage) -> Result<(), NotificationError> {
        info!(
            submission_id = %message.submission_id,
            committees = ?message.committees,
            "confirmation queued for applicant"
        );
        Ok(())
    }
}

/// Drops every confirmation; used when confirmations are disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledConfirmations;

impl ConfirmationPublisher for DisabledConfirmations {
    fn publish(&self, _message: ConfirmationMessage) -> Result<(), NotificationError> {
        Ok(())
    }
}

/// Keeps confirmations in memory so callers can inspect them.
#[derive(Debug, Default, Clone)]
pub struct MemoryConfirmations {
    sent: Arc<Mutex<Vec<ConfirmationMessage>>>,
}

impl MemoryConfirmations {
    pub fn sent(&self) -> Vec<ConfirmationMessage> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

impl ConfirmationPublisher for MemoryConfirmations {
    fn publish(&self, message: ConfirmationMessage) -> Result<(), NotificationError> {
        self.sent
            .lock()
            .map_err(|_| NotificationError::Transport("confirmation log poisoned".to_string()))?
            .push(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applications::BasicInfo;

    #[test]
    fn message_carries_contact_and_committees() {
        let application = Application {
            basic_info: BasicInfo {
                first_name: "Sam".to_string(),
                last_name: "Ortiz".to_string(),
                email: " sam@berkeley.edu ".to_string(),
                ..BasicInfo::default()
            },
            selected_committees: vec!["tech".to_string(), "soac".to_string()],
            ..Application::default()
        };
        let id = SubmissionId("samor-1".to_string());

        let message = ConfirmationMessage::for_submission(&application, &id);

        assert_eq!(message.recipient, "sam@berkeley.edu");
        assert_eq!(message.name, "Sam Ortiz");
        assert_eq!(message.committees, vec!["tech", "soac"]);
        assert_eq!(message.submission_id, id);
    }

    #[test]
    fn memory_publisher_records_messages() {
        let publisher = MemoryConfirmations::default();
        let message = ConfirmationMessage {
            recipient: "a@b.co".to_string(),
            name: "A B".to_string(),
            committees: vec!["dei".to_string()],
            submission_id: SubmissionId("ab-1".to_string()),
        };

        publisher.publish(message.clone()).expect("recorded");
        LoggingConfirmationPublisher
            .publish(message.clone())
            .expect("logged");

        assert_eq!(publisher.sent(), vec![message]);
    }
}
