use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::applications::{Application, BasicInfo, CommitteeResponses, GeneralResponses};

/// Body POSTed to the spreadsheet webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    pub basic_info: BasicInfo,
    pub selected_committees: Vec<String>,
    pub committee_responses: CommitteeResponses,
    pub general_responses: GeneralResponses,
    pub resume_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl From<&Application> for WebhookPayload {
    fn from(application: &Application) -> Self {
        let info = &application.basic_info;
        Self {
            basic_info: BasicInfo {
                first_name: info.first_name.trim().to_string(),
                last_name: info.last_name.trim().to_string(),
                email: info.email.trim().to_string(),
                graduating_year: info.graduating_year.trim().to_string(),
                core_value: info.core_value.trim().to_string(),
            },
            selected_committees: application.selected_committees.clone(),
            committee_responses: application.committee_responses.clone(),
            general_responses: GeneralResponses {
                why_join_hbsa: application.general_responses.why_join_hbsa.trim().to_string(),
            },
            resume_url: application.resume_url.trim().to_string(),
            submitted_at: application.submitted_at,
        }
    }
}

/// JSON reply expected from the webhook. Missing fields read as a failed, anonymous reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WebhookReply {
    pub fn accepted(submission_id: Option<&str>) -> Self {
        Self {
            success: true,
            submission_id: submission_id.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn refused(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Most specific failure text the webhook offered.
    pub fn failure_reason(&self) -> String {
        let present = |reason: &&str| !reason.trim().is_empty();
        self.error
            .as_deref()
            .filter(present)
            .or_else(|| self.message.as_deref().filter(present))
            .unwrap_or("Unknown error from spreadsheet webhook")
            .to_string()
    }

    /// Webhook-assigned id, ignoring blanks.
    pub fn assigned_id(&self) -> Option<&str> {
        self.submission_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
