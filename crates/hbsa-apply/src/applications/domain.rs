use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a forwarded application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    /// Fallback id used when the webhook does not return one: the first five
    /// characters of the lowercased, whitespace-free full name, then the
    /// timestamp in Unix milliseconds.
    pub fn derive(basic_info: &BasicInfo, at: DateTime<Utc>) -> Self {
        let name_hash: String = basic_info
            .first_name
            .chars()
            .chain(basic_info.last_name.chars())
            .filter(|ch| !ch.is_whitespace())
            .flat_map(char::to_lowercase)
            .take(5)
            .collect();
        Self(format!("{name_hash}-{}", at.timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity fields collected on the first wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub graduating_year: String,
    pub core_value: String,
}

impl BasicInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralResponses {
    #[serde(rename = "whyJoinHBSA")]
    pub why_join_hbsa: String,
}

/// Raw answer as collected from the form: one string, or a list for multi-select questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Text(String),
    Choices(Vec<String>),
}

impl ResponseValue {
    pub fn is_blank(&self) -> bool {
        match self {
            ResponseValue::Text(text) => text.trim().is_empty(),
            ResponseValue::Choices(choices) => choices.iter().all(|c| c.trim().is_empty()),
        }
    }
}

impl From<&str> for ResponseValue {
    fn from(value: &str) -> Self {
        ResponseValue::Text(value.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(value: String) -> Self {
        ResponseValue::Text(value)
    }
}

/// Question id -> answer for one committee.
pub type QuestionResponses = BTreeMap<String, ResponseValue>;

/// Committee id -> answers for that committee.
pub type CommitteeResponses = BTreeMap<String, QuestionResponses>;

/// Aggregate application as submitted by the client.
///
/// Every field defaults when absent so that incomplete payloads surface as
/// validation errors rather than decode failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub basic_info: BasicInfo,
    pub selected_committees: Vec<String>,
    pub committee_responses: CommitteeResponses,
    pub general_responses: GeneralResponses,
    pub resume_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Application {
    /// Stamp the submission time, freezing the application for delivery.
    pub fn freeze(mut self, at: DateTime<Utc>) -> Self {
        self.submitted_at = Some(at);
        self
    }

    pub fn responses_for(&self, committee_id: &str) -> Option<&QuestionResponses> {
        self.committee_responses.get(committee_id)
    }
}

/// Outcome of forwarding an application, shaped for API and CLI responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<SubmissionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn succeeded(submission_id: SubmissionId) -> Self {
        Self {
            success: true,
            submission_id: Some(submission_id),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            submission_id: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn derived_submission_id_uses_name_prefix_and_millis() {
        let info = BasicInfo {
            first_name: "Ana Maria".to_string(),
            last_name: "Lopez".to_string(),
            ..BasicInfo::default()
        };
        let at = Utc
            .with_ymd_and_hms(2025, 9, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        let id = SubmissionId::derive(&info, at);
        assert_eq!(id.as_str(), format!("anama-{}", at.timestamp_millis()));
    }

    #[test]
    fn short_names_are_not_padded() {
        let info = BasicInfo {
            first_name: "Al".to_string(),
            last_name: "B".to_string(),
            ..BasicInfo::default()
        };
        let at = Utc.timestamp_millis_opt(1_000).single().expect("valid");
        assert_eq!(SubmissionId::derive(&info, at).as_str(), "alb-1000");
    }

    #[test]
    fn missing_fields_decode_as_blank() {
        let application: Application =
            serde_json::from_str(r#"{"basicInfo":{"firstName":"Ana"}}"#).expect("decodes");
        assert_eq!(application.basic_info.first_name, "Ana");
        assert!(application.basic_info.email.is_empty());
        assert!(application.selected_committees.is_empty());
        assert!(application.submitted_at.is_none());
    }

    #[test]
    fn response_values_accept_text_and_lists() {
        let responses: QuestionResponses =
            serde_json::from_str(r#"{"a":"text","b":["one","two"]}"#).expect("decodes");
        assert_eq!(responses["a"], ResponseValue::Text("text".to_string()));
        assert_eq!(
            responses["b"],
            ResponseValue::Choices(vec!["one".to_string(), "two".to_string()])
        );
        assert!(ResponseValue::Choices(vec![" ".to_string()]).is_blank());
    }
}
