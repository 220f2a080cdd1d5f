use serde::{Deserialize, Serialize};

use super::FieldError;
use crate::applications::{
    check_answer, check_committee_selection, is_valid_email, parse_resume_url, BasicInfo,
    GeneralResponses, QuestionResponses, RequiredField, ValidationError,
};
use crate::catalog::{Committee, CommitteeCatalog};

const FIELD_REQUIRED: &str = "This field is required";

fn missing(field: RequiredField) -> FieldError {
    FieldError::new(field.key(), ValidationError::MissingField(field).to_string())
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Step 1: who the applicant is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInfoStep {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub graduating_year: String,
    pub core_value: String,
}

impl BasicInfoStep {
    /// Every field is required here, including the core value response.
    pub fn validate(&self) -> Result<BasicInfo, Vec<FieldError>> {
        let mut errors = Vec::new();
        if blank(&self.first_name) {
            errors.push(missing(RequiredField::FirstName));
        }
        if blank(&self.last_name) {
            errors.push(missing(RequiredField::LastName));
        }
        if blank(&self.email) {
            errors.push(missing(RequiredField::Email));
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError::new(
                RequiredField::Email.key(),
                ValidationError::InvalidEmail.to_string(),
            ));
        }
        if blank(&self.graduating_year) {
            errors.push(missing(RequiredField::GraduatingYear));
        }
        if blank(&self.core_value) {
            errors.push(missing(RequiredField::CoreValue));
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(BasicInfo {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            graduating_year: self.graduating_year.trim().to_string(),
            core_value: self.core_value.trim().to_string(),
        })
    }
}

impl From<&BasicInfo> for BasicInfoStep {
    fn from(info: &BasicInfo) -> Self {
        Self {
            first_name: info.first_name.clone(),
            last_name: info.last_name.clone(),
            email: info.email.clone(),
            graduating_year: info.graduating_year.clone(),
            core_value: info.core_value.clone(),
        }
    }
}

/// Step 2: the general "why HBSA" question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotivationStep {
    #[serde(rename = "whyJoinHBSA")]
    pub why_join_hbsa: String,
}

impl MotivationStep {
    pub fn validate(&self) -> Result<GeneralResponses, Vec<FieldError>> {
        if blank(&self.why_join_hbsa) {
            return Err(vec![FieldError::new(
                RequiredField::Motivation.key(),
                FIELD_REQUIRED,
            )]);
        }
        Ok(GeneralResponses {
            why_join_hbsa: self.why_join_hbsa.trim().to_string(),
        })
    }
}

/// Step 3: which committees to apply to, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommitteeSelectionStep {
    pub selected_committees: Vec<String>,
}

impl CommitteeSelectionStep {
    /// Toggle a committee, refusing a third pick.
    pub fn toggle(mut self, committee_id: &str) -> Result<Self, FieldError> {
        if let Some(position) = self
            .selected_committees
            .iter()
            .position(|id| id == committee_id)
        {
            self.selected_committees.remove(position);
            return Ok(self);
        }
        if self.selected_committees.len() >= crate::catalog::MAX_SELECTED_COMMITTEES {
            return Err(FieldError::new(
                "selectedCommittees",
                ValidationError::TooManyCommittees {
                    max: crate::catalog::MAX_SELECTED_COMMITTEES,
                    found: self.selected_committees.len() + 1,
                }
                .to_string(),
            ));
        }
        self.selected_committees.push(committee_id.to_string());
        Ok(self)
    }

    pub fn validate(&self, catalog: &CommitteeCatalog) -> Result<Vec<String>, Vec<FieldError>> {
        check_committee_selection(&self.selected_committees, catalog)
            .map(|committees| {
                committees
                    .into_iter()
                    .map(|committee| committee.id.to_string())
                    .collect()
            })
            .map_err(|err| vec![FieldError::new("selectedCommittees", err.to_string())])
    }
}

/// One questions page per selected committee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommitteeQuestionsStep {
    pub committee_id: String,
    pub responses: QuestionResponses,
}

impl CommitteeQuestionsStep {
    pub fn new(committee_id: impl Into<String>, responses: QuestionResponses) -> Self {
        Self {
            committee_id: committee_id.into(),
            responses,
        }
    }

    /// Errors are keyed by question id. Answers to questions the committee does not ask
    /// are dropped.
    pub fn validate(&self, committee: &Committee) -> Result<QuestionResponses, Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut accepted = QuestionResponses::new();

        for question in &committee.questions {
            match self.responses.get(question.id) {
                Some(value) if !value.is_blank() => match check_answer(question, value) {
                    Ok(_) => {
                        accepted.insert(question.id.to_string(), value.clone());
                    }
                    Err(problem) => errors.push(FieldError::new(question.id, problem.to_string())),
                },
                _ if question.required => errors.push(FieldError::new(question.id, FIELD_REQUIRED)),
                _ => {}
            }
        }

        if errors.is_empty() {
            Ok(accepted)
        } else {
            Err(errors)
        }
    }
}

/// Final page: the resume link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeStep {
    pub resume_url: String,
}

impl ResumeStep {
    pub fn validate(&self) -> Result<String, Vec<FieldError>> {
        if blank(&self.resume_url) {
            return Err(vec![missing(RequiredField::Resume)]);
        }
        parse_resume_url(&self.resume_url)
            .map(|_| self.resume_url.trim().to_string())
            .map_err(|err| vec![FieldError::new(RequiredField::Resume.key(), err.to_string())])
    }
}
