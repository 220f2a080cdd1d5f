//! Multi-step application wizard.
//!
//! Each page validates into an owned fragment; [`ApplicationDraft`] collects fragments and
//! refuses to move past a page whose fragment is missing. The draft is only turned into an
//! [`Application`](crate::applications::Application) by [`ApplicationDraft::finish`].

mod draft;
mod steps;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::applications::ValidationError;

pub use draft::ApplicationDraft;
pub use steps::{
    BasicInfoStep, CommitteeQuestionsStep, CommitteeSelectionStep, MotivationStep, ResumeStep,
};

/// Pages of the wizard, in order. Questions pages follow the selection order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "step", content = "committee", rename_all = "camelCase")]
pub enum WizardStep {
    BasicInfo,
    General,
    Committees,
    Questions(String),
    Submit,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStep::BasicInfo => f.write_str("basic info"),
            WizardStep::General => f.write_str("general questions"),
            WizardStep::Committees => f.write_str("committee selection"),
            WizardStep::Questions(committee) => write!(f, "{committee} questions"),
            WizardStep::Submit => f.write_str("submit"),
        }
    }
}

/// A problem with one input on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("complete the {0} step first")]
    Incomplete(WizardStep),
    #[error("committee {0} is not selected")]
    NotSelected(String),
    #[error("there is no step after {0}")]
    NoNextStep(WizardStep),
    #[error("{step} step has errors: {}", join(.errors))]
    Invalid {
        step: WizardStep,
        errors: Vec<FieldError>,
    },
    #[error(transparent)]
    Rejected(#[from] ValidationError),
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
