//! Application intake: the submitted record, its validation rules, and the HTTP surface
//! that freezes and forwards it to the spreadsheet webhook.

pub mod domain;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, BasicInfo, CommitteeResponses, GeneralResponses, QuestionResponses,
    ResponseValue, SubmissionId, SubmissionResult,
};
pub use router::application_router;
pub use service::ApplicationService;
pub use validation::{
    check_answer, check_committee_responses, check_committee_selection, count_words,
    is_valid_email, parse_resume_url, validate_application, Answer, AnswerProblem,
    RequiredField, ValidationError,
};
