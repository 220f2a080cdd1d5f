use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use super::domain::{Application, QuestionResponses, ResponseValue};
use crate::catalog::{
    Committee, CommitteeCatalog, Question, QuestionKind, MAX_SELECTED_COMMITTEES,
};

/// Fields whose absence rejects an application outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    FirstName,
    LastName,
    Email,
    GraduatingYear,
    CoreValue,
    Motivation,
    Resume,
}

impl RequiredField {
    pub const fn label(self) -> &'static str {
        match self {
            RequiredField::FirstName => "First name",
            RequiredField::LastName => "Last name",
            RequiredField::Email => "Email",
            RequiredField::GraduatingYear => "Graduating year",
            RequiredField::CoreValue => "Core value response",
            RequiredField::Motivation => "Why join HBSA response",
            RequiredField::Resume => "Resume link",
        }
    }

    /// Client-side field key, matching the JSON property names.
    pub const fn key(self) -> &'static str {
        match self {
            RequiredField::FirstName => "firstName",
            RequiredField::LastName => "lastName",
            RequiredField::Email => "email",
            RequiredField::GraduatingYear => "graduatingYear",
            RequiredField::CoreValue => "coreValue",
            RequiredField::Motivation => "whyJoinHBSA",
            RequiredField::Resume => "resumeUrl",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a single answer failed its question's checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerProblem {
    #[error("must be a valid link")]
    NotAUrl,
    #[error("'{0}' is not one of the available options")]
    UnknownOption(String),
    #[error("exceeds the {limit} word limit ({found} words)")]
    WordLimitExceeded { limit: u32, found: usize },
    #[error("expects a single answer")]
    ExpectedSingle,
}

/// Rejections raised before an application is sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(RequiredField),
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("At least one committee must be selected")]
    NoCommitteesSelected,
    #[error("You can only select up to {max} committees (selected {found})")]
    TooManyCommittees { max: usize, found: usize },
    #[error("Committee {committee} was selected more than once")]
    DuplicateCommittee { committee: String },
    #[error("Unknown committee: {committee}")]
    UnknownCommittee { committee: String },
    #[error("Resume link must be a valid https URL")]
    InvalidResumeUrl,
    #[error("Responses required for committee: {committee}")]
    MissingCommitteeResponses { committee: String },
    #[error("Committee {committee} requires an answer to '{question}'")]
    MissingAnswer { committee: String, question: String },
    #[error("Committee {committee} answer to '{question}' {problem}")]
    InvalidAnswer {
        committee: String,
        question: String,
        problem: AnswerProblem,
    },
}

impl ValidationError {
    /// The committee the error refers to, when it is committee specific.
    pub fn committee(&self) -> Option<&str> {
        match self {
            ValidationError::DuplicateCommittee { committee }
            | ValidationError::UnknownCommittee { committee }
            | ValidationError::MissingCommitteeResponses { committee }
            | ValidationError::MissingAnswer { committee, .. }
            | ValidationError::InvalidAnswer { committee, .. } => Some(committee.as_str()),
            ValidationError::MissingField(_)
            | ValidationError::InvalidEmail
            | ValidationError::NoCommitteesSelected
            | ValidationError::TooManyCommittees { .. }
            | ValidationError::InvalidResumeUrl => None,
        }
    }
}

/// An answer checked against its question, typed by the question's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<'a> {
    Text(&'a str),
    LongText { text: &'a str, words: usize },
    Url(Url),
    Choice(&'a str),
    Choices(Vec<&'a str>),
}

/// Check a full application against the catalog, returning the first problem found.
///
/// The core value response is optional here; the wizard's basic info step requires it.
pub fn validate_application(
    application: &Application,
    catalog: &CommitteeCatalog,
) -> Result<(), ValidationError> {
    let info = &application.basic_info;
    require(&info.first_name, RequiredField::FirstName)?;
    require(&info.last_name, RequiredField::LastName)?;
    require(&info.email, RequiredField::Email)?;
    require(&info.graduating_year, RequiredField::GraduatingYear)?;
    if !is_valid_email(&info.email) {
        return Err(ValidationError::InvalidEmail);
    }

    let committees = check_committee_selection(&application.selected_committees, catalog)?;

    require(&application.resume_url, RequiredField::Resume)?;
    parse_resume_url(&application.resume_url)?;

    require(
        &application.general_responses.why_join_hbsa,
        RequiredField::Motivation,
    )?;

    for committee in committees {
        check_committee_responses(committee, application.responses_for(committee.id))?;
    }

    Ok(())
}

pub(crate) fn require(value: &str, field: RequiredField) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"))
}

pub fn is_valid_email(raw: &str) -> bool {
    email_pattern().is_match(raw.trim())
}

/// Resume links must be absolute `https` URLs with a host.
pub fn parse_resume_url(raw: &str) -> Result<Url, ValidationError> {
    parse_link(raw)
        .filter(|url| url.scheme() == "https")
        .ok_or(ValidationError::InvalidResumeUrl)
}

fn parse_link(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    let has_host = url.host_str().is_some_and(|host| !host.is_empty());
    let web_scheme = matches!(url.scheme(), "http" | "https");
    (has_host && web_scheme).then_some(url)
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Resolve the selected ids to catalog entries, enforcing count, uniqueness and membership.
pub fn check_committee_selection<'c>(
    selected: &[String],
    catalog: &'c CommitteeCatalog,
) -> Result<Vec<&'c Committee>, ValidationError> {
    if selected.is_empty() {
        return Err(ValidationError::NoCommitteesSelected);
    }
    if selected.len() > MAX_SELECTED_COMMITTEES {
        return Err(ValidationError::TooManyCommittees {
            max: MAX_SELECTED_COMMITTEES,
            found: selected.len(),
        });
    }

    let mut seen = HashSet::new();
    let mut committees = Vec::with_capacity(selected.len());
    for id in selected {
        if !seen.insert(id.as_str()) {
            return Err(ValidationError::DuplicateCommittee {
                committee: id.clone(),
            });
        }
        let committee = catalog
            .get(id)
            .ok_or_else(|| ValidationError::UnknownCommittee {
                committee: id.clone(),
            })?;
        committees.push(committee);
    }
    Ok(committees)
}

/// Check one committee's answers: required questions answered, answered questions well formed.
///
/// Answers to question ids the committee does not define are passed through unchecked.
pub fn check_committee_responses(
    committee: &Committee,
    responses: Option<&QuestionResponses>,
) -> Result<(), ValidationError> {
    let responses = match responses {
        Some(responses) if !responses.is_empty() => responses,
        _ => {
            return Err(ValidationError::MissingCommitteeResponses {
                committee: committee.id.to_string(),
            })
        }
    };

    for question in &committee.questions {
        let answer = responses.get(question.id).filter(|value| !value.is_blank());
        match answer {
            None if question.required => {
                return Err(ValidationError::MissingAnswer {
                    committee: committee.id.to_string(),
                    question: question.id.to_string(),
                })
            }
            None => {}
            Some(value) => {
                check_answer(question, value).map_err(|problem| {
                    ValidationError::InvalidAnswer {
                        committee: committee.id.to_string(),
                        question: question.id.to_string(),
                        problem,
                    }
                })?;
            }
        }
    }
    Ok(())
}

/// Check a non-blank answer against its question's kind.
pub fn check_answer<'a>(
    question: &Question,
    value: &'a ResponseValue,
) -> Result<Answer<'a>, AnswerProblem> {
    match (&question.kind, value) {
        (QuestionKind::Text, ResponseValue::Text(text)) => Ok(Answer::Text(text)),
        (QuestionKind::LongText { word_limit }, ResponseValue::Text(text)) => {
            let words = count_words(text);
            match word_limit {
                Some(limit) if words > *limit as usize => Err(AnswerProblem::WordLimitExceeded {
                    limit: *limit,
                    found: words,
                }),
                _ => Ok(Answer::LongText { text, words }),
            }
        }
        (QuestionKind::Url, ResponseValue::Text(text)) => {
            parse_link(text).map(Answer::Url).ok_or(AnswerProblem::NotAUrl)
        }
        (QuestionKind::Select { options }, ResponseValue::Text(choice)) => {
            match options.iter().find(|option| **option == choice.trim()) {
                Some(_) => Ok(Answer::Choice(choice.trim())),
                None => Err(AnswerProblem::UnknownOption(choice.clone())),
            }
        }
        (QuestionKind::MultiSelect { options }, ResponseValue::Text(choice)) => {
            check_choices(options, std::slice::from_ref(choice))
        }
        (QuestionKind::MultiSelect { options }, ResponseValue::Choices(choices)) => {
            check_choices(options, choices)
        }
        (
            QuestionKind::Text
            | QuestionKind::LongText { .. }
            | QuestionKind::Url
            | QuestionKind::Select { .. },
            ResponseValue::Choices(_),
        ) => Err(AnswerProblem::ExpectedSingle),
    }
}

fn check_choices<'a>(
    options: &[&'static str],
    choices: &'a [String],
) -> Result<Answer<'a>, AnswerProblem> {
    let mut picked = Vec::with_capacity(choices.len());
    for choice in choices {
        let choice = choice.trim();
        if choice.is_empty() {
            continue;
        }
        if !options.iter().any(|option| *option == choice) {
            return Err(AnswerProblem::UnknownOption(choice.to_string()));
        }
        picked.push(choice);
    }
    Ok(Answer::Choices(picked))
}
