use serde::Serialize;

/// A sub-team a candidate can apply to, with its own question set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Committee {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub questions: Vec<Question>,
}

impl Committee {
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    pub fn required_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|question| question.required)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Input kind for a question. Limits and options live on the variants that use them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum QuestionKind {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "textarea")]
    LongText {
        #[serde(rename = "wordLimit", skip_serializing_if = "Option::is_none")]
        word_limit: Option<u32>,
    },
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "select")]
    Select { options: Vec<&'static str> },
    #[serde(rename = "multiselect")]
    MultiSelect { options: Vec<&'static str> },
}

impl QuestionKind {
    pub const fn label(&self) -> &'static str {
        match self {
            QuestionKind::Text => "text",
            QuestionKind::LongText { .. } => "textarea",
            QuestionKind::Url => "url",
            QuestionKind::Select { .. } => "select",
            QuestionKind::MultiSelect { .. } => "multiselect",
        }
    }

    pub fn word_limit(&self) -> Option<u32> {
        match self {
            QuestionKind::LongText { word_limit } => *word_limit,
            QuestionKind::Text
            | QuestionKind::Url
            | QuestionKind::Select { .. }
            | QuestionKind::MultiSelect { .. } => None,
        }
    }
}

pub(super) fn long_text(id: &'static str, label: &'static str, required: bool) -> Question {
    Question {
        id,
        label,
        required,
        kind: QuestionKind::LongText { word_limit: None },
    }
}

pub(super) fn limited_text(id: &'static str, label: &'static str, word_limit: u32) -> Question {
    Question {
        id,
        label,
        required: true,
        kind: QuestionKind::LongText {
            word_limit: Some(word_limit),
        },
    }
}

pub(super) fn url(id: &'static str, label: &'static str) -> Question {
    Question {
        id,
        label,
        required: true,
        kind: QuestionKind::Url,
    }
}
