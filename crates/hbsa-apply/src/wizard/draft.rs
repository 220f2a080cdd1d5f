use chrono::{DateTime, Utc};

use super::steps::{
    BasicInfoStep, CommitteeQuestionsStep, CommitteeSelectionStep, MotivationStep, ResumeStep,
};
use super::{FieldError, StepError, WizardStep};
use crate::applications::{
    validate_application, Application, BasicInfo, CommitteeResponses, GeneralResponses,
};
use crate::catalog::CommitteeCatalog;

/// Validated fragments collected so far. Each `with_*` call checks its page and returns a
/// new draft, so a page with errors never lands in the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    basic_info: Option<BasicInfo>,
    general: Option<GeneralResponses>,
    committees: Option<Vec<String>>,
    responses: CommitteeResponses,
    resume_url: Option<String>,
}

impl ApplicationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_basic_info(self, step: &BasicInfoStep) -> Result<Self, StepError> {
        let basic_info = step.validate().map_err(invalid(WizardStep::BasicInfo))?;
        Ok(Self {
            basic_info: Some(basic_info),
            ..self
        })
    }

    pub fn with_general(self, step: &MotivationStep) -> Result<Self, StepError> {
        let general = step.validate().map_err(invalid(WizardStep::General))?;
        Ok(Self {
            general: Some(general),
            ..self
        })
    }

    /// Replace the selection. Answers for committees no longer selected are dropped.
    pub fn with_committees(
        self,
        step: &CommitteeSelectionStep,
        catalog: &CommitteeCatalog,
    ) -> Result<Self, StepError> {
        let committees = step
            .validate(catalog)
            .map_err(invalid(WizardStep::Committees))?;
        let mut responses = self.responses;
        responses.retain(|committee, _| committees.contains(committee));
        Ok(Self {
            committees: Some(committees),
            responses,
            ..self
        })
    }

    pub fn with_committee_responses(
        self,
        step: &CommitteeQuestionsStep,
        catalog: &CommitteeCatalog,
    ) -> Result<Self, StepError> {
        let committee_id = step.committee_id.as_str();
        let committee = catalog
            .get(committee_id)
            .filter(|_| self.selected().iter().any(|id| id == committee_id))
            .ok_or_else(|| StepError::NotSelected(committee_id.to_string()))?;
        let answers = step
            .validate(committee)
            .map_err(invalid(WizardStep::Questions(committee_id.to_string())))?;
        let mut responses = self.responses;
        responses.insert(committee_id.to_string(), answers);
        Ok(Self { responses, ..self })
    }

    pub fn with_resume_url(self, step: &ResumeStep) -> Result<Self, StepError> {
        let resume_url = step.validate().map_err(invalid(WizardStep::Submit))?;
        Ok(Self {
            resume_url: Some(resume_url),
            ..self
        })
    }

    pub fn basic_info(&self) -> Option<&BasicInfo> {
        self.basic_info.as_ref()
    }

    pub fn selected(&self) -> &[String] {
        self.committees.as_deref().unwrap_or_default()
    }

    /// First page that still needs input; `Submit` once everything else is in place.
    pub fn current_step(&self) -> WizardStep {
        if self.basic_info.is_none() {
            return WizardStep::BasicInfo;
        }
        if self.general.is_none() {
            return WizardStep::General;
        }
        if self.committees.is_none() {
            return WizardStep::Committees;
        }
        self.selected()
            .iter()
            .find(|id| !self.responses.contains_key(*id))
            .map(|id| WizardStep::Questions(id.clone()))
            .unwrap_or(WizardStep::Submit)
    }

    fn is_complete(&self, step: &WizardStep) -> bool {
        match step {
            WizardStep::BasicInfo => self.basic_info.is_some(),
            WizardStep::General => self.general.is_some(),
            WizardStep::Committees => self.committees.is_some(),
            WizardStep::Questions(id) => self.responses.contains_key(id),
            WizardStep::Submit => self.resume_url.is_some(),
        }
    }

    /// Page following `from`, provided `from` and every page before it are complete.
    pub fn advance(&self, from: &WizardStep) -> Result<WizardStep, StepError> {
        if let WizardStep::Questions(id) = from {
            if !self.selected().contains(id) {
                return Err(StepError::NotSelected(id.clone()));
            }
        }
        let current = self.current_step();
        if self.position(&current) < self.position(from) || !self.is_complete(from) {
            return Err(StepError::Incomplete(current));
        }

        let selected = self.selected();
        let next = match from {
            WizardStep::BasicInfo => WizardStep::General,
            WizardStep::General => WizardStep::Committees,
            WizardStep::Committees => selected
                .first()
                .map(|id| WizardStep::Questions(id.clone()))
                .unwrap_or(WizardStep::Submit),
            WizardStep::Questions(id) => selected
                .iter()
                .skip_while(|selected_id| *selected_id != id)
                .nth(1)
                .map(|next_id| WizardStep::Questions(next_id.clone()))
                .unwrap_or(WizardStep::Submit),
            WizardStep::Submit => return Err(StepError::NoNextStep(WizardStep::Submit)),
        };
        Ok(next)
    }

    /// Page before `from`; `Ok(None)` on the first page.
    pub fn back(&self, from: &WizardStep) -> Result<Option<WizardStep>, StepError> {
        let selected = self.selected();
        let previous = match from {
            WizardStep::BasicInfo => None,
            WizardStep::General => Some(WizardStep::BasicInfo),
            WizardStep::Committees => Some(WizardStep::General),
            WizardStep::Questions(id) => {
                let index = selected
                    .iter()
                    .position(|selected_id| selected_id == id)
                    .ok_or_else(|| StepError::NotSelected(id.clone()))?;
                Some(match index {
                    0 => WizardStep::Committees,
                    _ => WizardStep::Questions(selected[index - 1].clone()),
                })
            }
            WizardStep::Submit => Some(
                selected
                    .last()
                    .map(|id| WizardStep::Questions(id.clone()))
                    .unwrap_or(WizardStep::Committees),
            ),
        };
        Ok(previous)
    }

    /// 1-based page number; `None` for questions of an unselected committee.
    pub fn step_number(&self, step: &WizardStep) -> Option<usize> {
        match step {
            WizardStep::BasicInfo => Some(1),
            WizardStep::General => Some(2),
            WizardStep::Committees => Some(3),
            WizardStep::Questions(id) => self
                .selected()
                .iter()
                .position(|selected_id| selected_id == id)
                .map(|index| 4 + index),
            WizardStep::Submit => Some(self.total_steps()),
        }
    }

    pub fn total_steps(&self) -> usize {
        4 + self.selected().len()
    }

    fn position(&self, step: &WizardStep) -> usize {
        self.step_number(step).unwrap_or(usize::MAX)
    }

    /// Merge every fragment into a frozen application and check it as the forwarder would.
    pub fn finish(
        self,
        catalog: &CommitteeCatalog,
        now: DateTime<Utc>,
    ) -> Result<Application, StepError> {
        let current = self.current_step();
        if current != WizardStep::Submit || self.resume_url.is_none() {
            return Err(StepError::Incomplete(current));
        }

        let application = Application {
            basic_info: self.basic_info.unwrap_or_default(),
            selected_committees: self.committees.unwrap_or_default(),
            committee_responses: self.responses,
            general_responses: self.general.unwrap_or_default(),
            resume_url: self.resume_url.unwrap_or_default(),
            submitted_at: None,
        };
        validate_application(&application, catalog)?;
        Ok(application.freeze(now))
    }

    /// Walk every page for an already assembled application, stopping at the first page
    /// with errors.
    pub fn replay(application: &Application, catalog: &CommitteeCatalog) -> Result<Self, StepError> {
        let mut draft = Self::new()
            .with_basic_info(&BasicInfoStep::from(&application.basic_info))?
            .with_general(&MotivationStep {
                why_join_hbsa: application.general_responses.why_join_hbsa.clone(),
            })?
            .with_committees(
                &CommitteeSelectionStep {
                    selected_committees: application.selected_committees.clone(),
                },
                catalog,
            )?;

        for committee_id in draft.selected().to_vec() {
            let answers = application
                .responses_for(&committee_id)
                .cloned()
                .unwrap_or_default();
            let step = CommitteeQuestionsStep::new(committee_id, answers);
            draft = draft.with_committee_responses(&step, catalog)?;
        }

        draft.with_resume_url(&ResumeStep {
            resume_url: application.resume_url.clone(),
        })
    }
}

fn invalid(step: WizardStep) -> impl FnOnce(Vec<FieldError>) -> StepError {
    move |errors| StepError::Invalid { step, errors }
}
