//! Static committee catalog. Content changes only by redeploying new catalog data.

mod committees;
pub mod domain;

pub use domain::{Committee, Question, QuestionKind};

use serde::Serialize;

/// Release tag for the bundled committee data.
pub const CATALOG_VERSION: &str = "2025-fall";

/// Upper bound on committees a single applicant may select.
pub const MAX_SELECTED_COMMITTEES: usize = 2;

#[derive(Debug, Clone, Serialize)]
pub struct CommitteeCatalog {
    version: &'static str,
    committees: Vec<Committee>,
}

impl CommitteeCatalog {
    pub fn standard() -> Self {
        Self::new(CATALOG_VERSION, committees::standard_committees())
    }

    pub fn new(version: &'static str, committees: Vec<Committee>) -> Self {
        Self {
            version,
            committees,
        }
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn committees(&self) -> &[Committee] {
        &self.committees
    }

    pub fn get(&self, committee_id: &str) -> Option<&Committee> {
        self.committees
            .iter()
            .find(|committee| committee.id == committee_id)
    }

    pub fn contains(&self, committee_id: &str) -> bool {
        self.get(committee_id).is_some()
    }
}
