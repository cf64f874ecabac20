//! Step model definition.

use serde::{Deserialize, Serialize};

use super::{Keyword, StepKind};

/// A single Gherkin step of a test plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Gherkin keyword introducing the step
    pub keyword: Keyword,

    /// First-person step text without the keyword
    pub text: String,

    /// Role of the step within its scenario
    #[serde(rename = "type")]
    pub kind: StepKind,
}

impl Step {
    pub fn new(keyword: Keyword, text: impl Into<String>, kind: StepKind) -> Self {
        Self {
            keyword,
            text: text.into(),
            kind,
        }
    }
}
