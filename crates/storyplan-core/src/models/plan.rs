//! Plan model definition and its component records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Complexity, Locator, ScenarioKind, Step, StoryOrigin};

/// The structured test plan compiled from a narrative description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Sanitized feature identifier supplied by the caller
    pub feature_name: String,

    /// Description of the primary flow
    pub scenario_name: String,

    /// Actor, action and benefit behind the feature
    pub user_story: UserStory,

    /// Topical labels such as `authentication` or `smoke`
    #[serde(default)]
    pub tags: Vec<String>,

    /// Inferred UI element locators, unique by name
    #[serde(default)]
    pub locators: Vec<Locator>,

    /// Ordered steps of the primary scenario
    pub steps: Vec<Step>,

    /// Main scenario first, then any explicit scenario blocks
    pub scenarios: Vec<Scenario>,

    /// Diagnostic information about the compilation
    pub metadata: Metadata,
}

impl Plan {
    /// Returns the locator with the given name, if any.
    pub fn locator(&self, name: &str) -> Option<&Locator> {
        self.locators.iter().find(|l| l.name == name)
    }
}

/// "As a {actor}, I want to {action}, so that {benefit}".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStory {
    pub actor: String,
    pub action: String,
    pub benefit: String,
    pub origin: StoryOrigin,
}

impl UserStory {
    pub fn new(
        actor: impl Into<String>,
        action: impl Into<String>,
        benefit: impl Into<String>,
        origin: StoryOrigin,
    ) -> Self {
        Self {
            actor: actor.into(),
            action: action.into(),
            benefit: benefit.into(),
            origin,
        }
    }
}

/// A named, ordered group of steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub steps: Vec<Step>,
    #[serde(rename = "type")]
    pub kind: ScenarioKind,
}

/// Diagnostic, non-authoritative facts about a compilation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metadata {
    /// Name of the annotator that ran (`heuristic` or `enhanced`)
    pub analysis: String,

    /// Readability rating of the input text
    pub complexity: Complexity,

    /// Whitespace-separated word count of the input text
    pub word_count: usize,

    /// Whether the fallback scaffold replaced the extracted steps
    #[serde(default)]
    pub fallback: bool,

    /// Time of compilation (UTC)
    pub timestamp: Timestamp,
}
