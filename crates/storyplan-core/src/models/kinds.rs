//! Type-safe enumerations for steps, locators, scenarios and metadata.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Gherkin keyword introducing a step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Precondition or setup
    Given,

    /// User action
    When,

    /// Observable outcome
    Then,

    /// Continuation of the previous phase
    And,
}

impl FromStr for Keyword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "given" => Ok(Keyword::Given),
            "when" => Ok(Keyword::When),
            "then" => Ok(Keyword::Then),
            // `But` carries no distinct meaning for the consumers of a plan
            "and" | "but" => Ok(Keyword::And),
            _ => Err(format!("Invalid keyword: {s}")),
        }
    }
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Given => "Given",
            Keyword::When => "When",
            Keyword::Then => "Then",
            Keyword::And => "And",
        }
    }
}

/// Role a step plays within a scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Setup,
    Action,
    Verification,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Setup => "setup",
            StepKind::Action => "action",
            StepKind::Verification => "verification",
        }
    }
}

/// Kind of UI element a locator points at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Button,
    Input,
    Link,
    Text,
    Navigation,
    List,
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "button" => Ok(ElementType::Button),
            "input" => Ok(ElementType::Input),
            "link" => Ok(ElementType::Link),
            "text" => Ok(ElementType::Text),
            "navigation" => Ok(ElementType::Navigation),
            "list" => Ok(ElementType::List),
            _ => Err(format!("Invalid element type: {s}")),
        }
    }
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Button => "button",
            ElementType::Input => "input",
            ElementType::Link => "link",
            ElementType::Text => "text",
            ElementType::Navigation => "navigation",
            ElementType::List => "list",
        }
    }
}

/// How directly the source text implied a locator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// Where a scenario came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    /// Steps extracted from the narrative
    #[default]
    Main,

    /// Explicit `Scenario:` block in the source text
    Scenario,

    /// Explicit `Scenario Outline:` block in the source text
    Outline,

    /// Fallback scaffold built from the inferred user story
    Generated,
}

impl ScenarioKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKind::Main => "main",
            ScenarioKind::Scenario => "scenario",
            ScenarioKind::Outline => "outline",
            ScenarioKind::Generated => "generated",
        }
    }
}

/// How the user story of a plan was obtained.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoryOrigin {
    /// "As a X, I want Y, so that Z" or "Given X when Y then Z"
    Formal,

    /// "User story: ..." with only the action captured
    Basic,

    /// Proposed by the enhanced annotator
    Annotated,

    /// Inferred from the domain context table
    Context,

    /// Generic fallback
    Generic,
}

impl StoryOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryOrigin::Formal => "formal",
            StoryOrigin::Basic => "basic",
            StoryOrigin::Annotated => "annotated",
            StoryOrigin::Context => "context",
            StoryOrigin::Generic => "generic",
        }
    }
}

/// Coarse readability rating of the input text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
        }
    }
}
