//! Display implementations for domain models.
//!
//! Every model formats as markdown so the CLI can hand the output straight to
//! the terminal renderer. Steps format as plain Gherkin lines, which keeps
//! them copy-pasteable into a feature file.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Complexity, Confidence, ElementType, Keyword, Locator, Plan, Scenario, ScenarioKind, Step,
    StepKind, StoryOrigin, UserStory,
};

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    Keyword,
    StepKind,
    ElementType,
    Confidence,
    ScenarioKind,
    StoryOrigin,
    Complexity,
);

/// Indefinite article for a noun phrase.
fn article(noun: &str) -> &'static str {
    match noun.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

impl fmt::Display for UserStory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "As {} {}, I want to {}, so that {}",
            article(&self.actor),
            self.actor,
            self.action,
            self.benefit
        )
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.keyword, self.text)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** ({}, {}): `{}`",
            self.name, self.element, self.confidence, self.selector
        )
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Scenario: {} ({})", self.name, self.kind)?;
        writeln!(f)?;
        for step in &self.steps {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Feature: {}", self.feature_name)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Scenario: {}", self.scenario_name)?;
        if !self.tags.is_empty() {
            let tags: Vec<String> = self.tags.iter().map(|t| format!("@{t}")).collect();
            writeln!(f, "- Tags: {}", tags.join(" "))?;
        }
        writeln!(
            f,
            "- Complexity: {} ({} words)",
            self.metadata.complexity, self.metadata.word_count
        )?;
        writeln!(f, "- Analysis: {}", self.metadata.analysis)?;
        writeln!(f, "- Compiled: {}", LocalDateTime(&self.metadata.timestamp))?;

        writeln!(f, "\n## User Story")?;
        writeln!(f)?;
        writeln!(f, "{}", self.user_story)?;

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        for step in &self.steps {
            write!(f, "{step}")?;
        }

        if self.locators.is_empty() {
            writeln!(f, "\nNo locators inferred.")?;
        } else {
            writeln!(f, "\n## Locators")?;
            writeln!(f)?;
            for locator in &self.locators {
                write!(f, "{locator}")?;
            }
        }

        // The main scenario repeats the plan steps; only list the extra ones
        let extra: Vec<&Scenario> = self
            .scenarios
            .iter()
            .filter(|s| s.kind == ScenarioKind::Scenario || s.kind == ScenarioKind::Outline)
            .collect();
        if !extra.is_empty() {
            writeln!(f, "\n## Additional Scenarios")?;
            for scenario in extra {
                writeln!(f)?;
                write!(f, "{scenario}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article() {
        assert_eq!(article("user"), "a");
        assert_eq!(article("HR administrator"), "a");
        assert_eq!(article("administrator"), "an");
        assert_eq!(article(""), "a");
    }

    #[test]
    fn test_keyword_display() {
        assert_eq!(Keyword::Given.to_string(), "Given");
        assert_eq!(Keyword::And.to_string(), "And");
        assert_eq!(StepKind::Verification.to_string(), "verification");
    }

    #[test]
    fn test_scenario_display() {
        let scenario = Scenario {
            name: "Checkout".to_string(),
            steps: vec![Step::new(Keyword::When, "I open my cart", StepKind::Action)],
            kind: ScenarioKind::Scenario,
        };
        let output = scenario.to_string();
        assert!(output.starts_with("### Scenario: Checkout (scenario)"));
        assert!(output.contains("When I open my cart\n"));
    }
}
