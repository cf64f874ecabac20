//! Explicit scenario blocks and the fallback scaffold.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{classify::classify_kind, segment::is_noise};
use crate::models::{Keyword, Scenario, ScenarioKind, Step, StepKind, UserStory};

static SCENARIO_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^scenario(\s+outline)?\s*:\s*(.*)$").expect("SCENARIO_HEADER regex should compile")
});

static GHERKIN_STEP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(given|when|then|and|but)\s+(.+)$").expect("GHERKIN_STEP regex should compile")
});

/// Prose inside a block must be longer than this to become a step.
const MIN_BLOCK_PROSE_LEN: usize = 10;

/// Parses `Scenario:` and `Scenario Outline:` blocks of the source text.
///
/// Keyword lines keep their keyword (`But` reads as `And`). Other prose
/// lines inside a block become `Given` setup steps.
pub fn parse_scenario_blocks(text: &str) -> Vec<Scenario> {
    let mut scenarios = Vec::new();
    let mut current: Option<Scenario> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(caps) = SCENARIO_HEADER.captures(line) {
            scenarios.extend(current.take());
            let kind = if caps.get(1).is_some() {
                ScenarioKind::Outline
            } else {
                ScenarioKind::Scenario
            };
            current = Some(Scenario {
                name: caps[2].trim().to_string(),
                steps: Vec::new(),
                kind,
            });
            continue;
        }

        let Some(scenario) = current.as_mut() else {
            continue;
        };

        if let Some(caps) = GHERKIN_STEP.captures(line) {
            let keyword = caps[1].parse().unwrap_or(Keyword::And);
            scenario
                .steps
                .push(Step::new(keyword, caps[2].trim(), classify_kind(line)));
        } else if line.chars().count() > MIN_BLOCK_PROSE_LEN && !is_noise(line, 1) {
            scenario
                .steps
                .push(Step::new(Keyword::Given, line, StepKind::Setup));
        }
    }

    scenarios.extend(current);
    scenarios
}

/// Three generic steps built from a user story.
pub fn scaffold(story: &UserStory) -> Vec<Step> {
    vec![
        Step::new(
            Keyword::Given,
            format!("I am a {}", story.actor),
            StepKind::Setup,
        ),
        Step::new(
            Keyword::When,
            format!("I {}", story.action),
            StepKind::Action,
        ),
        Step::new(
            Keyword::Then,
            format!("I should be able to {}", story.benefit),
            StepKind::Verification,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoryOrigin;

    #[test]
    fn test_blocks_are_parsed_in_order() {
        let text = "\
Intro line that is ignored
Scenario: Successful login
  Given I am on the login page
  When I enter my credentials
  Then I see the dashboard
Scenario Outline: Failed login
  The account is locked for a while
  When I enter <password>
  But I stay on the login page
";
        let scenarios = parse_scenario_blocks(text);
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].name, "Successful login");
        assert_eq!(scenarios[0].kind, ScenarioKind::Scenario);
        assert_eq!(scenarios[0].steps.len(), 3);
        assert_eq!(scenarios[0].steps[0].keyword, Keyword::Given);
        assert_eq!(scenarios[0].steps[0].text, "I am on the login page");

        assert_eq!(scenarios[1].kind, ScenarioKind::Outline);
        assert_eq!(scenarios[1].steps[0].keyword, Keyword::Given);
        assert_eq!(scenarios[1].steps[0].kind, StepKind::Setup);
        assert_eq!(scenarios[1].steps[2].keyword, Keyword::And);
    }

    #[test]
    fn test_no_blocks() {
        assert!(parse_scenario_blocks("Just prose about scenarios").is_empty());
    }

    #[test]
    fn test_scaffold() {
        let story = UserStory::new("customer", "buy a hat", "stay warm", StoryOrigin::Formal);
        let steps = scaffold(&story);
        let texts: Vec<&str> = steps.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["I am a customer", "I buy a hat", "I should be able to stay warm"]
        );
        assert_eq!(steps[0].keyword, Keyword::Given);
        assert_eq!(steps[2].kind, StepKind::Verification);
    }
}
