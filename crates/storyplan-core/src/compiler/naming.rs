//! Feature and scenario naming.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tables::{
    contains_phrase, ScenarioTopic, GENERIC_SCENARIO_NAME, STEP_TOPICS, TEXT_TOPICS,
};
use crate::models::{Keyword, Step, StoryOrigin, UserStory};

static TICKET_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]{3,4})-(.+)$").expect("TICKET_PREFIX regex should compile"));

static SCENARIO_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^\s*scenario(?:\s+outline)?:[ \t]*(\S.*?)\s*$")
        .expect("SCENARIO_LABEL regex should compile")
});

const DEFAULT_FEATURE_NAME: &str = "Feature";

/// Sanitizes a caller-supplied feature name.
///
/// A ticket prefix such as `PAY-` is kept verbatim; the remainder keeps only
/// ASCII alphanumerics and single spaces.
pub fn sanitize_feature_name(name: &str) -> String {
    let name = name.trim();
    let sanitized = match TICKET_PREFIX.captures(name) {
        Some(caps) => format!("{}-{}", &caps[1], strip_symbols(&caps[2])),
        None => strip_symbols(name),
    };

    if sanitized.is_empty() {
        DEFAULT_FEATURE_NAME.to_string()
    } else {
        sanitized
    }
}

fn strip_symbols(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Names the primary scenario.
///
/// An explicit `Scenario:` label wins. Otherwise the first action step is
/// matched against [`STEP_TOPICS`], then the whole text against
/// [`TEXT_TOPICS`], then a non-generic story gives `"{actor} {action}"`.
pub fn scenario_name(text: &str, steps: &[Step], story: &UserStory) -> String {
    if let Some(caps) = SCENARIO_LABEL.captures(text) {
        return caps[1].to_string();
    }

    let first_action = steps.iter().find(|step| {
        step.keyword == Keyword::When
            || (step.keyword == Keyword::And && step.text.to_lowercase().contains("click"))
    });
    let step_topic =
        first_action.and_then(|step| find_topic(STEP_TOPICS, &step.text.to_lowercase()));
    if let Some(topic) = step_topic {
        return topic.name.to_string();
    }

    if let Some(topic) = find_topic(TEXT_TOPICS, &text.to_lowercase()) {
        return topic.name.to_string();
    }

    if story.origin != StoryOrigin::Generic {
        return format!("{} {}", story.actor, story.action);
    }
    GENERIC_SCENARIO_NAME.to_string()
}

fn find_topic(topics: &'static [ScenarioTopic], lower: &str) -> Option<&'static ScenarioTopic> {
    topics
        .iter()
        .find(|topic| topic.keywords.iter().any(|k| contains_phrase(lower, k)))
}
