//! Keyword assignment, step kinds and keyword-flow repair.

use super::tables::{
    contains_phrase, starts_with_phrase, ACTION_PREFIXES, CONTINUATION_PREFIXES, SETUP_PREFIXES,
    STARTING_PREFIXES, VERIFICATION_PREFIXES,
};
use crate::models::{Keyword, Step, StepKind};

const SETUP_WORDS: &[&str] = &["given", "setup", "i am", "i start", "i begin"];
const ACTION_WORDS: &[&str] = &["when", "click", "enter"];
const VERIFICATION_WORDS: &[&str] = &["then", "should", "expect", "i see", "verify"];

fn has_prefix(lower: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| starts_with_phrase(lower, p))
}

/// Assigns a keyword to one fragment given the keyword assigned before it.
pub fn assign_keyword(text: &str, previous: Option<Keyword>) -> Keyword {
    let lower = text.trim().to_lowercase();

    if has_prefix(&lower, SETUP_PREFIXES) {
        Keyword::Given
    } else if has_prefix(&lower, VERIFICATION_PREFIXES) {
        Keyword::Then
    } else if previous == Some(Keyword::When) && has_prefix(&lower, CONTINUATION_PREFIXES) {
        Keyword::And
    } else {
        // UI actions and anything unrecognized
        Keyword::When
    }
}

/// Classifies the role of a step from its text.
///
/// Leading trigger phrases decide first; otherwise the text is scanned for
/// setup, action and verification vocabulary in that order.
pub fn classify_kind(text: &str) -> StepKind {
    let lower = text.trim().to_lowercase();

    if has_prefix(&lower, SETUP_PREFIXES) {
        return StepKind::Setup;
    }
    if has_prefix(&lower, VERIFICATION_PREFIXES) {
        return StepKind::Verification;
    }
    if has_prefix(&lower, ACTION_PREFIXES) {
        return StepKind::Action;
    }

    let mentions = |words: &[&str]| words.iter().any(|w| contains_phrase(&lower, w));
    if mentions(SETUP_WORDS) {
        StepKind::Setup
    } else if mentions(ACTION_WORDS) {
        StepKind::Action
    } else if mentions(VERIFICATION_WORDS) {
        StepKind::Verification
    } else {
        StepKind::Action
    }
}

/// Turns fragments into steps, assigning keywords in order.
pub fn classify(fragments: &[String]) -> Vec<Step> {
    let mut previous = None;
    fragments
        .iter()
        .map(|text| {
            let keyword = assign_keyword(text, previous);
            previous = Some(keyword);
            Step::new(keyword, text.as_str(), classify_kind(text))
        })
        .collect()
}

/// Repairs keyword transitions in one pass.
///
/// The first step becomes `Given` when it describes a starting state and is
/// never `And`. A step repeating the keyword of the current phase becomes
/// `And`, so `When, When, Then` reads `When, And, Then` and consecutive
/// `Given` steps collapse into `Given, And`.
pub fn repair_keywords(mut steps: Vec<Step>) -> Vec<Step> {
    let Some(first) = steps.first_mut() else {
        return steps;
    };

    let lower = first.text.to_lowercase();
    if first.keyword == Keyword::When && has_prefix(&lower, STARTING_PREFIXES) {
        first.keyword = Keyword::Given;
    } else if first.keyword == Keyword::And {
        first.keyword = Keyword::When;
    }

    let mut phase = first.keyword;
    for step in steps.iter_mut().skip(1) {
        if step.keyword == Keyword::And {
            continue;
        }
        if step.keyword == phase {
            step.keyword = Keyword::And;
        } else {
            phase = step.keyword;
        }
    }
    steps
}
