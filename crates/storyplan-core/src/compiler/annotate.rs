//! Pluggable user-story annotation.
//!
//! The compiler asks its [`Annotator`] for a user story only after the
//! explicit story patterns failed and before falling back to the domain
//! context table. Returning `None` defers to that table.

use std::fmt::Debug;

use once_cell::sync::Lazy;
use regex::Regex;

use super::tables::{base_form, contains_phrase, IMPERATIVE_VERBS, ROLE_NOUNS};
use crate::models::{StoryOrigin, UserStory};

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("SENTENCE_END regex should compile"));

const MAX_VERBS: usize = 3;
const DEFAULT_ACTOR: &str = "user";
const DEFAULT_BENEFIT: &str = "achieve their goals";

/// Proposes a user story for text without an explicit one.
pub trait Annotator: Send + Sync + Debug {
    /// Short identifier recorded in the plan metadata.
    fn name(&self) -> &'static str;

    /// Returns a story, or `None` to defer to the domain context table.
    fn propose_story(&self, text: &str) -> Option<UserStory>;
}

/// Annotator that never proposes anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnnotator;

impl Annotator for HeuristicAnnotator {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn propose_story(&self, _text: &str) -> Option<UserStory> {
        None
    }
}

/// Annotator built on lightweight word tagging.
///
/// The actor is the first known role noun, the action joins up to three
/// recognized verbs with "and", and the benefit is the last sentence of a
/// multi-sentence text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnhancedAnnotator;

impl EnhancedAnnotator {
    fn actor(lower: &str) -> &'static str {
        ROLE_NOUNS
            .iter()
            .copied()
            .find(|noun| contains_phrase(lower, noun))
            .unwrap_or(DEFAULT_ACTOR)
    }

    fn verbs(lower: &str) -> Vec<&'static str> {
        let mut verbs = Vec::new();
        for word in lower.split(|c: char| !c.is_alphabetic()) {
            let verb = IMPERATIVE_VERBS
                .iter()
                .copied()
                .find(|v| *v == word)
                .or_else(|| base_form(word).filter(|base| IMPERATIVE_VERBS.contains(base)));
            if let Some(verb) = verb {
                if !verbs.contains(&verb) {
                    verbs.push(verb);
                }
            }
            if verbs.len() == MAX_VERBS {
                break;
            }
        }
        verbs
    }

    fn benefit(text: &str) -> String {
        let sentences: Vec<&str> = SENTENCE_END
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        match sentences.as_slice() {
            [.., last] if sentences.len() > 1 => (*last).to_string(),
            _ => DEFAULT_BENEFIT.to_string(),
        }
    }
}

impl Annotator for EnhancedAnnotator {
    fn name(&self) -> &'static str {
        "enhanced"
    }

    fn propose_story(&self, text: &str) -> Option<UserStory> {
        let lower = text.to_lowercase();
        let verbs = Self::verbs(&lower);
        if verbs.is_empty() {
            return None;
        }

        Some(UserStory::new(
            Self::actor(&lower),
            verbs.join(" and "),
            Self::benefit(text),
            StoryOrigin::Annotated,
        ))
    }
}
