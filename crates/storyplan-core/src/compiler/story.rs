//! User-story inference and tagging.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{
    annotate::Annotator,
    tables::{contains_phrase, DOMAIN_CONTEXTS, TAG_RULES},
};
use crate::models::{Step, StoryOrigin, UserStory};

static AS_A_STORY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\bas an?\s+(.+?),?\s+i\s+(?:want to|would like to|need to)\s+(.+?),?\s+(?:so that|in order to)\s+(.+?)(?:\.|\n|$)",
    )
    .expect("AS_A_STORY regex should compile")
});

static GIVEN_WHEN_THEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)\bgiven[ \t]+(.+?),?[ \t]+when[ \t]+(.+?),?[ \t]+then[ \t]+(.+?)(?:\.|$)")
        .expect("GIVEN_WHEN_THEN regex should compile")
});

static BASIC_STORY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:user\s+)?story:\s*(.+?)(?:\.|\n|$)")
        .expect("BASIC_STORY regex should compile")
});

const BASIC_ACTOR: &str = "user";
const BASIC_BENEFIT: &str = "accomplish the task";

/// Fallback story when nothing else matched.
pub fn generic_story() -> UserStory {
    UserStory::new(
        "user",
        "interact with the application",
        "accomplish their goals",
        StoryOrigin::Generic,
    )
}

/// Infers the user story of a document.
///
/// Explicit story sentences win, then the annotator, then the first
/// matching domain context over text and step texts, then [`generic_story`].
pub fn infer_story(text: &str, steps: &[Step], annotator: &dyn Annotator) -> UserStory {
    explicit_story(text)
        .or_else(|| annotator.propose_story(text))
        .or_else(|| context_story(&corpus(text, steps)))
        .unwrap_or_else(generic_story)
}

/// Matches "As a X, I want to Y, so that Z", "Given X when Y then Z" and
/// "User story: Y" in that order.
pub fn explicit_story(text: &str) -> Option<UserStory> {
    for pattern in [&AS_A_STORY, &GIVEN_WHEN_THEN] {
        if let Some(caps) = pattern.captures(text) {
            let actor = trim_group(&caps[1]);
            let action = trim_group(&caps[2]);
            let benefit = trim_group(&caps[3]);
            if !actor.is_empty() && !action.is_empty() && !benefit.is_empty() {
                return Some(UserStory::new(actor, action, benefit, StoryOrigin::Formal));
            }
        }
    }

    BASIC_STORY
        .captures(text)
        .map(|caps| trim_group(&caps[1]).to_string())
        .filter(|action| !action.is_empty())
        .map(|action| UserStory::new(BASIC_ACTOR, action, BASIC_BENEFIT, StoryOrigin::Basic))
}

fn context_story(corpus: &str) -> Option<UserStory> {
    let context = DOMAIN_CONTEXTS.iter().find(|c| c.matches(corpus))?;
    log::debug!("Matched domain context '{}'", context.name);
    Some(UserStory::new(
        context.actor,
        context.action,
        context.benefit,
        StoryOrigin::Context,
    ))
}

/// Topical tags in table order.
pub fn extract_tags(text: &str, steps: &[Step]) -> Vec<String> {
    let corpus = corpus(text, steps);
    TAG_RULES
        .iter()
        .filter(|rule| rule.keywords.iter().any(|k| contains_phrase(&corpus, k)))
        .map(|rule| rule.tag.to_string())
        .collect()
}

/// Lowercased source text followed by every step text.
fn corpus(text: &str, steps: &[Step]) -> String {
    let mut corpus = text.to_lowercase();
    for step in steps {
        corpus.push(' ');
        corpus.push_str(&step.text.to_lowercase());
    }
    corpus
}

fn trim_group(group: &str) -> &str {
    group
        .trim()
        .trim_end_matches([',', '.', ';', ':'])
        .trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::annotate::{EnhancedAnnotator, HeuristicAnnotator};
    use crate::models::{Keyword, StepKind};

    #[test]
    fn test_as_a_story() {
        let story = explicit_story(
            "As a registered user, I want to login using my email and password, so that I can access my dashboard.",
        )
        .expect("story");
        assert_eq!(story.actor, "registered user");
        assert_eq!(story.action, "login using my email and password");
        assert_eq!(story.benefit, "I can access my dashboard");
        assert_eq!(story.origin, StoryOrigin::Formal);
    }

    #[test]
    fn test_as_an_story_with_alternate_phrasing() {
        let story = explicit_story("As an editor I would like to publish drafts in order to share news")
            .expect("story");
        assert_eq!(story.actor, "editor");
        assert_eq!(story.action, "publish drafts");
        assert_eq!(story.benefit, "share news");
    }

    #[test]
    fn test_given_when_then_story() {
        let story = explicit_story("Given a cart, when I pay, then I get a receipt.").expect("story");
        assert_eq!(story.actor, "a cart");
        assert_eq!(story.action, "I pay");
        assert_eq!(story.benefit, "I get a receipt");
    }

    #[test]
    fn test_gherkin_lines_are_not_a_given_when_then_story() {
        let text = "Given I am on the cart page\nWhen I click checkout\nThen I see the receipt";
        assert_eq!(explicit_story(text), None);
    }

    #[test]
    fn test_basic_story() {
        let story = explicit_story("User story: export monthly reports\nMore text").expect("story");
        assert_eq!(story.actor, BASIC_ACTOR);
        assert_eq!(story.action, "export monthly reports");
        assert_eq!(story.origin, StoryOrigin::Basic);
    }

    #[test]
    fn test_story_word_without_colon_is_not_a_story() {
        assert_eq!(explicit_story("Tell a story about the product"), None);
    }

    #[test]
    fn test_context_story_prefers_payroll_over_navigation() {
        let story = infer_story("Open the menu and run payroll", &[], &HeuristicAnnotator);
        assert_eq!(story.actor, "HR administrator");
        assert_eq!(story.origin, StoryOrigin::Context);
    }

    #[test]
    fn test_context_story_sees_step_texts() {
        let steps = vec![Step::new(Keyword::When, "I sign in", StepKind::Action)];
        let story = infer_story("Open the app", &steps, &HeuristicAnnotator);
        assert_eq!(story.actor, "registered user");
    }

    #[test]
    fn test_annotator_runs_before_context_table() {
        let story = infer_story("The admin opens the payroll page", &[], &EnhancedAnnotator);
        assert_eq!(story.origin, StoryOrigin::Annotated);
        assert_eq!(story.actor, "admin");
    }

    #[test]
    fn test_generic_fallback() {
        let story = infer_story("Nothing to see", &[], &HeuristicAnnotator);
        assert_eq!(story, generic_story());
    }

    #[test]
    fn test_tags_are_unique_and_ordered() {
        let tags = extract_tags("Critical: log in, then search and log in again", &[]);
        assert_eq!(tags, vec!["authentication", "search", "critical"]);
    }
}
