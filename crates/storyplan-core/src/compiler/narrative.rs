//! Narrative-to-action conversion.
//!
//! Turns one candidate line of prose into zero or more first-person action
//! fragments:
//!
//! ```text
//! "2. The user uploads their documents, such as bank statements."
//!   → clean      "The user uploads their documents, such as bank statements"
//!   → sentences  ["The user uploads their documents, such as bank statements"]
//!   → person     "I upload my documents, such as bank statements"
//!   → split      ["I upload my documents such as bank statements"]
//! ```

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::tables::{
    base_form, contains_phrase, starts_with_phrase, ACTION_WORDS, BARE_NOUNS, IMPERATIVE_VERBS,
    NAMED_ACTORS, SPELLING_FIXES, STATE_PREFIXES, SUBJECTS,
};

static ENUMERATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d+[.)]|\d+\s|[-*•])\s*").expect("ENUMERATION regex should compile")
});

static GHERKIN_LEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:given|when|then|and|but)\s+").expect("GHERKIN_LEAD regex should compile")
});

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)").expect("SENTENCE_END regex should compile"));

static SUBJECT: Lazy<Regex> = Lazy::new(|| {
    let subjects = SUBJECTS.join("|");
    Regex::new(&format!(r"(?i)^(?:when\s+)?(?:{subjects})\s+(?:can\s+)?"))
        .expect("SUBJECT regex should compile")
});

static NAMED_ACTOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:When\s+)?([A-Z][a-z]+)\s+(can\s+)?([A-Za-z]+)")
        .expect("NAMED_ACTOR regex should compile")
});

static FIRST_PERSON_VERB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^I\s+([A-Za-z]+)\b").expect("FIRST_PERSON_VERB regex should compile")
});

static THEIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\btheir\b").expect("THEIR regex should compile"));

static IS_LOADED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:initial\s+)?(.+?)\s+is\s+loaded").expect("IS_LOADED regex should compile")
});

static INDICATING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.+?)\s+indicating that (?:the user|user|I)\s+can\s+(.+)")
        .expect("INDICATING regex should compile")
});

static QUOTED_OPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)with a "([^"]+)""#).expect("QUOTED_OPTION regex should compile")
});

static LIST_INTRO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i),?\s*\b(such as|including)\s+").expect("LIST_INTRO regex should compile")
});

static CONJUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i),\s*and\s+").expect("CONJUNCTION regex should compile"));

static LEADING_USER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:the user|user)\s+").expect("LEADING_USER regex should compile")
});

static I_AM_IN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:i'm|iam|i am)\s+in\s+(?:the\s+)?").expect("I_AM_IN regex should compile")
});

static PAGE_LOADED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\w+) page is (?:loaded|laoded)").expect("PAGE_LOADED regex should compile")
});

static RUNNING_STATUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)i see (\w+) running status").expect("RUNNING_STATUS regex should compile")
});

static ONCE_FINISHED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)once finished,?\s*i see").expect("ONCE_FINISHED regex should compile")
});

/// Converts every candidate line into normalized action fragments.
pub fn convert(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| to_actions(&clean_line(line)))
        .map(|action| normalize_step_text(&action))
        .collect()
}

/// Strips enumeration markers and stray punctuation, then capitalizes.
pub fn clean_line(line: &str) -> String {
    let stripped = ENUMERATION.replace(line.trim(), "");
    let mut cleaned = stripped
        .trim_end_matches(|c: char| matches!(c, '`' | ',' | ';' | ':') || c.is_whitespace())
        .to_string();

    // "Given I am..." and "When the user..." are prose in Gherkin clothing
    if let Some(lead) = GHERKIN_LEAD.find(&cleaned) {
        if starts_with_actor(&cleaned[lead.end()..]) {
            cleaned = cleaned[lead.end()..].to_string();
        }
    }

    capitalize(&cleaned)
}

/// Splits a cleaned line into first-person action fragments.
pub fn to_actions(line: &str) -> Vec<String> {
    SENTENCE_END
        .split(line)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .flat_map(|sentence| split_actions(&to_first_person(sentence)))
        .filter(|action| !action.is_empty())
        .collect()
}

/// Rewrites third-person narrative into a first-person statement.
pub fn to_first_person(text: &str) -> String {
    let mut converted = text.trim().to_string();

    if let Some(m) = SUBJECT.find(&converted) {
        let rest = &converted[m.end()..];
        let lower_rest = rest.to_lowercase();
        // "User name field" and "user story" are nouns, not a subject
        if !starts_with_phrase(&lower_rest, "name") && !starts_with_phrase(&lower_rest, "story") {
            converted = format!("I {rest}");
        }
    } else if let Some(verb_start) = NAMED_ACTOR
        .captures(&converted)
        .filter(|caps| is_named_actor(caps))
        .and_then(|caps| caps.get(3))
        .map(|m| m.start())
    {
        converted = format!("I {}", &converted[verb_start..]);
    }

    converted = FIRST_PERSON_VERB
        .replace(&converted, |caps: &Captures<'_>| match base_form(&caps[1]) {
            Some(base) => format!("I {base}"),
            None => caps[0].to_string(),
        })
        .into_owned();

    converted = THEIR.replace_all(&converted, "my").into_owned();

    if converted.to_lowercase().contains("is loaded") {
        converted = IS_LOADED.replace(&converted, "I see ${1} loaded").into_owned();
    }
    converted = INDICATING.replace(&converted, "I can ${2}").into_owned();
    converted = QUOTED_OPTION.replace(&converted, "with a ${1} option").into_owned();

    with_imperative_subject(converted.trim())
}

/// Splits compound sentences, keeping example lists on their parent action.
pub fn split_actions(text: &str) -> Vec<String> {
    if let Some(caps) = LIST_INTRO.captures(text) {
        let (Some(whole), Some(connector)) = (caps.get(0), caps.get(1)) else {
            return Vec::new();
        };
        let main = text[..whole.start()].trim();
        let items = text[whole.end()..].trim();

        let mut actions = Vec::new();
        if is_actionable(main) {
            actions.push(main.to_string());
        }
        if !items.is_empty() {
            let as_action = to_first_person(items);
            if is_complete_action(&as_action) {
                actions.push(as_action);
            } else if let Some(last) = actions.last_mut() {
                last.push_str(&format!(" {} {}", connector.as_str().to_lowercase(), items));
            }
        }
        return actions;
    }

    let mut parts = Vec::new();
    let mut start = 0;
    for m in CONJUNCTION.find_iter(text) {
        if starts_with_actor(&text[m.end()..]) {
            parts.push(&text[start..m.start()]);
            start = m.end();
        }
    }
    parts.push(&text[start..]);

    parts
        .into_iter()
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.trim().to_string()
            } else {
                to_first_person(part)
            }
        })
        .filter(|part| !part.is_empty() && is_actionable(part))
        .collect()
}

/// True if the fragment carries an action-intent word and is not a bare
/// noun list.
pub fn is_actionable(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    if lower.chars().count() <= 3 || BARE_NOUNS.contains(&lower.as_str()) {
        return false;
    }
    ACTION_WORDS.iter().any(|w| contains_phrase(&lower, w))
        || STATE_PREFIXES.iter().any(|p| starts_with_phrase(&lower, p))
}

/// Cleans up a fragment into final step text.
pub fn normalize_step_text(text: &str) -> String {
    let mut normalized = LEADING_USER.replace(text.trim(), "I ").into_owned();
    normalized = I_AM_IN.replace(&normalized, "I am on the ").into_owned();
    normalized = PAGE_LOADED.replace_all(&normalized, "${1} page loads").into_owned();
    normalized = RUNNING_STATUS
        .replace_all(&normalized, |caps: &Captures<'_>| {
            if caps[1].eq_ignore_ascii_case("the") {
                caps[0].to_string()
            } else {
                format!("I see the {} running status", &caps[1])
            }
        })
        .into_owned();
    normalized = ONCE_FINISHED.replace(&normalized, "I see").into_owned();

    for (wrong, right) in SPELLING_FIXES {
        if normalized.to_lowercase().contains(wrong) {
            normalized = replace_ignore_case(&normalized, wrong, right);
        }
    }

    normalized.trim().trim_end_matches('.').trim_end().to_string()
}

fn is_complete_action(text: &str) -> bool {
    starts_with_phrase(&text.to_lowercase(), "i") && is_actionable(text)
}

fn is_named_actor(caps: &Captures<'_>) -> bool {
    if !NAMED_ACTORS.contains(&&caps[1]) {
        return false;
    }
    let verb = &caps[3];
    caps.get(2).is_some() || (base_form(verb).is_some() && !matches!(verb, "is" | "has"))
}

fn starts_with_actor(rest: &str) -> bool {
    let lower = rest.trim_start().to_lowercase();
    if starts_with_phrase(&lower, "i") || SUBJECTS.iter().any(|s| starts_with_phrase(&lower, s)) {
        return true;
    }
    NAMED_ACTOR
        .captures(rest.trim_start())
        .map_or(false, |caps| is_named_actor(&caps))
}

/// "Click the button" → "I click the button".
fn with_imperative_subject(text: &str) -> String {
    let first = text.split_whitespace().next().unwrap_or_default();
    let lower = first.to_lowercase();
    if IMPERATIVE_VERBS.contains(&lower.as_str()) {
        format!("I {}{}", lower, &text[first.len()..])
    } else {
        text.to_string()
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn replace_ignore_case(text: &str, needle: &str, replacement: &str) -> String {
    let pattern = format!("(?i){}", regex::escape(needle));
    match Regex::new(&pattern) {
        Ok(re) => re.replace_all(text, replacement).into_owned(),
        Err(_) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line_strips_enumeration_and_capitalizes() {
        assert_eq!(clean_line("1. click the login button"), "Click the login button");
        assert_eq!(clean_line("- the user logs in`"), "The user logs in");
        assert_eq!(clean_line("3) select a file;"), "Select a file");
        assert_eq!(clean_line("3D model loads"), "3D model loads");
    }

    #[test]
    fn test_clean_line_drops_gherkin_lead_before_actor() {
        assert_eq!(clean_line("Given I am on the home page"), "I am on the home page");
        assert_eq!(clean_line("When the user clicks save"), "The user clicks save");
        assert_eq!(clean_line("When finished, reload"), "When finished, reload");
    }

    #[test]
    fn test_person_conversion() {
        assert_eq!(to_first_person("The user logs in to the portal"), "I log in to the portal");
        assert_eq!(to_first_person("User can upload files"), "I upload files");
        assert_eq!(to_first_person("Alex continues to the summary"), "I continue to the summary");
        assert_eq!(to_first_person("The user reviews their order"), "I review my order");
        assert_eq!(to_first_person("The user is on the cart page"), "I am on the cart page");
    }

    #[test]
    fn test_person_conversion_leaves_nouns_alone() {
        assert_eq!(to_first_person("User name field is empty"), "User name field is empty");
        assert_eq!(to_first_person("Page is blank"), "Page is blank");
    }

    #[test]
    fn test_only_known_personas_become_first_person() {
        assert_eq!(to_first_person("Alex can upload files"), "I upload files");
        assert_eq!(to_first_person("Dialog closes automatically"), "Dialog closes automatically");
        assert_eq!(to_first_person("Payroll runs overnight"), "Payroll runs overnight");
    }

    #[test]
    fn test_sentence_split_keeps_dotted_tokens() {
        assert_eq!(
            to_actions("Enter user@example.com in the email field"),
            vec!["I enter user@example.com in the email field".to_string()]
        );
        assert_eq!(
            to_actions("Open example.com. Click the login button."),
            vec!["I open example.com".to_string(), "I click the login button".to_string()]
        );
    }

    #[test]
    fn test_passive_rewrites() {
        assert_eq!(to_first_person("Initial model is loaded"), "I see model loaded");
        assert_eq!(
            to_first_person("A banner appears indicating that the user can export data"),
            "I can export data"
        );
        assert_eq!(
            to_first_person(r#"I see a dialog with a "Confirm" button"#),
            "I see a dialog with a Confirm option button"
        );
    }

    #[test]
    fn test_imperative_gets_subject() {
        assert_eq!(to_first_person("Click the login button"), "I click the login button");
        assert_eq!(to_first_person("Dashboard loads"), "Dashboard loads");
    }

    #[test]
    fn test_example_list_stays_attached() {
        let actions = split_actions("I upload my documents, such as bank statements, tax returns");
        assert_eq!(
            actions,
            vec!["I upload my documents such as bank statements, tax returns".to_string()]
        );
    }

    #[test]
    fn test_action_list_is_split() {
        let actions = split_actions("I open the settings including click the save button");
        assert_eq!(
            actions,
            vec![
                "I open the settings".to_string(),
                "I click the save button".to_string()
            ]
        );
    }

    #[test]
    fn test_conjunction_with_actor_splits() {
        let actions = split_actions("I log in, and the user reviews the dashboard");
        assert_eq!(
            actions,
            vec!["I log in".to_string(), "I review the dashboard".to_string()]
        );
    }

    #[test]
    fn test_conjunction_without_actor_does_not_split() {
        let actions = split_actions("I select the report, and export options appear");
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn test_actionability() {
        assert!(is_actionable("I click submit"));
        assert!(is_actionable("I am on the home page"));
        assert!(!is_actionable("Company name"));
        assert!(!is_actionable("The weather is nice"));
    }

    #[test]
    fn test_normalize_step_text() {
        assert_eq!(normalize_step_text("I'm in settings"), "I am on the settings");
        assert_eq!(normalize_step_text("Home page is laoded"), "Home page loads");
        assert_eq!(normalize_step_text("I see payroll running status"), "I see the payroll running status");
        assert_eq!(normalize_step_text("Once finished, I see the report"), "I see the report");
        assert_eq!(normalize_step_text("I log in sucesfully"), "I log in successfully");
    }

    #[test]
    fn test_convert_pipeline() {
        let lines = vec![
            "1. The user logs in with their email.".to_string(),
            "Company name".to_string(),
        ];
        assert_eq!(convert(&lines), vec!["I log in with my email".to_string()]);
    }
}
