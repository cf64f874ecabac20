//! Locator inference from rule keywords and quoted literals.

use super::{repair::quote_literal, tables::LOCATOR_RULES};
use crate::models::{Confidence, ElementType, Locator, Step};

/// Infers locators from the source text and the derived step texts.
///
/// Every firing rule contributes a `High` locator in table order; quoted
/// literals of the source text follow as `Medium` text locators named
/// `textElement1`, `textElement2`, ...
pub fn infer_locators(text: &str, steps: &[Step]) -> Vec<Locator> {
    let mut corpus = text.to_lowercase();
    for step in steps {
        corpus.push('\n');
        corpus.push_str(&step.text.to_lowercase());
    }

    let mut locators: Vec<Locator> = LOCATOR_RULES
        .iter()
        .filter(|rule| rule.matches(&corpus))
        .map(|rule| Locator {
            name: rule.name.to_string(),
            selector: rule.selector.to_string(),
            element: rule.element,
            confidence: Confidence::High,
        })
        .collect();

    locators.extend(
        quoted_literals(text)
            .into_iter()
            .enumerate()
            .map(|(i, literal)| Locator {
                name: format!("textElement{}", i + 1),
                selector: format!("getByText('{}')", quote_literal(&literal)),
                element: ElementType::Text,
                confidence: Confidence::Medium,
            }),
    );
    locators
}

/// Extracts single- and double-quoted literals in order of appearance.
///
/// A single quote opens only after a non-alphanumeric character and closes
/// only before one, so apostrophes such as in "user's" are skipped. Literals
/// never span lines and repeated literals are reported once.
pub fn quoted_literals(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut literals: Vec<String> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let quote = bytes[i];
        if (quote == b'"' || quote == b'\'') && opens_quote(text, i) {
            if let Some(end) = closing_quote(text, i + 1, quote) {
                let literal = text[i + 1..end].trim();
                if !literal.is_empty() && !literals.iter().any(|l| l == literal) {
                    literals.push(literal.to_string());
                }
                i = end + 1;
                continue;
            }
        }
        i += 1;
    }
    literals
}

fn opens_quote(text: &str, at: usize) -> bool {
    text.as_bytes()[at] == b'"'
        || !text[..at]
            .chars()
            .next_back()
            .map_or(false, char::is_alphanumeric)
}

fn closing_quote(text: &str, from: usize, quote: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    (from..bytes.len())
        .take_while(|&j| bytes[j] != b'\n')
        .find(|&j| {
            bytes[j] == quote
                && (quote == b'"'
                    || !text[j + 1..]
                        .chars()
                        .next()
                        .map_or(false, char::is_alphanumeric))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Keyword, StepKind};

    #[test]
    fn test_quoted_literals_in_order() {
        assert_eq!(
            quoted_literals(r#"Click 'Login' then "Save changes""#),
            vec!["Login".to_string(), "Save changes".to_string()]
        );
    }

    #[test]
    fn test_apostrophes_are_not_quotes() {
        assert!(quoted_literals("the user's profile and the admin's page").is_empty());
        assert_eq!(
            quoted_literals("Press 'Don't save' on the user's dialog"),
            vec!["Don't save".to_string()]
        );
    }

    #[test]
    fn test_repeated_and_unterminated_literals() {
        assert_eq!(
            quoted_literals("'Next' and 'Next' again, then 'Back"),
            vec!["Next".to_string()]
        );
        assert!(quoted_literals("say \"hello\nworld\"").is_empty());
    }

    #[test]
    fn test_rules_fire_on_text_and_steps() {
        let steps = vec![Step::new(
            Keyword::When,
            "I open the payroll menu",
            StepKind::Action,
        )];
        let locators = infer_locators("Enter your password", &steps);
        let names: Vec<&str> = locators.iter().map(|l| l.name.as_str()).collect();
        assert!(names.contains(&"payrollMenuLink"));
        assert!(names.contains(&"passwordInput"));
        assert!(names.contains(&"mainNavigation"));
        assert!(locators.iter().all(|l| l.confidence == Confidence::High));
    }

    #[test]
    fn test_quoted_literal_becomes_text_locator() {
        let locators = infer_locators("Press 'Continue' to proceed", &[]);
        let text = locators
            .iter()
            .find(|l| l.name == "textElement1")
            .expect("text locator");
        assert_eq!(text.selector, "getByText('Continue')");
        assert_eq!(text.element, ElementType::Text);
        assert_eq!(text.confidence, Confidence::Medium);
    }

    #[test]
    fn test_literal_quotes_are_escaped() {
        let locators = infer_locators(r#"Press "Don't save""#, &[]);
        let text = locators
            .iter()
            .find(|l| l.element == ElementType::Text)
            .expect("text locator");
        assert_eq!(text.selector, r"getByText('Don\'t save')");
    }
}
