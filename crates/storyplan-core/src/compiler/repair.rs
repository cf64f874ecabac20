//! Selector repair and de-duplication.
//!
//! Neither function here can fail: a selector of unknown shape is wrapped in
//! a generic `locator(...)` accessor rather than rejected.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Locator, Step};

/// Accessor functions a rendered selector may start with.
const ACCESSORS: &[&str] = &[
    "getByRole",
    "getByLabel",
    "getByText",
    "getByPlaceholder",
    "getByTestId",
    "getByAltText",
    "getByTitle",
    "locator",
];

const ROOT_PREFIX: &str = "page.";

static SIMPLE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([A-Za-z][\w-]*)$").expect("SIMPLE_ID regex should compile"));

fn strip_root(selector: &str) -> &str {
    selector.strip_prefix(ROOT_PREFIX).unwrap_or(selector)
}

/// True if the selector is an accessor call, with or without the root prefix.
pub fn is_accessor(selector: &str) -> bool {
    let selector = strip_root(selector.trim());
    ACCESSORS.iter().any(|accessor| {
        selector
            .strip_prefix(accessor)
            .map_or(false, |rest| rest.starts_with('('))
    })
}

/// Escapes a literal for use inside a single-quoted selector argument.
pub fn quote_literal(literal: &str) -> String {
    literal.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Normalizes a selector into an accessor expression.
pub fn repair_selector(selector: &str) -> String {
    let selector = strip_root(selector.trim());
    if is_accessor(selector) {
        return selector.to_string();
    }
    if let Some(caps) = SIMPLE_ID.captures(selector) {
        return format!("getByTestId('{}')", &caps[1]);
    }
    format!("locator('{}')", quote_literal(selector))
}

/// Repairs every selector and drops locators whose name was already seen.
pub fn repair_locators(locators: Vec<Locator>) -> Vec<Locator> {
    let mut names = HashSet::new();
    locators
        .into_iter()
        .filter(|locator| {
            let fresh = names.insert(locator.name.clone());
            if !fresh {
                log::warn!("Dropping duplicate locator '{}'", locator.name);
            }
            fresh
        })
        .map(|mut locator| {
            let repaired = repair_selector(&locator.selector);
            if repaired != locator.selector && !is_accessor(&locator.selector) {
                log::warn!(
                    "Repaired selector of '{}': {} -> {}",
                    locator.name,
                    locator.selector,
                    repaired
                );
            }
            locator.selector = repaired;
            locator
        })
        .collect()
}

/// Drops steps whose text repeats an earlier step, keeping first positions.
pub fn dedup_steps(steps: Vec<Step>) -> Vec<Step> {
    let mut seen = HashSet::new();
    steps
        .into_iter()
        .filter(|step| seen.insert(step.text.clone()))
        .collect()
}
