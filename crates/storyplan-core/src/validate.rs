//! Consumer-side validation of compiled plans.
//!
//! The compiler already guarantees the structural invariants of a [`Plan`];
//! the validator re-checks them from the outside and adds the softer advice
//! that downstream renderers care about (long step text, raw selectors,
//! oversized scenarios). Violations of hard invariants are errors, everything
//! else is a warning or a suggestion.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    compiler::repair::is_accessor,
    models::{Keyword, Plan},
};

const MAX_FEATURE_NAME_LEN: usize = 100;
const MAX_STEP_TEXT_LEN: usize = 200;
const MAX_SCENARIO_STEPS: usize = 10;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*$").expect("IDENTIFIER regex should compile"));

/// Outcome of validating a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ValidationReport {
    /// True when no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Stateless plan validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanValidator;

impl PlanValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates a plan, collecting errors, warnings and suggestions.
    pub fn validate(&self, plan: &Plan) -> ValidationReport {
        let mut report = ValidationReport::default();

        Self::check_names(plan, &mut report);
        Self::check_locators(plan, &mut report);
        Self::check_steps(plan, &mut report);

        if report.is_valid() {
            Self::suggest(plan, &mut report);
        }
        report
    }

    fn check_names(plan: &Plan, report: &mut ValidationReport) {
        if plan.feature_name.trim().is_empty() {
            report.errors.push("Feature name cannot be empty".to_string());
        }
        if plan.feature_name.len() > MAX_FEATURE_NAME_LEN {
            report
                .warnings
                .push("Feature name is very long, consider shortening it".to_string());
        }
        if plan
            .feature_name
            .chars()
            .any(|c| matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*'))
        {
            report.warnings.push(
                "Feature name contains characters that may cause file system issues".to_string(),
            );
        }
        if plan.scenario_name.trim().is_empty() {
            report.errors.push("Scenario name cannot be empty".to_string());
        }
    }

    fn check_locators(plan: &Plan, report: &mut ValidationReport) {
        if plan.locators.is_empty() {
            report
                .warnings
                .push("No locators defined - test may be incomplete".to_string());
            return;
        }

        let mut names = HashSet::new();
        for (index, locator) in plan.locators.iter().enumerate() {
            if locator.name.is_empty() {
                report
                    .errors
                    .push(format!("Locator {index}: Missing required field 'name'"));
            } else {
                if !names.insert(locator.name.as_str()) {
                    report
                        .errors
                        .push(format!("Duplicate locator name: {}", locator.name));
                }
                if !IDENTIFIER.is_match(&locator.name) {
                    report.warnings.push(format!(
                        "Locator name '{}' should be a valid identifier",
                        locator.name
                    ));
                }
            }

            if locator.selector.is_empty() {
                report
                    .errors
                    .push(format!("Locator {index}: Missing required field 'selector'"));
            } else if !is_accessor(&locator.selector) {
                report.warnings.push(format!(
                    "Locator {index}: Selector may not be a valid accessor expression"
                ));
            }
        }
    }

    fn check_steps(plan: &Plan, report: &mut ValidationReport) {
        if plan.steps.is_empty() {
            report
                .errors
                .push("At least one step must be defined".to_string());
            return;
        }

        if plan.steps[0].keyword == Keyword::And {
            report
                .errors
                .push("Step 0: The first step cannot use 'And'".to_string());
        }

        let mut seen = HashSet::new();
        for (index, step) in plan.steps.iter().enumerate() {
            if step.text.trim().is_empty() {
                report
                    .errors
                    .push(format!("Step {index}: Missing required field 'text'"));
            }
            if !seen.insert(step.text.as_str()) {
                report
                    .errors
                    .push(format!("Step {index}: Duplicate step text '{}'", step.text));
            }
            if step.text.len() > MAX_STEP_TEXT_LEN {
                report.warnings.push(format!(
                    "Step {index}: Step text is very long, consider breaking it down"
                ));
            }
        }

        for (index, pair) in plan.steps.windows(2).enumerate() {
            if pair[0].keyword == Keyword::Given && pair[1].keyword == Keyword::Given {
                report.errors.push(format!(
                    "Step {}: Consecutive 'Given' steps should use 'And'",
                    index + 1
                ));
            }
        }

        if !plan.steps.iter().any(|s| s.keyword == Keyword::Given) {
            report
                .warnings
                .push("No Given step found - consider adding setup steps".to_string());
        }
        if !plan
            .steps
            .iter()
            .any(|s| matches!(s.keyword, Keyword::When | Keyword::Then))
        {
            report
                .warnings
                .push("No When or Then steps found - test may be incomplete".to_string());
        }
    }

    fn suggest(plan: &Plan, report: &mut ValidationReport) {
        if plan.steps.len() > MAX_SCENARIO_STEPS {
            report.suggestions.push(
                "Consider breaking this scenario into multiple smaller scenarios".to_string(),
            );
        }

        let raw = plan
            .locators
            .iter()
            .filter(|l| l.selector.starts_with("locator("))
            .count();
        if raw * 2 > plan.locators.len() {
            report.suggestions.push(
                "Consider using more semantic selectors (getByRole, getByLabel) instead of raw CSS selectors"
                    .to_string(),
            );
        }
    }
}
