//! Display implementation for validation reports.

use std::fmt;

use crate::validate::ValidationReport;

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            writeln!(f, "Success: plan is valid")?;
        } else {
            writeln!(f, "Error: plan has {} error(s)", self.errors.len())?;
        }

        for (title, items) in [
            ("Errors", &self.errors),
            ("Warnings", &self.warnings),
            ("Suggestions", &self.suggestions),
        ] {
            if items.is_empty() {
                continue;
            }
            writeln!(f, "\n## {title}")?;
            writeln!(f)?;
            for item in items {
                writeln!(f, "- {item}")?;
            }
        }
        Ok(())
    }
}
