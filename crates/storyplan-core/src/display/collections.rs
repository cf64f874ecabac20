//! Collection wrapper types for displaying groups of compiled plans.

use std::fmt;

use crate::models::Plan;

/// Newtype wrapper for displaying the plans of a batch compilation.
///
/// Plans are separated by a horizontal rule. Handles empty collections
/// gracefully.
///
/// # Examples
///
/// ```rust
/// use storyplan_core::{display::Plans, CreatePlan, PlanCompilerBuilder};
///
/// let compiler = PlanCompilerBuilder::new().build().unwrap();
/// let plan = compiler
///     .compile(&CreatePlan::new("I click the search button", "Search"))
///     .unwrap();
///
/// let output = Plans(vec![plan]).to_string();
/// assert!(output.contains("# Feature: Search"));
/// ```
pub struct Plans(pub Vec<Plan>);

impl fmt::Display for Plans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans compiled.");
        }
        for (i, plan) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f, "\n---\n")?;
            }
            write!(f, "{plan}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plans_display() {
        let plans = Plans(Vec::new());
        assert_eq!(plans.to_string(), "No plans compiled.\n");
    }

    #[test]
    fn test_plans_are_separated_by_rule() {
        let compiler = crate::PlanCompilerBuilder::new()
            .build()
            .expect("Failed to create compiler");
        let first = compiler
            .create_plan("I click the login button", "Login")
            .expect("Failed to compile");
        let second = compiler
            .create_plan("I open the search page", "Search")
            .expect("Failed to compile");

        let output = Plans(vec![first, second]).to_string();
        let login = output.find("# Feature: Login").expect("login plan");
        let rule = output.find("\n---\n").expect("separator");
        let search = output.find("# Feature: Search").expect("search plan");
        assert!(login < rule && rule < search);
    }
}
