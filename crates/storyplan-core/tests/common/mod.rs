use jiff::Timestamp;
use storyplan_core::{PlanCompiler, PlanCompilerBuilder};

/// Narratives covering the main input shapes the compiler sees.
pub const NARRATIVES: &[&str] = &[
    "As a registered user, I want to login using my email and password, so that I can access my dashboard.",
    "1. The user is on the home page.\n2. Alex clicks the payroll menu.\n3. User can run payroll.\n4. The user sees the payroll running status.",
    "- open the search page\n- type 'red shoes' into the search box\n- press enter\n- I see a list of products",
    "Given I am logged in\nAnd I am on the settings page\nWhen I click save\nThen I see a confirmation",
    "// internal note\nsrc/steps/login.js",
    "The customer adds a hat to the cart, and the customer continues to checkout. I see the order summary.",
    "Nothing here is actionable at all",
];

/// Helper function to create a compiler with a fixed clock
pub fn create_test_compiler() -> PlanCompiler {
    let timestamp: Timestamp = "2025-01-15T10:30:00Z".parse().expect("valid timestamp");
    PlanCompilerBuilder::new()
        .with_timestamp(timestamp)
        .build()
        .expect("Failed to create compiler")
}
