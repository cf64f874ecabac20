//! Parameter structures for compiler operations.
//!
//! These structures carry no framework-specific derives so they can be shared
//! by every interface around the core. The CLI wraps them in its own clap
//! argument types and converts with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  PlanCompiler   │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   ::compile     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

/// Parameters for compiling one document into a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePlan {
    /// Raw narrative text (user story, ticket description, transcript)
    pub text: String,
    /// Feature name; sanitized before it lands in the plan
    pub feature_name: String,
}

impl CreatePlan {
    pub fn new(text: impl Into<String>, feature_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            feature_name: feature_name.into(),
        }
    }
}
