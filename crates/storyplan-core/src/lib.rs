//! Core library for the Storyplan test-plan compiler.
//!
//! This crate turns free-form narrative text (user stories, ticket
//! descriptions, recorded-action transcripts) into a structured [`Plan`]:
//! ordered Given/When/Then steps, inferred UI locators, a user story, tags and
//! diagnostic metadata. Compilation is deterministic and rule based; the only
//! error it raises is [`PlanError::EmptyInput`].
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] as
//!   markdown
//! - **Display Wrappers** ([`display`]): Batch and report formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use storyplan_core::{PlanCompilerBuilder, PlanValidator, params::CreatePlan};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let compiler = PlanCompilerBuilder::new().build()?;
//!
//! let plan = compiler.compile(&CreatePlan::new(
//!     "As a registered user, I want to login using my email and password, \
//!      so that I can access my dashboard.",
//!     "User Login",
//! ))?;
//! assert_eq!(plan.user_story.actor, "registered user");
//! println!("{plan}");
//!
//! let report = PlanValidator::new().validate(&plan);
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod compiler;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod validate;

// Re-export commonly used types
pub use compiler::{
    create_plan, Annotator, EnhancedAnnotator, HeuristicAnnotator, PlanCompiler,
    PlanCompilerBuilder,
};
pub use config::CompilerConfig;
pub use display::{LocalDateTime, Plans};
pub use error::{PlanError, Result};
pub use models::{
    Complexity, Confidence, ElementType, Keyword, Locator, Metadata, Plan, Scenario,
    ScenarioKind, Step, StepKind, StoryOrigin, UserStory,
};
pub use params::CreatePlan;
pub use validate::{PlanValidator, ValidationReport};
