//! Data models for compiled test plans.
//!
//! A [`Plan`] is built once per compilation and never mutated afterwards. It
//! owns its [`Step`]s, [`Locator`]s and [`Scenario`]s outright; the main
//! scenario holds a copy of the plan-level steps so that consumers can treat
//! every scenario uniformly.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that data structures and presentation stay
//! apart.
//!
//! # Examples
//!
//! ```rust
//! use storyplan_core::models::{Keyword, Step, StepKind};
//!
//! let step = Step::new(Keyword::When, "I click the login button", StepKind::Action);
//! assert_eq!(step.to_string(), "When I click the login button\n");
//! ```

pub mod kinds;
pub mod locator;
pub mod plan;
pub mod step;


pub use kinds::{Complexity, Confidence, ElementType, Keyword, ScenarioKind, StepKind, StoryOrigin};
pub use locator::Locator;
pub use plan::{Metadata, Plan, Scenario, UserStory};
pub use step::Step;
