//! Narrative-to-plan compiler.
//!
//! This module provides the main [`PlanCompiler`] interface. A compilation is
//! a pure function of the input text and feature name: every stage takes an
//! immutable intermediate value and returns the next one.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//! │   segment   │──▶│  narrative  │──▶│  validity   │──▶│  classify   │
//! │ lines/noise │   │ first person│   │   filter    │   │  keywords   │
//! └─────────────┘   └─────────────┘   └─────────────┘   └──────┬──────┘
//!                                                              ▼
//! ┌─────────────┐   ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//! │    Plan     │◀──│  locators   │◀──│ story/naming│◀──│ dedup/repair│
//! │  assembly   │   │ + repair    │   │  + scaffold │   │             │
//! └─────────────┘   └─────────────┘   └─────────────┘   └─────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`PlanCompiler`] instances with configuration
//! - [`tables`]: Ordered lookup tables shared by the stages
//! - [`segment`]: Line splitting and noise filtering
//! - [`narrative`]: Third-person prose to first-person action fragments
//! - [`validity`]: Rejection of fragments that cannot be steps
//! - [`classify`]: Keyword assignment and keyword-flow repair
//! - [`repair`]: Selector repair and step de-duplication
//! - [`locators`]: Locator inference from keywords and quoted literals
//! - [`story`]: User-story inference and tags
//! - [`naming`]: Feature and scenario names
//! - [`scenarios`]: Explicit scenario blocks and the fallback scaffold
//! - [`metadata`]: Word count and complexity
//! - [`annotate`]: The [`Annotator`] seam and its implementations
//!
//! # Usage
//!
//! ```rust
//! use storyplan_core::{PlanCompilerBuilder, params::CreatePlan};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let compiler = PlanCompilerBuilder::new().build()?;
//!
//! let plan = compiler.compile(&CreatePlan::new(
//!     "The user opens the home page and clicks 'Sign in'.",
//!     "Sign in",
//! ))?;
//! assert!(!plan.steps.is_empty());
//! assert!(plan.locator("textElement1").is_some());
//! # Ok(())
//! # }
//! ```

use jiff::Timestamp;

pub mod annotate;
pub mod builder;
pub mod classify;
pub mod locators;
pub mod metadata;
pub mod naming;
pub mod narrative;
pub mod repair;
pub mod scenarios;
pub mod segment;
pub mod story;
pub mod tables;
pub mod validity;


pub use annotate::{Annotator, EnhancedAnnotator, HeuristicAnnotator};
pub use builder::PlanCompilerBuilder;

use crate::{
    config::CompilerConfig,
    error::{PlanError, Result},
    models::{Metadata, Plan, Scenario, ScenarioKind, Step, UserStory},
    params::CreatePlan,
};

/// Compiles narrative text into test plans.
///
/// Holds only immutable configuration, so one instance can be shared across
/// threads and used for any number of documents.
#[derive(Debug)]
pub struct PlanCompiler {
    config: CompilerConfig,
    annotator: Box<dyn Annotator>,
    timestamp: Option<Timestamp>,
}

impl PlanCompiler {
    pub(crate) fn new(
        config: CompilerConfig,
        annotator: Box<dyn Annotator>,
        timestamp: Option<Timestamp>,
    ) -> Self {
        Self {
            config,
            annotator,
            timestamp,
        }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Name of the annotator in use.
    pub fn analysis(&self) -> &'static str {
        self.annotator.name()
    }

    /// Compiles one document into a plan.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EmptyInput` if the text is empty or whitespace.
    /// Every other irregularity of the text degrades to a fallback.
    pub fn compile(&self, params: &CreatePlan) -> Result<Plan> {
        let text = params.text.as_str();
        if text.trim().is_empty() {
            return Err(PlanError::EmptyInput);
        }

        let feature_name = naming::sanitize_feature_name(&params.feature_name);
        let steps = self.extract_steps(text);

        let story = story::infer_story(text, &steps, self.annotator.as_ref());
        let (steps, scenario_name, kind) = if steps.is_empty() {
            log::warn!("No steps extracted for '{feature_name}', using the generated scaffold");
            let name = format!("{} {}", story.actor, story.action);
            (scenarios::scaffold(&story), name, ScenarioKind::Generated)
        } else {
            let name = naming::scenario_name(text, &steps, &story);
            (steps, name, ScenarioKind::Main)
        };

        let locators = repair::repair_locators(locators::infer_locators(text, &steps));
        let tags = story::extract_tags(text, &steps);
        let scenarios = Self::assemble_scenarios(text, &scenario_name, &steps, kind);
        let metadata = self.metadata(text, kind == ScenarioKind::Generated);

        log::info!(
            "Compiled '{}': {} steps, {} locators, {} scenarios",
            feature_name,
            steps.len(),
            locators.len(),
            scenarios.len()
        );

        Ok(Plan {
            feature_name,
            scenario_name,
            user_story: story,
            tags,
            locators,
            steps,
            scenarios,
            metadata,
        })
    }

    /// Compiles `text` under `feature_name`.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EmptyInput` if the text is empty or whitespace.
    pub fn create_plan(&self, text: &str, feature_name: &str) -> Result<Plan> {
        self.compile(&CreatePlan::new(text, feature_name))
    }

    /// Infers the user story without compiling a full plan.
    pub fn infer_story(&self, text: &str) -> UserStory {
        story::infer_story(text, &[], self.annotator.as_ref())
    }

    fn extract_steps(&self, text: &str) -> Vec<Step> {
        let lines = segment::segment(text, self.config.min_line_length);
        log::debug!("Segmented {} candidate lines", lines.len());

        let fragments = narrative::convert(&lines);
        log::debug!("Converted into {} action fragments", fragments.len());

        let fragments = validity::retain_valid(fragments, self.config.min_step_length);
        let steps = repair::dedup_steps(classify::classify(&fragments));
        log::debug!("Classified {} unique steps", steps.len());

        classify::repair_keywords(steps)
    }

    fn assemble_scenarios(
        text: &str,
        name: &str,
        steps: &[Step],
        kind: ScenarioKind,
    ) -> Vec<Scenario> {
        let main = Scenario {
            name: name.to_string(),
            steps: steps.to_vec(),
            kind,
        };
        let explicit = scenarios::parse_scenario_blocks(text);
        if !explicit.is_empty() {
            log::debug!("Parsed {} explicit scenario blocks", explicit.len());
        }
        std::iter::once(main).chain(explicit).collect()
    }

    fn metadata(&self, text: &str, fallback: bool) -> Metadata {
        Metadata {
            analysis: self.annotator.name().to_string(),
            complexity: metadata::complexity(text),
            word_count: metadata::word_count(text),
            fallback,
            timestamp: self.timestamp.unwrap_or_else(Timestamp::now),
        }
    }
}

/// Compiles `text` with a default compiler.
///
/// # Errors
///
/// Returns `PlanError::EmptyInput` if the text is empty or whitespace.
pub fn create_plan(text: &str, feature_name: &str) -> Result<Plan> {
    PlanCompilerBuilder::new()
        .build()?
        .create_plan(text, feature_name)
}
