//! Builder for creating and configuring PlanCompiler instances.

use jiff::Timestamp;

use super::{
    annotate::{Annotator, EnhancedAnnotator, HeuristicAnnotator},
    PlanCompiler,
};
use crate::{config::CompilerConfig, error::Result};

/// Builder for creating and configuring PlanCompiler instances.
#[derive(Debug, Default)]
pub struct PlanCompilerBuilder {
    config: CompilerConfig,
    annotator: Option<Box<dyn Annotator>>,
    timestamp: Option<Timestamp>,
}

impl PlanCompilerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: CompilerConfig) -> Self {
        self.config = config;
        self
    }

    /// Selects the enhanced annotator instead of the heuristic one.
    pub fn enhanced(mut self, enhanced: bool) -> Self {
        self.config.enhanced = enhanced;
        self
    }

    /// Injects a custom annotator, overriding the `enhanced` setting.
    pub fn with_annotator(mut self, annotator: Box<dyn Annotator>) -> Self {
        self.annotator = Some(annotator);
        self
    }

    /// Stamps every compiled plan with a fixed time.
    ///
    /// Without it, plans carry the time of compilation.
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Builds the configured compiler instance.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` if a configured threshold is zero
    pub fn build(self) -> Result<PlanCompiler> {
        self.config.validate()?;

        let annotator: Box<dyn Annotator> = match self.annotator {
            Some(annotator) => annotator,
            None if self.config.enhanced => Box::new(EnhancedAnnotator),
            None => Box::new(HeuristicAnnotator),
        };
        log::debug!("Building plan compiler with {} annotator", annotator.name());

        Ok(PlanCompiler::new(self.config, annotator, self.timestamp))
    }
}
