//! Command-line argument definitions using clap.
//!
//! The argument structures carry every clap-specific attribute; the handlers
//! in [`crate::cli`] turn them into core [`CreatePlan`] parameters so the
//! core crate stays free of framework derives.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use storyplan_core::params::CreatePlan;

/// Feature name used when neither `--feature` nor a file stem is available.
pub const DEFAULT_FEATURE: &str = "Feature";

/// Compile narrative user stories into structured Gherkin test plans
///
/// Storyplan reads free-form text such as user stories, ticket descriptions
/// or recorded-action transcripts and prints a test plan with ordered
/// Given/When/Then steps, inferred UI locators and a user-story summary.
#[derive(Parser)]
#[command(version, about, name = "storyplan")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/storyplan/config.json when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Let the enhanced annotator propose user stories
    #[arg(long, global = true)]
    pub enhanced: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Storyplan CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Compile narratives into test plans
    #[command(alias = "c")]
    Compile(CompileArgs),
    /// Compile narratives and report validation findings
    #[command(alias = "v")]
    Validate(InputArgs),
}

/// Where the narrative text comes from
///
/// Files take precedence, then `--text`; with neither, stdin is read.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Files containing narrative text, compiled concurrently
    pub files: Vec<PathBuf>,

    /// Narrative text given inline
    #[arg(short, long, conflicts_with = "files")]
    pub text: Option<String>,

    /// Feature name, defaults to the file stem or "Feature"
    #[arg(short, long)]
    pub feature: Option<String>,
}

impl InputArgs {
    /// Feature name for a document read from `path`.
    pub fn feature_for(&self, path: &Path) -> String {
        self.feature.clone().unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_FEATURE.to_string())
        })
    }

    /// Core parameters for a document that is not backed by a file.
    pub fn params_for(&self, text: String) -> CreatePlan {
        let feature = self
            .feature
            .clone()
            .unwrap_or_else(|| DEFAULT_FEATURE.to_string());
        CreatePlan::new(text, feature)
    }
}

/// Compile narratives into test plans
#[derive(clap::Args)]
pub struct CompileArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print plans as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}
