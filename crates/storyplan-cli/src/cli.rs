//! Command handlers for the Storyplan CLI.
//!
//! Each handler resolves its input documents, compiles them through the
//! shared [`PlanCompiler`] and hands the output to the terminal renderer.
//! File inputs are compiled concurrently, one blocking task per document,
//! and results are reported in the order the files were given.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{bail, Context, Result};
use log::{debug, info};
use storyplan_core::{CompilerConfig, Plan, PlanCompiler, PlanError, PlanValidator, Plans};
use tokio::{io::AsyncReadExt, task::JoinHandle};

use crate::{
    args::{CompileArgs, InputArgs},
    renderer::TerminalRenderer,
};

/// Resolves the compiler configuration for this invocation.
///
/// An explicit `--config` path wins over the XDG location; `--enhanced`
/// overrides whatever the file says.
pub fn load_config(path: Option<&Path>, enhanced: bool) -> Result<CompilerConfig> {
    let path = path.map(Path::to_path_buf).or_else(CompilerConfig::discover);
    let mut config = match path {
        Some(path) => CompilerConfig::from_file(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => CompilerConfig::default(),
    };
    if enhanced {
        config.enhanced = true;
    }
    Ok(config)
}

pub struct Cli {
    compiler: Arc<PlanCompiler>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(compiler: PlanCompiler, renderer: TerminalRenderer) -> Self {
        Self {
            compiler: Arc::new(compiler),
            renderer,
        }
    }

    pub async fn compile(&self, args: &CompileArgs) -> Result<()> {
        let plans = self.compile_inputs(&args.input).await?;

        if args.json {
            let json = match plans.as_slice() {
                [plan] => serde_json::to_string_pretty(plan),
                _ => serde_json::to_string_pretty(&plans),
            }
            .context("Failed to serialize plans")?;
            println!("{json}");
            return Ok(());
        }

        let markdown = match plans.as_slice() {
            [plan] => plan.to_string(),
            _ => Plans(plans).to_string(),
        };
        self.renderer.render(&markdown)
    }

    pub async fn validate(&self, args: &InputArgs) -> Result<()> {
        let plans = self.compile_inputs(args).await?;
        let validator = PlanValidator::new();

        let mut failed = 0;
        for plan in &plans {
            let report = validator.validate(plan);
            if !report.is_valid() {
                failed += 1;
            }
            self.renderer
                .render(&format!("# Feature: {}\n\n{report}\n", plan.feature_name))?;
        }

        if failed > 0 {
            bail!("{failed} of {} plan(s) failed validation", plans.len());
        }
        Ok(())
    }

    /// Compiles every document named by `input`, preserving input order.
    pub async fn compile_inputs(&self, input: &InputArgs) -> Result<Vec<Plan>> {
        if !input.files.is_empty() {
            return self.compile_files(input).await;
        }

        let text = match &input.text {
            Some(text) => text.clone(),
            None => read_stdin().await?,
        };
        let plan = self
            .compiler
            .compile(&input.params_for(text))
            .context("Failed to compile narrative")?;
        Ok(vec![plan])
    }

    async fn compile_files(&self, input: &InputArgs) -> Result<Vec<Plan>> {
        let handles: Vec<(PathBuf, JoinHandle<storyplan_core::Result<Plan>>)> = input
            .files
            .iter()
            .map(|path| {
                let compiler = Arc::clone(&self.compiler);
                let feature = input.feature_for(path);
                let task_path = path.clone();
                let handle = tokio::task::spawn_blocking(move || {
                    let text = std::fs::read_to_string(&task_path).map_err(|e| {
                        PlanError::FileSystem {
                            path: task_path.clone(),
                            source: e,
                        }
                    })?;
                    compiler.create_plan(&text, &feature)
                });
                (path.clone(), handle)
            })
            .collect();
        info!("Compiling {} file(s)", handles.len());

        let mut plans = Vec::with_capacity(handles.len());
        for (path, handle) in handles {
            let plan = handle
                .await
                .context("Compilation task failed")?
                .with_context(|| format!("Failed to compile {}", path.display()))?;
            debug!("Compiled {} into {} step(s)", path.display(), plan.steps.len());
            plans.push(plan);
        }
        Ok(plans)
    }
}

async fn read_stdin() -> Result<String> {
    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .context("Failed to read narrative from stdin")?;
    Ok(text)
}
