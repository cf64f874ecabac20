mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{load_config, Cli};
use log::info;
use renderer::TerminalRenderer;
use storyplan_core::PlanCompilerBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        config,
        enhanced,
        command,
    } = Args::parse();

    let config = load_config(config.as_deref(), enhanced)?;
    let compiler = PlanCompilerBuilder::new()
        .with_config(config)
        .build()
        .context("Failed to initialize compiler")?;
    info!("Using {} analysis", compiler.analysis());

    let cli = Cli::new(compiler, TerminalRenderer::new(!no_color));

    match command {
        Commands::Compile(args) => cli.compile(&args).await,
        Commands::Validate(args) => cli.validate(&args).await,
    }
}
