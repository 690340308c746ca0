//! miniagent - CLI entry point

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use miniagent::agent::Agent;
use miniagent::cli::Cli;
use miniagent::config::Config;
use miniagent::llm;
use miniagent::tools::{ToolContext, ToolExecutor};

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("miniagent")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Write to a log file, not stdout - stdout belongs to the conversation
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("miniagent.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Validate the API key early - before any model interaction
    config.validate()?;

    // Resolve the sandbox root: CLI flag, then config, then cwd
    let working_dir = match cli.working_dir.clone().or_else(|| config.agent.working_directory.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let working_dir = working_dir
        .canonicalize()
        .context(format!("Working directory not found: {}", working_dir.display()))?;

    info!(
        "miniagent starting: model={}, working_dir={}",
        config.llm.model,
        working_dir.display()
    );

    let llm_client = llm::create_client(&config.llm).context("Failed to create LLM client")?;
    let tools = ToolExecutor::standard(&config.agent);
    let ctx = ToolContext::new(working_dir);

    let mut agent = Agent::new(llm_client, tools, ctx, &config).with_verbose(cli.verbose);

    let answer = agent.run(&cli.prompt_text()).await?;

    println!("Final response:");
    println!("{}", answer);

    Ok(())
}
