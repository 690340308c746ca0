//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// miniagent - sandboxed tool-calling agent
#[derive(Parser)]
#[command(
    name = "miniagent",
    about = "Send a prompt to a remote model that can use sandboxed local tools",
    version
)]
pub struct Cli {
    /// Prompt to send to the model
    #[arg(value_name = "PROMPT", required = true, num_args = 1..)]
    pub prompt: Vec<String>,

    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Working directory the agent is sandboxed to
    #[arg(short = 'C', long = "working-dir")]
    pub working_dir: Option<PathBuf>,

    /// Print token counts, tool-call arguments and tool results
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Prompt words joined into the single user message
    pub fn prompt_text(&self) -> String {
        self.prompt.join(" ")
    }
}
