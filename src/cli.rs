use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "autoagent",
    about = "Bootstrap an autonomous agent's identity: name, role, goals and budget",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/autoagent/logs/autoagent.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to autoagent.yaml config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create or resume the agent identity
    Setup {
        /// Reuse a stored identity without asking
        #[arg(long)]
        skip_reprompt: bool,

        /// Identity settings file (overrides config)
        #[arg(long)]
        ai_settings: Option<PathBuf>,

        /// Model used to synthesize the identity (overrides config)
        #[arg(long)]
        model: Option<String>,
    },

    /// Show the stored identity
    Show {
        /// Identity settings file (overrides config)
        #[arg(long)]
        ai_settings: Option<PathBuf>,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the full operating prompt for the stored identity
    Prompt {
        /// Identity settings file (overrides config)
        #[arg(long)]
        ai_settings: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
