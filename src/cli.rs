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
    /// Markdown document
    Markdown,
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
    name = "texture",
    about = "Emotional texture analysis beyond simple sentiment",
    version,
    after_help = "Logs are written to: ~/.local/share/texture/logs/texture.log\n\nExamples:\n  texture analyze \"I'm so grateful for this moment with my team\"\n  texture scan --db-path ./data/comms.db --sender FORGE\n  texture dimensions -o markdown"
)]
pub struct Cli {
    /// Path to config file
    #[arg(long, global = true, help = "Path to texture.yaml config file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one text for emotional texture
    Analyze {
        /// Text to analyze (reads stdin if omitted)
        text: Option<String>,

        /// Context label (e.g. agent name)
        #[arg(long, short = 'c')]
        context: Option<String>,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Scan the message database and aggregate emotional texture
    Scan {
        /// Path to the SQLite message database (overrides store.path)
        #[arg(long)]
        db_path: Option<PathBuf>,

        /// Max messages to analyze (default: store.limit)
        #[arg(long, short = 'l')]
        limit: Option<usize>,

        /// Only messages from this sender
        #[arg(long, short = 's')]
        sender: Option<String>,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Aggregate a JSON array of messages
    Batch {
        /// JSON file with [{content, sender, timestamp}] (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Build per-agent emotional profiles from the message database
    Profile {
        /// Path to the SQLite message database (overrides store.path)
        #[arg(long)]
        db_path: Option<PathBuf>,

        /// Max messages to read (default: store.limit)
        #[arg(long, short = 'l')]
        limit: Option<usize>,

        /// Only show this agent's profile
        #[arg(long, short = 'a')]
        agent: Option<String>,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the emotional dimensions
    Dimensions {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },
}
