use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "commviz")]
#[command(about = "Animated diagrams of data communication concepts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml, progress.json and commviz.log
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a topic's diagram (interactive when stdout is a terminal)
    Show {
        /// encryption, encoding, modulation or multiplexing
        topic: Option<String>,

        /// Start the animation immediately
        #[arg(long)]
        play: bool,

        /// Milliseconds between animation steps
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Full cycles to print when not attached to a terminal (0 = until Ctrl+C)
        #[arg(long, default_value = "1")]
        cycles: u32,
    },

    /// List topics with difficulty, duration and completion
    List,

    /// Print a topic's diagram values and notes
    Describe { topic: String },

    /// Toggle a topic's completion mark
    Complete { topic: String },

    /// Show how many topics are complete
    Progress,

    /// Ask the guide which topic covers a question
    Ask {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Write a default config.toml to the data directory
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}
