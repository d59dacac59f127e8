use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal report
    Terminal,
    /// Machine-readable JSON report
    Json,
    /// Markdown report
    Markdown,
}

#[derive(Parser, Debug)]
#[command(name = "lexiscreen")]
#[command(about = "Dyslexia screening assessment engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the cumulative assessment over a scores file
    Assess {
        /// Path to a JSON file mapping each sub-test to its normalized score
        scores: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print age-appropriate dictation phrases
    Phrases {
        /// Age of the student (0-21)
        #[arg(long)]
        age: u32,
    },

    /// Initialize a lexiscreen configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
