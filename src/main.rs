use anyhow::Result;
use clap::Parser;
use lexiscreen::cli::{Cli, Commands, OutputFormat};
use lexiscreen::commands::{init_config, print_phrases, run_assess, AssessConfig};
use lexiscreen::io;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            scores,
            format,
            output,
        } => run_assess(AssessConfig {
            scores_path: scores,
            format: convert_output_format(format),
            output,
        }),
        Commands::Phrases { age } => print_phrases(age),
        Commands::Init { force } => init_config(force),
    }
}

fn convert_output_format(format: OutputFormat) -> io::OutputFormat {
    match format {
        OutputFormat::Terminal => io::OutputFormat::Terminal,
        OutputFormat::Json => io::OutputFormat::Json,
        OutputFormat::Markdown => io::OutputFormat::Markdown,
    }
}
