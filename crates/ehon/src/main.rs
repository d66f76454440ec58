//! Ehon CLI binary.
//!
//! Generates an illustrated storybook from a one-line idea and exports it
//! as a PDF.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, list_options, run_generate};

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate(args) => {
            run_generate(args).await?;
        }

        Commands::Options => {
            list_options();
        }
    }

    Ok(())
}
