//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use ehon_core::{ArtStyle, Theme};
use std::path::PathBuf;

/// Ehon - illustrated storybook synthesis from a one-line idea
#[derive(Parser, Debug)]
#[command(name = "ehon")]
#[command(about = "Generate an illustrated children's storybook as a PDF", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a storybook and export it as a PDF
    Generate(GenerateArgs),

    /// List the accepted themes, art styles, and page counts
    Options,
}

/// Arguments for the generate command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// One-line story idea
    #[arg(long)]
    pub idea: String,

    /// Narrative theme
    #[arg(long, default_value = "adventure")]
    pub theme: Theme,

    /// Illustration style
    #[arg(long, default_value = "watercolor")]
    pub style: ArtStyle,

    /// Number of story pages (4, 6, or 8)
    #[arg(long, default_value = "4")]
    pub pages: u32,

    /// Reference drawing of the main character (png, jpeg, or webp)
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// Generate page illustrations concurrently instead of in reading order
    #[arg(long)]
    pub parallel_images: bool,

    /// Fail the export on the first page that cannot be captured
    #[arg(long)]
    pub strict_export: bool,

    /// TTF or OTF face for printed text (the built-in face covers Latin
    /// only; pass a CJK face such as Noto Sans JP for Japanese stories)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Output PDF path
    #[arg(long, default_value = "book.pdf")]
    pub out: PathBuf,
}
