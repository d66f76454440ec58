//! Storybook generation command handler.

use crate::cli::GenerateArgs;
use ehon_core::{ArtStyle, GenerationRequest, ImageData, PageCount, Theme};
use ehon_export::{IllustrationRenderer, SkipPolicy, export_story};
use ehon_interface::{PipelineStage, ProgressObserver};
use ehon_models::GeminiClient;
use ehon_pipeline::{ImagePolicy, Orchestrator, StorySession};
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::info;

/// Reports pipeline progress to the log as stages change.
struct ConsoleObserver;

impl ProgressObserver for ConsoleObserver {
    fn stage(&self, stage: PipelineStage) {
        info!("{stage}");
    }
}

fn reference_image(path: &Path) -> Result<ImageData, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;
    let mime = match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "image/png",
    };
    Ok(ImageData::new(mime, bytes))
}

/// Generate a storybook from the command-line arguments and write the PDF.
pub async fn run_generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let page_count = PageCount::try_from(args.pages)?;
    let mut builder = GenerationRequest::builder();
    builder
        .idea(args.idea)
        .theme(args.theme)
        .art_style(args.style)
        .page_count(page_count);
    if let Some(path) = &args.reference {
        builder.reference_image(reference_image(path)?);
    }
    let request = builder.build()?;

    let client = GeminiClient::from_env()?;
    let policy = if args.parallel_images {
        ImagePolicy::Parallel
    } else {
        ImagePolicy::Sequential
    };
    let orchestrator = Orchestrator::new(client.clone(), client).with_policy(policy);
    let mut session = StorySession::new(orchestrator);

    let story = session.generate(&request, &ConsoleObserver).await?;
    info!(title = %story.title(), pages = story.pages().len(), "story complete");

    let skip = if args.strict_export {
        SkipPolicy::AbortOnError
    } else {
        SkipPolicy::SkipFailed
    };
    let renderer = match &args.font {
        Some(path) => IllustrationRenderer::with_font(&std::fs::read(path)?)?,
        None => IllustrationRenderer::new()?,
    };
    let pdf = export_story(&story, &renderer, skip)?;
    std::fs::write(&args.out, &pdf)?;
    info!(path = %args.out.display(), bytes = pdf.len(), "exported storybook");
    Ok(())
}

/// Print the accepted themes, styles, and page counts.
pub fn list_options() {
    println!("themes:");
    for theme in Theme::iter() {
        println!("  {theme}");
    }
    println!("styles:");
    for style in ArtStyle::iter() {
        println!("  {style}");
    }
    println!("pages:");
    for count in PageCount::iter() {
        println!("  {count}");
    }
}
