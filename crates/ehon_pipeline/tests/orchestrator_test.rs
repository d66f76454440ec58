// Orchestrator behavior against scripted synthesizers: pipeline ordering,
// consistency invariants, policy variants, and failure propagation.

mod test_utils;

use ehon_core::{ArtStyle, GenerationRequest, PageCount, Theme};
use ehon_error::EhonErrorKind;
use ehon_interface::{NullObserver, PipelineStage};
use ehon_pipeline::{ImagePolicy, Orchestrator};
use test_utils::{MockImage, MockText, RecordingObserver, Scripted, draft_json};

fn request(pages: u32) -> GenerationRequest {
    GenerationRequest::builder()
        .idea("a cat named Sora visits the moon")
        .theme(Theme::Adventure)
        .art_style(ArtStyle::Watercolor)
        .page_count(PageCount::try_from(pages).unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn full_generation_produces_a_complete_story() -> anyhow::Result<()> {
    let text = MockText::new([Scripted::Ok(draft_json(4))]);
    let image = MockImage::new();
    let orchestrator = Orchestrator::new(text, image);

    let story = orchestrator.generate(&request(4), &NullObserver).await?;

    assert!(!story.title().is_empty());
    assert_eq!(story.pages().len(), 4);
    assert!(!story.cover_image().is_empty());
    assert!(!story.afterword().is_empty());
    for page in story.pages() {
        assert!(!page.image().is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn every_image_prompt_carries_character_and_style() -> anyhow::Result<()> {
    let text = MockText::new([Scripted::Ok(draft_json(4))]);
    let image = MockImage::new();
    let orchestrator = Orchestrator::new(text, image);

    let story = orchestrator.generate(&request(4), &NullObserver).await?;

    let character = story.character_description();
    let style_token = story.art_style().prompt_token();
    for page in story.pages() {
        let prompt = page.image_prompt().as_ref().expect("prompt retained");
        assert!(prompt.contains(character.as_str()), "prompt: {prompt}");
        assert!(prompt.contains(style_token), "prompt: {prompt}");
    }
    Ok(())
}

#[tokio::test]
async fn image_prompts_are_clamped_to_the_endpoint_budget() -> anyhow::Result<()> {
    let text = MockText::new([Scripted::Ok(draft_json(4))]);
    let image = std::sync::Arc::new(MockImage::with_max_prompt_bytes(64));
    let orchestrator = Orchestrator::new(text, image.clone());

    orchestrator.generate(&request(4), &NullObserver).await?;

    let prompts = image.prompts();
    assert_eq!(prompts.len(), 5);
    for prompt in &prompts {
        assert!(prompt.len() <= 64, "prompt over budget: {} bytes", prompt.len());
    }
    // The page prompts are ASCII at the cut point, so they land exactly
    // on the budget; the cover backs off to a char boundary below it.
    assert!(prompts.iter().filter(|p| p.len() == 64).count() >= 4);
    Ok(())
}

#[tokio::test]
async fn sequential_generation_reports_stages_in_order() -> anyhow::Result<()> {
    let text = MockText::new([Scripted::Ok(draft_json(4))]);
    let image = MockImage::new();
    let orchestrator = Orchestrator::new(text, image);
    let observer = RecordingObserver::new();

    orchestrator.generate(&request(4), &observer).await?;

    assert_eq!(
        observer.stages(),
        vec![
            PipelineStage::TextGenerating,
            PipelineStage::CoverImageGenerating,
            PipelineStage::PageImageGenerating(1),
            PipelineStage::PageImageGenerating(2),
            PipelineStage::PageImageGenerating(3),
            PipelineStage::PageImageGenerating(4),
            PipelineStage::Complete,
        ]
    );
    // Partial stories grow one illustrated page at a time.
    assert_eq!(observer.partial_progress(), vec![0, 1, 2, 3, 4]);
    Ok(())
}

#[tokio::test]
async fn parallel_policy_assembles_the_same_story_shape() -> anyhow::Result<()> {
    let text = MockText::new([Scripted::Ok(draft_json(6))]);
    let image = MockImage::new();
    let orchestrator = Orchestrator::new(text, image).with_policy(ImagePolicy::Parallel);

    let story = orchestrator.generate(&request(6), &NullObserver).await?;

    assert_eq!(story.pages().len(), 6);
    for (index, page) in story.pages().iter().enumerate() {
        assert_eq!(*page.id(), index as u32 + 1);
        assert!(!page.image().is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn upstream_failure_during_page_images_fails_the_pipeline() {
    let text = MockText::new([Scripted::Ok(draft_json(4))]);
    // Call 1 is the cover; page 3 is image call 4.
    let image = MockImage::failing_on(4, 500);
    let orchestrator = Orchestrator::new(text, image);
    let observer = RecordingObserver::new();

    let err = orchestrator.generate(&request(4), &observer).await.unwrap_err();

    assert!(err.is_upstream());
    assert_eq!(observer.stages().last(), Some(&PipelineStage::Failed));
}

#[tokio::test]
async fn undecodable_draft_is_a_decode_failure_not_an_upstream_one() {
    let text = MockText::new([Scripted::Ok("I cannot write stories today.".to_string())]);
    let image = MockImage::new();
    let orchestrator = Orchestrator::new(text, image);

    let err = orchestrator.generate(&request(4), &NullObserver).await.unwrap_err();

    assert!(matches!(err.kind(), EhonErrorKind::Decode(_)));
    assert!(!err.is_upstream());
}

#[tokio::test]
async fn draft_with_wrong_page_count_is_rejected() {
    let text = MockText::new([Scripted::Ok(draft_json(3))]);
    let image = MockImage::new();
    let orchestrator = Orchestrator::new(text, image);

    let err = orchestrator.generate(&request(4), &NullObserver).await.unwrap_err();
    assert!(matches!(err.kind(), EhonErrorKind::Decode(_)));
}

#[tokio::test]
async fn text_failure_stops_before_any_image_call() {
    use std::sync::Arc;

    let text = MockText::new([Scripted::Http(503, "overloaded".to_string())]);
    let image = Arc::new(MockImage::new());
    let orchestrator = Orchestrator::new(text, Arc::clone(&image));

    let err = orchestrator.generate(&request(4), &NullObserver).await.unwrap_err();

    // No image spend after a text failure.
    assert!(err.is_upstream());
    assert_eq!(image.call_count(), 0);
}

#[tokio::test]
async fn sequential_failure_point_is_deterministic() {
    use std::sync::Arc;

    let text = MockText::new([Scripted::Ok(draft_json(4))]);
    let image = Arc::new(MockImage::failing_on(4, 500));
    let orchestrator = Orchestrator::new(text, Arc::clone(&image));

    orchestrator.generate(&request(4), &NullObserver).await.unwrap_err();

    // Cover + pages 1..3 attempted, nothing after the failure.
    assert_eq!(image.call_count(), 4);
}
