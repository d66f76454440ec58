//! The multi-call synthesis orchestrator.

use crate::decode::{decode_cover_regen, decode_page_regen, decode_story_draft};
use ehon_core::{
    AspectRatio, GenerationRequest, ImageData, Page, RegenerationInstruction, Story,
};
use ehon_error::{EhonResult, PipelineError, PipelineErrorKind};
use ehon_interface::{ImageSynthesizer, PipelineStage, ProgressObserver, TextSynthesizer};
use ehon_prompt::{cover_image_prompt, cover_regen_request, page_image_prompt, page_regen_request};
use tracing::{debug, instrument, warn};

/// How the page-image stage schedules its calls.
///
/// Sequential generation attaches images in ascending page order and gives
/// the observer visible incremental progress, with a deterministic
/// partial-failure point. Parallel generation fans the calls out for lower
/// latency; the observer only sees the fully-illustrated result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImagePolicy {
    /// One page image at a time, in order (progressive feedback)
    #[default]
    Sequential,
    /// All page images concurrently (lower latency)
    Parallel,
}

/// Drives the generation pipelines against the synthesizer seams.
///
/// The orchestrator sequences calls and assembles story values; it never
/// touches history (committing is [`crate::StorySession`]'s job) and never
/// retries (failures surface verbatim so the caller decides whether to
/// spend money again).
#[derive(Debug, Clone)]
pub struct Orchestrator<T, I> {
    text: T,
    image: I,
    policy: ImagePolicy,
}

impl<T: TextSynthesizer, I: ImageSynthesizer> Orchestrator<T, I> {
    /// Create an orchestrator with the default sequential image policy.
    pub fn new(text: T, image: I) -> Self {
        Self {
            text,
            image,
            policy: ImagePolicy::Sequential,
        }
    }

    /// Override the page-image scheduling policy.
    pub fn with_policy(mut self, policy: ImagePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active page-image scheduling policy.
    pub fn policy(&self) -> ImagePolicy {
        self.policy
    }

    /// Truncate a composed prompt to the image endpoint's byte budget,
    /// cutting on a char boundary.
    fn clamp_prompt(&self, mut prompt: String) -> String {
        let max = self.image.max_prompt_bytes();
        if prompt.len() <= max {
            return prompt;
        }
        let mut cut = max;
        while !prompt.is_char_boundary(cut) {
            cut -= 1;
        }
        warn!(bytes = prompt.len(), max, "Image prompt over budget, truncating");
        prompt.truncate(cut);
        prompt
    }

    /// Run the full generation pipeline: one structured text call, the
    /// cover image, then one image per page.
    ///
    /// The observer sees every stage transition and each progressively
    /// assembled partial story (cover attached before page images exist;
    /// unillustrated pages carry empty image payloads). The returned story
    /// is complete and commit-eligible; on any failure the error of the
    /// underlying call is returned unmodified and nothing is committed
    /// anywhere.
    #[instrument(skip(self, request, observer), fields(pages = request.page_count().as_usize()))]
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        observer: &dyn ProgressObserver,
    ) -> EhonResult<Story> {
        match self.generate_inner(request, observer).await {
            Ok(story) => {
                observer.stage(PipelineStage::Complete);
                Ok(story)
            }
            Err(e) => {
                warn!(error = %e, "Generation pipeline failed");
                observer.stage(PipelineStage::Failed);
                Err(e)
            }
        }
    }

    async fn generate_inner(
        &self,
        request: &GenerationRequest,
        observer: &dyn ProgressObserver,
    ) -> EhonResult<Story> {
        let art_style = *request.art_style();

        observer.stage(PipelineStage::TextGenerating);
        let structured = ehon_prompt::story_request(request);
        let response = self.text.generate_structured(&structured).await?;
        let draft = decode_story_draft(&response, request.page_count().as_usize())?;

        observer.stage(PipelineStage::CoverImageGenerating);
        let cover_prompt = self.clamp_prompt(cover_image_prompt(
            draft.title(),
            draft.character_description(),
            art_style,
            None,
        ));
        let cover = self
            .image
            .generate_image(&cover_prompt, AspectRatio::FourThirds)
            .await?;

        // Working value for progressive display; unillustrated pages carry
        // empty payloads and the value is never committed as-is.
        let placeholder_pages: Vec<Page> = draft
            .pages()
            .iter()
            .map(|dp| {
                Page::new(
                    *dp.page_number(),
                    dp.text().clone(),
                    ImageData::new("image/png", Vec::new()),
                    None,
                )
            })
            .collect();
        let mut working = Story::new(
            draft.title().clone(),
            cover,
            draft.character_description().clone(),
            art_style,
            placeholder_pages,
            draft.afterword().clone(),
        )?;
        observer.partial(&working);

        match self.policy {
            ImagePolicy::Sequential => {
                for dp in draft.pages() {
                    let id = *dp.page_number();
                    observer.stage(PipelineStage::PageImageGenerating(id));
                    let prompt = self.clamp_prompt(page_image_prompt(
                        dp.image_prompt(),
                        art_style,
                        draft.character_description(),
                    ));
                    let image = self
                        .image
                        .generate_image(&prompt, AspectRatio::FourThirds)
                        .await?;
                    working = working.with_regenerated_page(id, dp.text().clone(), image, Some(prompt))?;
                    observer.partial(&working);
                }
            }
            ImagePolicy::Parallel => {
                let futures = draft.pages().iter().map(|dp| {
                    let prompt = self.clamp_prompt(page_image_prompt(
                        dp.image_prompt(),
                        art_style,
                        draft.character_description(),
                    ));
                    async move {
                        let image = self
                            .image
                            .generate_image(&prompt, AspectRatio::FourThirds)
                            .await?;
                        Ok::<_, ehon_error::EhonError>((*dp.page_number(), prompt, image))
                    }
                });
                let results = futures::future::try_join_all(futures).await?;
                for (id, prompt, image) in results {
                    let text = draft.pages()[(id - 1) as usize].text().clone();
                    working = working.with_regenerated_page(id, text, image, Some(prompt))?;
                }
                observer.partial(&working);
            }
        }

        debug!(title = %working.title(), pages = working.pages().len(), "Assembled complete story");
        Ok(working)
    }

    /// Regenerate exactly one page: a structured call bound to the page's
    /// context, then one image call with the returned prompt.
    ///
    /// Atomic: a failure at either call surfaces the error and the input
    /// story is untouched, so new text is never paired with an old image.
    #[instrument(skip(self, story, instruction))]
    pub async fn regenerate_page(
        &self,
        story: &Story,
        page_id: u32,
        instruction: &str,
    ) -> EhonResult<Story> {
        let page = story
            .page(page_id)
            .ok_or_else(|| PipelineError::new(PipelineErrorKind::UnknownPage(page_id)))?;

        let instruction = RegenerationInstruction::for_page(
            page_id,
            instruction,
            story.character_description().clone(),
            *story.art_style(),
            page.text().clone(),
            story.preceding_text(page_id),
        );
        let structured = page_regen_request(&instruction);
        let response = self.text.generate_structured(&structured).await?;
        let result = decode_page_regen(&response)?;

        let prompt = self.clamp_prompt(page_image_prompt(
            result.new_image_prompt(),
            *story.art_style(),
            story.character_description(),
        ));
        let image = self
            .image
            .generate_image(&prompt, AspectRatio::FourThirds)
            .await?;

        Ok(story.with_regenerated_page(page_id, result.new_text().clone(), image, Some(prompt))?)
    }

    /// Regenerate the cover: a structured call for a revised title and
    /// cover guidance, then one image call. Replaces only the title and
    /// cover image; character description and art style are never touched,
    /// whatever the instruction asks for.
    #[instrument(skip(self, story, instruction))]
    pub async fn regenerate_cover(&self, story: &Story, instruction: &str) -> EhonResult<Story> {
        let instruction = RegenerationInstruction::for_cover(
            instruction,
            story.character_description().clone(),
            *story.art_style(),
            story.title().clone(),
        );
        let structured = cover_regen_request(&instruction);
        let response = self.text.generate_structured(&structured).await?;
        let result = decode_cover_regen(&response)?;

        let prompt = self.clamp_prompt(cover_image_prompt(
            result.new_title(),
            story.character_description(),
            *story.art_style(),
            Some(result.new_image_prompt()),
        ));
        let image = self
            .image
            .generate_image(&prompt, AspectRatio::FourThirds)
            .await?;

        Ok(story.with_regenerated_cover(result.new_title().clone(), image))
    }
}
