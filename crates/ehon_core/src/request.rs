//! Ephemeral request types: full generation and targeted regeneration.

use crate::{ArtStyle, ImageData, PageCount, Theme};
use serde::{Deserialize, Serialize};

/// Input to a full story generation (ephemeral, never persisted).
///
/// # Examples
///
/// ```
/// use ehon_core::{ArtStyle, GenerationRequest, PageCount, Theme};
///
/// let request = GenerationRequest::builder()
///     .idea("a cat named Sora visits the moon")
///     .theme(Theme::Adventure)
///     .art_style(ArtStyle::Watercolor)
///     .page_count(PageCount::Four)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.page_count().as_usize(), 4);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into), build_fn(error = "derive_builder::UninitializedFieldError"))]
pub struct GenerationRequest {
    /// The user's story idea, free text
    idea: String,
    /// Narrative theme
    #[builder(default)]
    theme: Theme,
    /// Art style for every illustration
    #[builder(default)]
    art_style: ArtStyle,
    /// Requested number of pages
    #[builder(default)]
    page_count: PageCount,
    /// Optional reference drawing of the main character
    #[builder(default)]
    reference_image: Option<ImageData>,
}

impl GenerationRequest {
    /// Start building a generation request.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

/// What a regeneration instruction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegenTarget {
    /// The title and cover image
    Cover,
    /// One page, by 1-based id
    Page(u32),
}

/// A targeted regeneration request (ephemeral, never persisted).
///
/// Carries the user's free-text instruction plus the read-only context the
/// model needs for consistency: the authoritative character description, the
/// art style, and (for page regeneration) the concatenated text of all
/// preceding pages. The instruction text is user-supplied and passed through
/// unescaped; it is a trust boundary, not a parser input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct RegenerationInstruction {
    /// Cover or a specific page
    target: RegenTarget,
    /// Free-text user instruction (e.g. "make the character smile more")
    instruction: String,
    /// Authoritative character description, read-only context
    character_description: String,
    /// Art style, read-only context
    art_style: ArtStyle,
    /// Current title (cover) or current page text (page)
    current_text: String,
    /// Concatenated preceding-page text; empty for the cover or page 1
    preceding_text: String,
}

impl RegenerationInstruction {
    /// Build an instruction targeting the cover.
    pub fn for_cover(
        instruction: impl Into<String>,
        character_description: impl Into<String>,
        art_style: ArtStyle,
        current_title: impl Into<String>,
    ) -> Self {
        Self {
            target: RegenTarget::Cover,
            instruction: instruction.into(),
            character_description: character_description.into(),
            art_style,
            current_text: current_title.into(),
            preceding_text: String::new(),
        }
    }

    /// Build an instruction targeting one page.
    pub fn for_page(
        page_id: u32,
        instruction: impl Into<String>,
        character_description: impl Into<String>,
        art_style: ArtStyle,
        current_text: impl Into<String>,
        preceding_text: impl Into<String>,
    ) -> Self {
        Self {
            target: RegenTarget::Page(page_id),
            instruction: instruction.into(),
            character_description: character_description.into(),
            art_style,
            current_text: current_text.into(),
            preceding_text: preceding_text.into(),
        }
    }
}
