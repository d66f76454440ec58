//! Typed decode targets for structured-generation responses.
//!
//! These mirror the JSON response schemas sent with each structured call, so
//! a shape mismatch fails at one decode site instead of at every access.

use serde::{Deserialize, Serialize};

/// The text-only result of the first generation call, before images exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryDraft {
    /// Story title
    title: String,
    /// Authoritative character description for all image prompts
    character_description: String,
    /// One entry per requested page
    pages: Vec<DraftPage>,
    /// Closing text
    afterword: String,
}

impl StoryDraft {
    /// Create a draft (used by decode and by tests).
    pub fn new(
        title: impl Into<String>,
        character_description: impl Into<String>,
        pages: Vec<DraftPage>,
        afterword: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            character_description: character_description.into(),
            pages,
            afterword: afterword.into(),
        }
    }
}

/// One page of a draft: prose plus the visual description for its image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct DraftPage {
    /// Declared 1-based page number
    page_number: u32,
    /// Story prose
    text: String,
    /// Page-specific visual description for image synthesis
    image_prompt: String,
}

impl DraftPage {
    /// Create a draft page.
    pub fn new(page_number: u32, text: impl Into<String>, image_prompt: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
            image_prompt: image_prompt.into(),
        }
    }
}

/// Structured response to a page regeneration call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PageRegenResult {
    /// Replacement prose for the page
    new_text: String,
    /// Replacement visual description for the page image
    new_image_prompt: String,
}

impl PageRegenResult {
    /// Create a page regeneration result.
    pub fn new(new_text: impl Into<String>, new_image_prompt: impl Into<String>) -> Self {
        Self {
            new_text: new_text.into(),
            new_image_prompt: new_image_prompt.into(),
        }
    }
}

/// Structured response to a cover regeneration call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CoverRegenResult {
    /// Replacement title
    new_title: String,
    /// Replacement visual description for the cover image
    new_image_prompt: String,
}

impl CoverRegenResult {
    /// Create a cover regeneration result.
    pub fn new(new_title: impl Into<String>, new_image_prompt: impl Into<String>) -> Self {
        Self {
            new_title: new_title.into(),
            new_image_prompt: new_image_prompt.into(),
        }
    }
}
