//! The story artifact and its pages.

use crate::{ArtStyle, ImageData};
use ehon_error::ValidationError;
use serde::{Deserialize, Serialize};

/// One page of a story.
///
/// The id is 1-based and always equals the page's position in the story.
/// The original image-generation prompt is retained for traceability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Page {
    /// 1-based page id, equal to narrative position
    id: u32,
    /// Story prose for this page
    text: String,
    /// Illustration attached to this page
    image: ImageData,
    /// The prompt that produced the illustration, when known
    image_prompt: Option<String>,
}

impl Page {
    /// Create a page.
    pub fn new(
        id: u32,
        text: impl Into<String>,
        image: ImageData,
        image_prompt: Option<String>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            image,
            image_prompt,
        }
    }
}

/// The complete generated artifact: title, cover, pages, and afterword.
///
/// `character_description` and `art_style` are fixed for the lifetime of a
/// story. Regeneration may rewrite only the title and cover image (cover) or
/// exactly one page's text and image (page); the transformers below are the
/// only way to derive a modified story, which keeps that invariant local.
///
/// # Examples
///
/// ```
/// use ehon_core::{ArtStyle, ImageData, Page, Story};
///
/// let image = ImageData::new("image/png", vec![1]);
/// let pages = vec![Page::new(1, "むかしむかし", image.clone(), None)];
/// let story = Story::new(
///     "そらのぼうけん",
///     image,
///     "a small white cat with a red scarf",
///     ArtStyle::Watercolor,
///     pages,
///     "おしまい",
/// )
/// .unwrap();
/// assert_eq!(story.pages().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Story {
    /// Story title
    title: String,
    /// Cover illustration
    cover_image: ImageData,
    /// Authoritative character description, injected into every image prompt
    character_description: String,
    /// Art style, fixed across all illustrations
    art_style: ArtStyle,
    /// Ordered pages, ids 1-based and contiguous
    pages: Vec<Page>,
    /// Closing text shown after the last page
    afterword: String,
}

impl Story {
    /// Create a story, validating the page invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `pages` is empty or any page id does
    /// not equal its 1-based position.
    pub fn new(
        title: impl Into<String>,
        cover_image: ImageData,
        character_description: impl Into<String>,
        art_style: ArtStyle,
        pages: Vec<Page>,
        afterword: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if pages.is_empty() {
            return Err(ValidationError::new("a story must have at least one page"));
        }
        for (index, page) in pages.iter().enumerate() {
            let expected = index as u32 + 1;
            if page.id() != &expected {
                return Err(ValidationError::new(format!(
                    "page id {} at position {} (expected {})",
                    page.id(),
                    index,
                    expected
                )));
            }
        }
        Ok(Self {
            title: title.into(),
            cover_image,
            character_description: character_description.into(),
            art_style,
            pages,
            afterword: afterword.into(),
        })
    }

    /// Find a page by its 1-based id.
    pub fn page(&self, id: u32) -> Option<&Page> {
        self.pages.iter().find(|p| *p.id() == id)
    }

    /// Concatenated text of all pages preceding `id`, used as narrative
    /// continuity context during page regeneration.
    pub fn preceding_text(&self, id: u32) -> String {
        self.pages
            .iter()
            .filter(|p| *p.id() < id)
            .map(|p| p.text().as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Derive a new story with exactly one page's text and image replaced.
    ///
    /// Everything else is carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if no page has the given id.
    pub fn with_regenerated_page(
        &self,
        id: u32,
        text: impl Into<String>,
        image: ImageData,
        image_prompt: Option<String>,
    ) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        let page = next
            .pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ValidationError::new(format!("no page with id {id}")))?;
        page.text = text.into();
        page.image = image;
        page.image_prompt = image_prompt;
        Ok(next)
    }

    /// Derive a new story with only the title and cover image replaced.
    ///
    /// Character description and art style are never touched here, which is
    /// what prevents visual drift across regenerations.
    pub fn with_regenerated_cover(&self, title: impl Into<String>, cover_image: ImageData) -> Self {
        let mut next = self.clone();
        next.title = title.into();
        next.cover_image = cover_image;
        next
    }

    /// Derive a new story with one page's text replaced (manual edit).
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if no page has the given id.
    pub fn with_page_text(&self, id: u32, text: impl Into<String>) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        let page = next
            .pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ValidationError::new(format!("no page with id {id}")))?;
        page.text = text.into();
        Ok(next)
    }
}
