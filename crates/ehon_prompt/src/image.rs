//! Image prompt composition.
//!
//! Every image prompt ends with the style token and the character
//! description, in that fixed order, so the character's appearance is
//! reinforced on every single call. This ordering is load-bearing for
//! visual consistency; do not reorder.

use ehon_core::ArtStyle;

/// Compose the prompt for one page's illustration.
pub fn page_image_prompt(base_prompt: &str, art_style: ArtStyle, character_description: &str) -> String {
    format!(
        "{base}. Style: {style}. The main character looks like this: {character}. \
         No text or letters in the image.",
        base = base_prompt.trim_end_matches('.'),
        style = art_style.prompt_token(),
        character = character_description,
    )
}

/// Compose the prompt for the cover illustration.
///
/// `extra` folds in AI-revised cover guidance from a regeneration response,
/// when present.
pub fn cover_image_prompt(
    title: &str,
    character_description: &str,
    art_style: ArtStyle,
    extra: Option<&str>,
) -> String {
    let base = match extra {
        Some(guidance) => format!(
            "Book cover illustration for a children's picture book titled \"{title}\". {guidance}"
        ),
        None => format!(
            "Book cover illustration for a children's picture book titled \"{title}\", \
             showing the main character front and center, warm and inviting"
        ),
    };
    page_image_prompt(&base, art_style, character_description)
}
