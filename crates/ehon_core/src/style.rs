//! Bounded request enums: theme, art style, and page count.

use ehon_error::ValidationError;
use serde::{Deserialize, Serialize};

/// Narrative theme selected by the user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Journeys and discovery
    #[default]
    Adventure,
    /// Friendship and kindness
    Friendship,
    /// Everyday life, gently observed
    DailyLife,
    /// Animals and nature
    Nature,
    /// Dreams and magic
    Fantasy,
}

impl Theme {
    /// Short phrase injected into the story prompt.
    pub fn prompt_hint(&self) -> &'static str {
        match self {
            Theme::Adventure => "an exciting little adventure",
            Theme::Friendship => "friendship and kindness",
            Theme::DailyLife => "a warm moment of everyday life",
            Theme::Nature => "animals and the natural world",
            Theme::Fantasy => "gentle dreams and magic",
        }
    }
}

/// Art style applied to every image in a story.
///
/// The style token is injected into every image prompt, cover included, to
/// keep the whole book visually coherent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum ArtStyle {
    /// Soft watercolor washes
    #[default]
    Watercolor,
    /// Flat pastel shapes
    Pastel,
    /// Crayon and colored pencil
    Crayon,
    /// Cut-paper collage
    PaperCollage,
    /// Clean digital illustration
    Digital,
}

impl ArtStyle {
    /// The style token appended to every image prompt.
    pub fn prompt_token(&self) -> &'static str {
        match self {
            ArtStyle::Watercolor => "soft watercolor children's book illustration",
            ArtStyle::Pastel => "flat pastel children's book illustration",
            ArtStyle::Crayon => "crayon and colored pencil children's book illustration",
            ArtStyle::PaperCollage => "cut-paper collage children's book illustration",
            ArtStyle::Digital => "clean digital children's book illustration",
        }
    }
}

/// Number of story pages, bounded to the supported set.
///
/// # Examples
///
/// ```
/// use ehon_core::PageCount;
///
/// let count = PageCount::try_from(6).unwrap();
/// assert_eq!(count.as_usize(), 6);
/// assert!(PageCount::try_from(5).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum PageCount {
    /// Four pages
    #[default]
    Four,
    /// Six pages
    Six,
    /// Eight pages
    Eight,
}

impl PageCount {
    /// The page count as a number.
    pub fn as_usize(&self) -> usize {
        match self {
            PageCount::Four => 4,
            PageCount::Six => 6,
            PageCount::Eight => 8,
        }
    }
}

impl TryFrom<u32> for PageCount {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(PageCount::Four),
            6 => Ok(PageCount::Six),
            8 => Ok(PageCount::Eight),
            other => Err(ValidationError::new(format!(
                "page count must be 4, 6, or 8 (got {other})"
            ))),
        }
    }
}

impl std::fmt::Display for PageCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn page_count_accepts_only_supported_values() {
        for n in 0..=10u32 {
            let result = PageCount::try_from(n);
            assert_eq!(result.is_ok(), matches!(n, 4 | 6 | 8), "n = {n}");
        }
    }

    #[test]
    fn art_style_round_trips_through_strings() {
        for style in ArtStyle::iter() {
            let name = style.to_string();
            assert_eq!(ArtStyle::from_str(&name).unwrap(), style);
        }
    }

    #[test]
    fn every_style_has_a_nonempty_token() {
        for style in ArtStyle::iter() {
            assert!(!style.prompt_token().is_empty());
        }
    }
}
