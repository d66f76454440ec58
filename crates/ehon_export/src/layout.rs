//! Logical page layouts derived from a story.

use ehon_core::{ImageData, Page, Story};

/// One logical page of the exported document.
///
/// Layouts own their content so a renderer can capture them without
/// holding a borrow of the story across the whole export.
#[derive(Debug, Clone, PartialEq)]
pub enum PageLayout {
    /// Title page carrying the cover illustration
    Cover {
        /// Story title
        title: String,
        /// Cover illustration
        image: ImageData,
    },
    /// One body page, illustration above the page text
    Body {
        /// The story page to lay out
        page: Page,
    },
    /// Closing page with the afterword text
    Afterword {
        /// Afterword text
        text: String,
    },
}

impl PageLayout {
    /// Label for logs and capture errors, e.g. "cover" or "page 3".
    pub fn label(&self) -> String {
        match self {
            PageLayout::Cover { .. } => "cover".to_string(),
            PageLayout::Body { page } => format!("page {}", page.id()),
            PageLayout::Afterword { .. } => "afterword".to_string(),
        }
    }
}

/// Derive the full layout sequence for a story.
///
/// Always `story.pages().len() + 2` layouts: cover first, then the body
/// pages in order, then the afterword.
///
/// # Examples
///
/// ```
/// use ehon_core::{ArtStyle, ImageData, Page, Story};
/// use ehon_export::page_layouts;
///
/// let image = ImageData::new("image/png", vec![1]);
/// let pages = vec![Page::new(1, "むかしむかし", image.clone(), None)];
/// let story = Story::new(
///     "そらのたび",
///     image,
///     "a small white cat",
///     ArtStyle::Watercolor,
///     pages,
///     "おしまい",
/// )
/// .unwrap();
/// assert_eq!(page_layouts(&story).len(), 3);
/// ```
pub fn page_layouts(story: &Story) -> Vec<PageLayout> {
    let mut layouts = Vec::with_capacity(story.pages().len() + 2);
    layouts.push(PageLayout::Cover {
        title: story.title().clone(),
        image: story.cover_image().clone(),
    });
    for page in story.pages() {
        layouts.push(PageLayout::Body { page: page.clone() });
    }
    layouts.push(PageLayout::Afterword {
        text: story.afterword().clone(),
    });
    layouts
}

#[cfg(test)]
mod tests {
    use super::*;
    use ehon_core::ArtStyle;

    fn story(pages: usize) -> Story {
        let image = ImageData::new("image/png", vec![0]);
        let pages = (1..=pages as u32)
            .map(|id| Page::new(id, format!("text {id}"), image.clone(), None))
            .collect();
        Story::new(
            "title",
            image,
            "a small white cat",
            ArtStyle::Watercolor,
            pages,
            "the end",
        )
        .unwrap()
    }

    #[test]
    fn layouts_follow_reading_order() {
        let layouts = page_layouts(&story(4));
        assert_eq!(layouts.len(), 6);
        assert!(matches!(layouts[0], PageLayout::Cover { .. }));
        for (index, layout) in layouts[1..5].iter().enumerate() {
            match layout {
                PageLayout::Body { page } => assert_eq!(*page.id(), index as u32 + 1),
                other => panic!("expected body page, got {other:?}"),
            }
        }
        assert!(matches!(layouts[5], PageLayout::Afterword { .. }));
    }

    #[test]
    fn labels_name_the_logical_page() {
        let layouts = page_layouts(&story(2));
        let labels: Vec<_> = layouts.iter().map(PageLayout::label).collect();
        assert_eq!(labels, ["cover", "page 1", "page 2", "afterword"]);
    }
}
