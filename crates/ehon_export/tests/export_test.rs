//! Export loop behavior with a scripted renderer.

use ehon_core::{ArtStyle, ImageData, Page, Story};
use ehon_error::{EhonErrorKind, EhonResult, ExportError, ExportErrorKind};
use ehon_export::{IllustrationRenderer, PageLayout, SkipPolicy, export_story};
use ehon_interface::{PAGE_HEIGHT, PAGE_WIDTH, PageRenderer, RasterPage};
use lopdf::{Document, Object};
use std::collections::HashSet;
use std::io::Cursor;
use std::sync::Mutex;

/// Renderer that succeeds with a stub raster except for labeled pages.
struct FakeRenderer {
    fail: HashSet<String>,
    rendered: Mutex<Vec<String>>,
}

impl FakeRenderer {
    fn new() -> Self {
        Self::failing([])
    }

    fn failing(labels: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            fail: labels.into_iter().map(str::to_string).collect(),
            rendered: Mutex::new(Vec::new()),
        }
    }

    fn rendered(&self) -> Vec<String> {
        self.rendered.lock().unwrap().clone()
    }
}

impl PageRenderer for FakeRenderer {
    type Layout = PageLayout;

    fn render(&self, layout: &PageLayout) -> EhonResult<RasterPage> {
        let label = layout.label();
        self.rendered.lock().unwrap().push(label.clone());
        if self.fail.contains(&label) {
            return Err(ExportError::new(ExportErrorKind::Capture {
                label,
                message: "layout never settled".to_string(),
            })
            .into());
        }
        Ok(RasterPage {
            jpeg: vec![0xFF, 0xD8, 0xFF, 0xD9],
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
        })
    }
}

fn story(pages: usize) -> Story {
    let image = ImageData::new("image/png", vec![0]);
    let pages = (1..=pages as u32)
        .map(|id| Page::new(id, format!("page text {id}"), image.clone(), None))
        .collect();
    Story::new(
        "そらのたび",
        image,
        "a small white cat with a red scarf",
        ArtStyle::Watercolor,
        pages,
        "おしまい",
    )
    .unwrap()
}

fn page_count(pdf: &[u8]) -> usize {
    Document::load_mem(pdf).unwrap().get_pages().len()
}

#[test]
fn a_four_page_story_exports_six_document_pages() -> anyhow::Result<()> {
    let renderer = FakeRenderer::new();
    let pdf = export_story(&story(4), &renderer, SkipPolicy::default())?;

    assert_eq!(page_count(&pdf), 6);
    assert_eq!(
        renderer.rendered(),
        ["cover", "page 1", "page 2", "page 3", "page 4", "afterword"]
    );
    Ok(())
}

#[test]
fn skip_policy_drops_the_failed_page_and_keeps_the_rest() -> anyhow::Result<()> {
    let renderer = FakeRenderer::failing(["page 2"]);
    let pdf = export_story(&story(4), &renderer, SkipPolicy::SkipFailed)?;

    assert_eq!(page_count(&pdf), 5);
    // All pages were still attempted.
    assert_eq!(renderer.rendered().len(), 6);
    Ok(())
}

#[test]
fn abort_policy_stops_at_the_first_failure() {
    let renderer = FakeRenderer::failing(["page 2"]);
    let err = export_story(&story(4), &renderer, SkipPolicy::AbortOnError).unwrap_err();

    match err.kind() {
        EhonErrorKind::Export(e) => match &e.kind {
            ExportErrorKind::Capture { label, .. } => assert_eq!(label, "page 2"),
            other => panic!("expected capture error, got {other:?}"),
        },
        other => panic!("expected export error, got {other:?}"),
    }
    // Nothing after the failed page was rendered.
    assert_eq!(renderer.rendered(), ["cover", "page 1", "page 2"]);
}

fn png_image() -> ImageData {
    let pixels = image::RgbImage::from_pixel(4, 3, image::Rgb([200, 100, 50]));
    let mut buffer = Cursor::new(Vec::new());
    pixels.write_to(&mut buffer, image::ImageFormat::Png).unwrap();
    ImageData::new("image/png", buffer.into_inner())
}

/// The DCT-encoded rasters embedded in the document, one per page.
fn embedded_rasters(pdf: &[u8]) -> Vec<Vec<u8>> {
    let doc = Document::load_mem(pdf).unwrap();
    doc.objects
        .values()
        .filter_map(|object| match object {
            Object::Stream(s)
                if s.dict
                    .get(b"Subtype")
                    .and_then(|o| o.as_name())
                    .map(|n| n == b"Image".as_slice())
                    .unwrap_or(false) =>
            {
                Some(s.content.clone())
            }
            _ => None,
        })
        .collect()
}

#[test]
fn the_printed_book_carries_the_story_text() -> anyhow::Result<()> {
    let image = png_image();
    let pages = vec![
        Page::new(1, "A small cat looked up at the moon.", image.clone(), None),
        Page::new(2, "She packed her red scarf and set off.", image.clone(), None),
    ];
    let story = Story::new(
        "Sora and the Moon",
        image,
        "a small white cat with a red scarf",
        ArtStyle::Watercolor,
        pages,
        "The end.",
    )?;
    let renderer = IllustrationRenderer::new()?;

    let pdf = export_story(&story, &renderer, SkipPolicy::AbortOnError)?;

    let rasters = embedded_rasters(&pdf);
    assert_eq!(rasters.len(), 4);
    // Cover, both body pages, and the afterword all show glyph ink.
    for raster in &rasters {
        let decoded = image::load_from_memory(raster)?.to_rgb8();
        let ink = decoded
            .pixels()
            .filter(|p| p.0.iter().all(|&c| c < 128))
            .count();
        assert!(ink > 0, "page raster carries no printed text");
    }
    Ok(())
}

#[test]
fn an_export_where_every_capture_fails_is_an_error() {
    let renderer = FakeRenderer::failing([
        "cover", "page 1", "page 2", "page 3", "page 4", "afterword",
    ]);
    let err = export_story(&story(4), &renderer, SkipPolicy::SkipFailed).unwrap_err();

    match err.kind() {
        EhonErrorKind::Export(e) => assert_eq!(e.kind, ExportErrorKind::Empty(6)),
        other => panic!("expected export error, got {other:?}"),
    }
}
