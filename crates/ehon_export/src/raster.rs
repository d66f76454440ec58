//! Headless raster renderer for the capture loop.

use crate::PageLayout;
use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use ehon_core::{ImageData, Page};
use ehon_error::{EhonResult, ExportError, ExportErrorKind};
use ehon_interface::{PAGE_HEIGHT, PAGE_WIDTH, PageRenderer, RasterPage};
use image::{Rgb, RgbImage, imageops};
use imageproc::drawing::draw_text_mut;
use std::fmt;
use std::io::Cursor;

/// Fallback face compiled into the binary. Covers Latin scripts; stories
/// in other scripts need a caller-supplied face via
/// [`IllustrationRenderer::with_font`].
static EMBEDDED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

const INK: Rgb<u8> = Rgb([30, 30, 30]);
const MARGIN: u32 = 24;
/// Cover band reserved for the title above the illustration.
const TITLE_BAND: u32 = 90;
/// Body band reserved for the prose beneath the illustration.
const PROSE_BAND: u32 = 150;
const TITLE_SCALE: f32 = 42.0;
const PROSE_SCALE: f32 = 24.0;
const AFTERWORD_SCALE: f32 = 30.0;

/// Renders each logical page onto a white canvas at the fixed export
/// geometry. The cover draws its title above the letterboxed
/// illustration and body pages draw their prose beneath it; the
/// afterword captures as a centered text page.
#[derive(Clone)]
pub struct IllustrationRenderer {
    quality: u8,
    font: FontArc,
}

impl fmt::Debug for IllustrationRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IllustrationRenderer")
            .field("quality", &self.quality)
            .finish_non_exhaustive()
    }
}

impl IllustrationRenderer {
    /// Create a renderer using the embedded face at the default JPEG
    /// quality.
    pub fn new() -> EhonResult<Self> {
        Self::with_font(EMBEDDED_FONT)
    }

    /// Create a renderer around a caller-supplied TTF or OTF face.
    pub fn with_font(bytes: &[u8]) -> EhonResult<Self> {
        let font = FontArc::try_from_vec(bytes.to_vec())
            .map_err(|e| ExportError::new(ExportErrorKind::FontDecode(e.to_string())))?;
        Ok(Self { quality: 85, font })
    }

    /// Override the JPEG quality (1 to 100).
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    fn blank_canvas() -> RgbImage {
        RgbImage::from_pixel(PAGE_WIDTH, PAGE_HEIGHT, Rgb([255, 255, 255]))
    }

    /// Letterbox the illustration into the horizontal band starting at
    /// `top` and spanning `band_height` rows.
    fn draw_illustration(
        canvas: &mut RgbImage,
        image: &ImageData,
        top: u32,
        band_height: u32,
    ) -> EhonResult<()> {
        let decoded = image::load_from_memory(image.data())
            .map_err(|e| ExportError::new(ExportErrorKind::ImageDecode(e.to_string())))?;
        let scaled = decoded
            .resize(PAGE_WIDTH, band_height, imageops::FilterType::Lanczos3)
            .to_rgb8();
        let x = (PAGE_WIDTH - scaled.width()) / 2;
        let y = top + (band_height - scaled.height()) / 2;
        imageops::overlay(canvas, &scaled, i64::from(x), i64::from(y));
        Ok(())
    }

    /// Wrap `text` to the printable width and draw it as horizontally
    /// centered lines starting at `top`. Returns the y just below the
    /// last line.
    fn draw_text_block(&self, canvas: &mut RgbImage, text: &str, scale: f32, top: f32) -> f32 {
        let scale = PxScale::from(scale);
        let scaled = self.font.as_scaled(scale);
        let max_width = (PAGE_WIDTH - 2 * MARGIN) as f32;
        let line_height = scaled.height() + scaled.line_gap();
        let mut y = top;
        for line in wrap_lines(&scaled, max_width, text) {
            let width: f32 = line
                .chars()
                .map(|c| scaled.h_advance(scaled.glyph_id(c)))
                .sum();
            let x = ((PAGE_WIDTH as f32 - width) / 2.0).max(MARGIN as f32);
            draw_text_mut(canvas, INK, x as i32, y as i32, scale, &self.font, &line);
            y += line_height;
        }
        y
    }

    /// Height the wrapped block would occupy, for vertical centering.
    fn text_block_height(&self, text: &str, scale: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(scale));
        let max_width = (PAGE_WIDTH - 2 * MARGIN) as f32;
        let lines = wrap_lines(&scaled, max_width, text).len() as f32;
        lines * (scaled.height() + scaled.line_gap())
    }

    fn compose_cover(&self, title: &str, image: &ImageData) -> EhonResult<RgbImage> {
        let mut canvas = Self::blank_canvas();
        Self::draw_illustration(&mut canvas, image, TITLE_BAND, PAGE_HEIGHT - TITLE_BAND)?;
        self.draw_text_block(&mut canvas, title, TITLE_SCALE, MARGIN as f32);
        Ok(canvas)
    }

    fn compose_body(&self, page: &Page) -> EhonResult<RgbImage> {
        let mut canvas = Self::blank_canvas();
        Self::draw_illustration(&mut canvas, page.image(), 0, PAGE_HEIGHT - PROSE_BAND)?;
        let top = (PAGE_HEIGHT - PROSE_BAND + MARGIN) as f32;
        self.draw_text_block(&mut canvas, page.text(), PROSE_SCALE, top);
        Ok(canvas)
    }

    fn compose_afterword(&self, text: &str) -> RgbImage {
        let mut canvas = Self::blank_canvas();
        let block = self.text_block_height(text, AFTERWORD_SCALE);
        let top = ((PAGE_HEIGHT as f32 - block) / 2.0).max(MARGIN as f32);
        self.draw_text_block(&mut canvas, text, AFTERWORD_SCALE, top);
        canvas
    }

    fn encode(&self, canvas: &RgbImage) -> EhonResult<RasterPage> {
        let mut buffer = Cursor::new(Vec::new());
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, self.quality);
        canvas
            .write_with_encoder(encoder)
            .map_err(|e| ExportError::new(ExportErrorKind::ImageEncode(e.to_string())))?;
        Ok(RasterPage {
            jpeg: buffer.into_inner(),
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
        })
    }
}

/// Greedy line wrap against glyph advances, breaking at the last space
/// when one exists and otherwise at the overflowing character (scripts
/// without word spaces wrap at any character).
fn wrap_lines<F: Font, S: ScaleFont<F>>(scaled: &S, max_width: f32, text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0.0;
    let mut last_space = None;
    for c in text.chars() {
        if c == '\n' {
            lines.push(std::mem::take(&mut line));
            line_width = 0.0;
            last_space = None;
            continue;
        }
        let advance = scaled.h_advance(scaled.glyph_id(c));
        if line_width + advance > max_width && !line.is_empty() {
            match last_space {
                Some(at) => {
                    let rest: String = line.split_off(at).trim_start().to_string();
                    lines.push(std::mem::take(&mut line));
                    line = rest;
                }
                None => lines.push(std::mem::take(&mut line)),
            }
            last_space = None;
            line_width = line
                .chars()
                .map(|c| scaled.h_advance(scaled.glyph_id(c)))
                .sum();
        }
        if c == ' ' {
            last_space = Some(line.len());
        }
        line.push(c);
        line_width += advance;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

impl PageRenderer for IllustrationRenderer {
    type Layout = PageLayout;

    fn render(&self, layout: &PageLayout) -> EhonResult<RasterPage> {
        let canvas = match layout {
            PageLayout::Cover { title, image } => self.compose_cover(title, image)?,
            PageLayout::Body { page } => self.compose_body(page)?,
            PageLayout::Afterword { text } => self.compose_afterword(text),
        };
        self.encode(&canvas)
    }
}
