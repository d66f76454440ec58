//! Visual capture seam for document export.

use ehon_error::EhonResult;

/// Fixed export page width in pixels (landscape).
pub const PAGE_WIDTH: u32 = 800;

/// Fixed export page height in pixels.
pub const PAGE_HEIGHT: u32 = 600;

/// One captured page: encoded raster at the fixed export geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterPage {
    /// JPEG-encoded page image
    pub jpeg: Vec<u8>,
    /// Width in pixels (always [`PAGE_WIDTH`] for conforming renderers)
    pub width: u32,
    /// Height in pixels (always [`PAGE_HEIGHT`] for conforming renderers)
    pub height: u32,
}

/// Renders one logical page of a story into a raster at the fixed geometry.
///
/// Rendering happens off the user's viewing surface, and a renderer must
/// finish layout before capturing: capture-before-layout produces blank
/// pages. The export loop only depends on this trait, so tests drive it
/// with a fake.
pub trait PageRenderer: Send + Sync {
    /// The logical page type this renderer consumes.
    type Layout;

    /// Render one logical page to a raster.
    fn render(&self, layout: &Self::Layout) -> EhonResult<RasterPage>;
}
