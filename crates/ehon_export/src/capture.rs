//! The capture loop: render each logical page, then assemble the document.

use crate::{PageLayout, page_layouts, pdf};
use ehon_core::Story;
use ehon_error::{EhonResult, ExportError, ExportErrorKind};
use ehon_interface::PageRenderer;
use tracing::{debug, instrument, warn};

/// What to do when a single page capture fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkipPolicy {
    /// Log the failure and continue with the remaining pages
    #[default]
    SkipFailed,
    /// Fail the whole export on the first capture error
    AbortOnError,
}

/// Export a story as a paginated PDF at the fixed page geometry.
///
/// Captures cover, body pages, and afterword in reading order. Under
/// [`SkipPolicy::SkipFailed`] a failed capture drops that page from the
/// document; the export only fails outright when every capture failed.
///
/// # Errors
///
/// Returns an export error when a capture fails under
/// [`SkipPolicy::AbortOnError`], when no page could be captured at all,
/// or when PDF assembly fails.
#[instrument(skip_all, fields(pages = story.pages().len(), ?policy))]
pub fn export_story<R>(story: &Story, renderer: &R, policy: SkipPolicy) -> EhonResult<Vec<u8>>
where
    R: PageRenderer<Layout = PageLayout>,
{
    let layouts = page_layouts(story);
    let total = layouts.len();
    let mut rasters = Vec::with_capacity(total);

    for layout in &layouts {
        match renderer.render(layout) {
            Ok(raster) => {
                debug!(label = %layout.label(), "captured page");
                rasters.push(raster);
            }
            Err(error) => match policy {
                SkipPolicy::SkipFailed => {
                    warn!(label = %layout.label(), %error, "skipping failed page capture");
                }
                SkipPolicy::AbortOnError => {
                    return Err(ExportError::new(ExportErrorKind::Capture {
                        label: layout.label(),
                        message: error.to_string(),
                    })
                    .into());
                }
            },
        }
    }

    if rasters.is_empty() {
        return Err(ExportError::new(ExportErrorKind::Empty(total)).into());
    }
    debug!(captured = rasters.len(), total, "assembling document");
    pdf::assemble(&rasters)
}
