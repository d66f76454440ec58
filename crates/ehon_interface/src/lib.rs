//! Trait seams for the Ehon story synthesis engine.
//!
//! Every side effect the engine performs goes through one of the traits in
//! this crate: network calls through [`TextSynthesizer`] and
//! [`ImageSynthesizer`], progress reporting through [`ProgressObserver`],
//! and visual capture through [`PageRenderer`]. The pipeline and export
//! crates depend only on these seams, which is what makes them testable
//! with fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod progress;
mod render;
mod traits;
mod types;

pub use progress::{NullObserver, PipelineStage, ProgressObserver};
pub use render::{PageRenderer, RasterPage, PAGE_HEIGHT, PAGE_WIDTH};
pub use traits::{ImageSynthesizer, TextSynthesizer};
pub use types::StructuredRequest;
