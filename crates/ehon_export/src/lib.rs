#![forbid(unsafe_code)]
#![warn(missing_docs)]
//! Fixed-geometry document export for the Ehon story engine.
//!
//! A story of N pages always exports as an N + 2 page document in reading
//! order: cover, body pages, afterword. Every document page is captured at
//! the fixed 800x600 landscape geometry defined in [`ehon_interface`],
//! then assembled into a single PDF.
//!
//! The capture loop is decoupled from any particular renderer through the
//! [`PageRenderer`](ehon_interface::PageRenderer) trait; this crate ships
//! [`IllustrationRenderer`], a headless raster renderer built on the
//! `image` and `imageproc` crates that draws the title, page prose, and
//! afterword alongside the illustrations.

mod capture;
mod layout;
mod pdf;
mod raster;

pub use capture::{SkipPolicy, export_story};
pub use layout::{PageLayout, page_layouts};
pub use raster::IllustrationRenderer;
