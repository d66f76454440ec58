//! Deterministic prompt and request assembly for the Ehon engine.
//!
//! Everything in this crate is a pure function from validated inputs to
//! request payloads: no I/O, no clock, no randomness. Input validity (page
//! count bounds, non-empty ideas) is enforced by the types in `ehon_core`
//! before a request ever reaches this crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod regen;
mod schema;
mod story;

pub use image::{cover_image_prompt, page_image_prompt};
pub use regen::{cover_regen_request, page_regen_request};
pub use schema::{cover_regen_schema, page_regen_schema, story_schema};
pub use story::story_request;
