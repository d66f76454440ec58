//! Core data types for the Ehon story synthesis engine.
//!
//! This crate provides the foundation data types shared across the Ehon
//! workspace: the [`Story`] artifact and its pages, the media payloads
//! attached to them, the bounded request enums, and the typed decode targets
//! for structured-generation responses.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod draft;
mod media;
mod request;
mod story;
mod style;

pub use draft::{CoverRegenResult, DraftPage, PageRegenResult, StoryDraft};
pub use media::{AspectRatio, ImageData};
pub use request::{
    GenerationRequest, GenerationRequestBuilder, RegenTarget, RegenerationInstruction,
};
pub use story::{Page, Story};
pub use style::{ArtStyle, PageCount, Theme};
