//! Generative model client for the Ehon engine.
//!
//! This crate is the only place in the workspace that performs network
//! calls. [`GeminiClient`] implements both synthesizer seams from
//! `ehon_interface`: structured text generation via the `generateContent`
//! endpoint (with a pinned JSON response schema) and image synthesis via
//! the Imagen `predict` endpoint.
//!
//! The client deliberately has no retry and no caching: failures surface
//! verbatim so the caller decides whether to spend money again.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod wire;

pub use client::GeminiClient;
pub use config::GeminiConfig;
