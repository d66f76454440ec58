//! Error types for the Ehon story synthesis engine.
//!
//! This crate provides the foundation error types used throughout the Ehon
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use ehon_error::{EhonResult, ValidationError};
//!
//! fn check_idea(idea: &str) -> EhonResult<()> {
//!     if idea.trim().is_empty() {
//!         Err(ValidationError::new("idea must not be empty"))?;
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_idea("").is_err());
//! assert!(check_idea("a cat visits the moon").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decode;
mod error;
mod export;
mod gemini;
mod pipeline;
mod validation;

pub use decode::{DecodeError, DecodeErrorKind};
pub use error::{EhonError, EhonErrorKind, EhonResult};
pub use export::{ExportError, ExportErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use validation::ValidationError;
