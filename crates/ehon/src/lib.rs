#![forbid(unsafe_code)]
#![warn(missing_docs)]
//! Ehon - Illustrated Storybook Synthesis Engine
//!
//! Ehon turns a one-line story idea into a complete illustrated children's
//! book: one structured text-generation call produces the title, character
//! description, pages, and afterword, then one image call per illustration
//! (cover plus every page) fills in the artwork. Finished stories support
//! targeted revision (regenerate one page or the cover), manual text edits
//! with undo, and fixed-geometry PDF export.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ehon::{
//!     GeminiClient, GenerationRequest, NullObserver, Orchestrator, StorySession,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::from_env()?;
//!     let orchestrator = Orchestrator::new(client.clone(), client);
//!     let mut session = StorySession::new(orchestrator);
//!
//!     let request = GenerationRequest::builder()
//!         .idea("a cat named Sora visits the moon")
//!         .build()?;
//!     let story = session.generate(&request, &NullObserver).await?;
//!     println!("{}", story.title());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Ehon is organized as a workspace with focused crates:
//!
//! - `ehon_error` - Error types
//! - `ehon_core` - Story, page, and request data types
//! - `ehon_interface` - Synthesizer, observer, and renderer traits
//! - `ehon_prompt` - Prompt and response-schema construction
//! - `ehon_models` - Gemini and Imagen API clients
//! - `ehon_pipeline` - Generation orchestrator, sessions, revision history
//! - `ehon_export` - Fixed-geometry PDF export
//!
//! This crate (`ehon`) re-exports everything for convenience.

pub use ehon_core::*;
pub use ehon_error::*;
pub use ehon_export::*;
pub use ehon_interface::*;
pub use ehon_models::*;
pub use ehon_pipeline::*;
pub use ehon_prompt::*;
