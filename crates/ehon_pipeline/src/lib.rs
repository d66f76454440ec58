//! Synthesis orchestrator and revision history for the Ehon engine.
//!
//! This crate drives the multi-call pipelines that turn a story idea into a
//! complete illustrated book and that regenerate a single page or the
//! cover. It owns the revision history (an append-only snapshot stack with
//! undo) and the busy-gated [`StorySession`] that fronts every mutating
//! pipeline.
//!
//! # Pipelines
//!
//! Full generation: one structured text call, then the cover image, then
//! one image per page (sequentially by default, optionally in parallel).
//! Regeneration: one structured call then one image call, atomic, so no
//! partial replacement is ever surfaced.
//!
//! # Example
//!
//! ```rust,ignore
//! use ehon_pipeline::{Orchestrator, StorySession};
//! use ehon_models::GeminiClient;
//! use ehon_core::GenerationRequest;
//! use ehon_interface::NullObserver;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env()?;
//! let orchestrator = Orchestrator::new(client.clone(), client);
//! let mut session = StorySession::new(orchestrator);
//!
//! let request = GenerationRequest::builder()
//!     .idea("a cat named Sora visits the moon")
//!     .build()?;
//! let story = session.generate(&request, &NullObserver).await?;
//! println!("{} pages", story.pages().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decode;
mod history;
mod orchestrator;
mod session;

pub use decode::{decode_cover_regen, decode_page_regen, decode_story_draft, extract_json};
pub use history::RevisionHistory;
pub use orchestrator::{ImagePolicy, Orchestrator};
pub use session::{BusyGuard, StorySession};
