//! Pipeline progress reporting.

use ehon_core::Story;

/// Stages of the full-generation pipeline, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// Waiting to start
    Idle,
    /// Structured text call in flight
    TextGenerating,
    /// Cover image call in flight
    CoverImageGenerating,
    /// Page image call in flight for the given 1-based page id
    PageImageGenerating(u32),
    /// All calls succeeded
    Complete,
    /// The pipeline aborted
    Failed,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineStage::Idle => write!(f, "idle"),
            PipelineStage::TextGenerating => write!(f, "text generation"),
            PipelineStage::CoverImageGenerating => write!(f, "cover image generation"),
            PipelineStage::PageImageGenerating(id) => write!(f, "page {id} image generation"),
            PipelineStage::Complete => write!(f, "complete"),
            PipelineStage::Failed => write!(f, "failed"),
        }
    }
}

/// Observer for pipeline progress and progressive story assembly.
///
/// The orchestrator calls `stage` at each transition and `partial` whenever
/// the in-progress story gains new content (cover attached, page image
/// attached). Partial values are working copies for display only; they are
/// never committed to history.
pub trait ProgressObserver: Send + Sync {
    /// A pipeline stage transition occurred.
    fn stage(&self, stage: PipelineStage);

    /// The in-progress story gained content. Pages whose images have not
    /// yet been generated carry empty image payloads.
    fn partial(&self, story: &Story) {
        let _ = story;
    }
}

/// Observer that discards all progress reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ProgressObserver for NullObserver {
    fn stage(&self, _stage: PipelineStage) {}
}
