//! The busy-gated story session.

use crate::{Orchestrator, RevisionHistory};
use ehon_core::{GenerationRequest, Story};
use ehon_error::{EhonResult, PipelineError, PipelineErrorKind};
use ehon_interface::{ImageSynthesizer, ProgressObserver, TextSynthesizer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::instrument;

/// RAII guard over the session's busy flag.
///
/// Acquired at pipeline entry and released on drop, so every exit path
/// (success, failure, early return) releases the gate.
#[derive(Debug)]
pub struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Owns a story's revision history and gates every mutating pipeline.
///
/// Exactly one pipeline (full generation, page regeneration, cover
/// regeneration, or export) may be in flight at a time; concurrent entry
/// fails fast with a `Busy` error. All history mutation happens here, by
/// committing fully-formed [`Story`] values. A failed pipeline commits
/// nothing and leaves the prior state current.
pub struct StorySession<T, I> {
    orchestrator: Orchestrator<T, I>,
    history: RevisionHistory,
    busy: Arc<AtomicBool>,
}

impl<T: TextSynthesizer, I: ImageSynthesizer> StorySession<T, I> {
    /// Create a session with no story yet.
    pub fn new(orchestrator: Orchestrator<T, I>) -> Self {
        Self {
            orchestrator,
            history: RevisionHistory::new(),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Acquire the busy gate for a pipeline that runs outside this session
    /// (document export). Mutating session commands fail with `Busy` while
    /// the guard lives.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineError`] with kind `Busy` if a pipeline is
    /// already in flight.
    pub fn begin_pipeline(&self) -> EhonResult<BusyGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| PipelineError::new(PipelineErrorKind::Busy))?;
        Ok(BusyGuard {
            flag: Arc::clone(&self.busy),
        })
    }

    /// True while a pipeline holds the gate.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Run a full generation and commit the result as the first snapshot
    /// of a fresh history.
    ///
    /// Starting a new book discards the previous story and its history.
    #[instrument(skip_all)]
    pub async fn generate(
        &mut self,
        request: &GenerationRequest,
        observer: &dyn ProgressObserver,
    ) -> EhonResult<Story> {
        let _guard = self.begin_pipeline()?;
        let story = self.orchestrator.generate(request, observer).await?;
        self.history.clear();
        self.history.commit(story.clone());
        Ok(story)
    }

    /// Regenerate one page of the current story and commit the result.
    #[instrument(skip(self, instruction))]
    pub async fn regenerate_page(&mut self, page_id: u32, instruction: &str) -> EhonResult<Story> {
        let _guard = self.begin_pipeline()?;
        let current = self
            .history
            .current()
            .ok_or_else(|| PipelineError::new(PipelineErrorKind::NoStory))?
            .clone();
        let story = self
            .orchestrator
            .regenerate_page(&current, page_id, instruction)
            .await?;
        self.history.commit(story.clone());
        Ok(story)
    }

    /// Regenerate the cover of the current story and commit the result.
    #[instrument(skip(self, instruction))]
    pub async fn regenerate_cover(&mut self, instruction: &str) -> EhonResult<Story> {
        let _guard = self.begin_pipeline()?;
        let current = self
            .history
            .current()
            .ok_or_else(|| PipelineError::new(PipelineErrorKind::NoStory))?
            .clone();
        let story = self
            .orchestrator
            .regenerate_cover(&current, instruction)
            .await?;
        self.history.commit(story.clone());
        Ok(story)
    }

    /// Commit a manual edit of one page's text as a new snapshot.
    ///
    /// The editing surface holds uncommitted working text; this is the
    /// explicit save, one snapshot per save rather than per keystroke.
    pub fn save_page_text(&mut self, page_id: u32, text: &str) -> EhonResult<Story> {
        let _guard = self.begin_pipeline()?;
        let current = self
            .history
            .current()
            .ok_or_else(|| PipelineError::new(PipelineErrorKind::NoStory))?;
        let story = current.with_page_text(page_id, text)?;
        self.history.commit(story.clone());
        Ok(story)
    }

    /// Undo the last committed change, if any.
    ///
    /// A no-op when only the initial snapshot remains.
    ///
    /// # Errors
    ///
    /// Returns `Busy` if a pipeline is in flight.
    pub fn undo(&mut self) -> EhonResult<()> {
        let _guard = self.begin_pipeline()?;
        self.history.undo();
        Ok(())
    }

    /// The current story, or `None` before the first successful generation.
    pub fn current(&self) -> Option<&Story> {
        self.history.current()
    }

    /// True when an undo would change the current story.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Number of snapshots in the history.
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    /// Discard the story and its entire history.
    pub fn restart(&mut self) -> EhonResult<()> {
        let _guard = self.begin_pipeline()?;
        self.history.clear();
        Ok(())
    }
}
