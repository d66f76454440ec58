//! Append-only revision history with undo.

use ehon_core::Story;
use tracing::debug;

/// An append-only stack of complete [`Story`] snapshots.
///
/// The current story is always the last element. Undo pops the last element
/// provided more than one remains: the initial post-generation snapshot can
/// never be undone past. Depth is unbounded; sessions are short-lived and
/// snapshots are independent values, so no cap is applied.
///
/// The history is exclusively owned by [`crate::StorySession`]; every
/// mutation is the commit of a new, fully-formed story value. No partial or
/// invalid story is ever committed.
///
/// # Examples
///
/// ```
/// use ehon_pipeline::RevisionHistory;
///
/// let history = RevisionHistory::new();
/// assert!(history.current().is_none());
/// assert!(!history.can_undo());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RevisionHistory {
    snapshots: Vec<Story>,
}

impl RevisionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a story as the new current value.
    pub fn commit(&mut self, story: Story) {
        debug!(depth = self.snapshots.len() + 1, "Committing story snapshot");
        self.snapshots.push(story);
    }

    /// The current story, or `None` before the first commit.
    pub fn current(&self) -> Option<&Story> {
        self.snapshots.last()
    }

    /// Remove the last snapshot if more than one remains.
    ///
    /// A no-op when undo is not possible, so calling it at the boundary is
    /// always safe.
    pub fn undo(&mut self) {
        if self.can_undo() {
            self.snapshots.pop();
            debug!(depth = self.snapshots.len(), "Undid last snapshot");
        }
    }

    /// True when an undo would change the current story.
    pub fn can_undo(&self) -> bool {
        self.snapshots.len() > 1
    }

    /// Number of snapshots held.
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Discard all snapshots (session restart).
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ehon_core::{ArtStyle, ImageData, Page};

    fn story(title: &str) -> Story {
        let image = ImageData::new("image/png", vec![1]);
        Story::new(
            title,
            image.clone(),
            "a small white cat",
            ArtStyle::Watercolor,
            vec![Page::new(1, "text", image, None)],
            "end",
        )
        .unwrap()
    }

    #[test]
    fn commit_then_undo_restores_the_previous_snapshot() {
        let mut history = RevisionHistory::new();
        let a = story("A");
        let b = story("B");
        history.commit(a.clone());
        history.commit(b);
        assert!(history.can_undo());
        history.undo();
        assert_eq!(history.current(), Some(&a));
    }

    #[test]
    fn undo_never_pops_the_last_snapshot() {
        let mut history = RevisionHistory::new();
        let a = story("A");
        history.commit(a.clone());
        assert!(!history.can_undo());
        history.undo();
        assert_eq!(history.current(), Some(&a));
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut history = RevisionHistory::new();
        history.undo();
        assert!(history.current().is_none());
    }

    #[test]
    fn undo_is_idempotent_at_the_boundary() {
        let mut history = RevisionHistory::new();
        history.commit(story("A"));
        history.commit(story("B"));
        history.undo();
        let at_floor = history.current().cloned();
        history.undo();
        history.undo();
        assert_eq!(history.current().cloned(), at_floor);
    }
}
