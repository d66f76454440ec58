//! Pipeline error types.

/// Pipeline error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Another pipeline is already in flight for this session
    #[display("A pipeline is already in flight for this session")]
    Busy,
    /// A regeneration instruction targeted a page that does not exist
    #[display("No page with id {} in the current story", _0)]
    UnknownPage(u32),
    /// A mutating operation was requested before any story exists
    #[display("No story has been generated in this session")]
    NoStory,
}

/// Pipeline error with source location tracking.
///
/// These cover failures local to the pipeline machinery itself. Failures of
/// the underlying generation calls propagate unmodified; the abort guarantee
/// (no partial story committed, pre-pipeline state preserved) is behavioral
/// and holds for every error path.
///
/// # Examples
///
/// ```
/// use ehon_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::Busy);
/// assert!(format!("{}", err).contains("in flight"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The kind of error that occurred
    pub kind: PipelineErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
