//! Decode error types for structured-generation responses.

/// Decode error conditions.
///
/// A decode failure indicates a contract mismatch with the upstream model
/// (the text came back, but not in the agreed shape), which is distinct from
/// a service failure. User-facing messages must not leak the raw payload;
/// the payload is logged separately for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DecodeErrorKind {
    /// No JSON value could be located in the response text
    #[display("No JSON found in response ({} bytes)", response_len)]
    NoJson {
        /// Length of the response that was searched
        response_len: usize,
    },
    /// The JSON did not match the expected schema
    #[display("Response JSON did not match the expected {} shape: {}", shape, message)]
    SchemaMismatch {
        /// Name of the expected shape (e.g. "StoryDraft")
        shape: &'static str,
        /// Underlying serde error message
        message: String,
    },
    /// The draft declared a different page count than requested
    #[display("Draft contained {} pages, expected {}", actual, expected)]
    PageCountMismatch {
        /// Number of pages in the decoded draft
        actual: usize,
        /// Number of pages requested
        expected: usize,
    },
}

/// Decode error with source location tracking.
///
/// # Examples
///
/// ```
/// use ehon_error::{DecodeError, DecodeErrorKind};
///
/// let err = DecodeError::new(DecodeErrorKind::NoJson { response_len: 42 });
/// assert!(format!("{}", err).contains("No JSON"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Decode Error: {} at line {} in {}", kind, line, file)]
pub struct DecodeError {
    /// The kind of error that occurred
    pub kind: DecodeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DecodeError {
    /// Create a new DecodeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DecodeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
