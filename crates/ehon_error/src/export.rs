//! Export error types.

/// Export error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExportErrorKind {
    /// A page failed to render or capture
    #[display("Failed to capture {}: {}", label, message)]
    Capture {
        /// Label of the logical page (e.g. "cover", "page 3")
        label: String,
        /// Underlying renderer error message
        message: String,
    },
    /// The illustration payload could not be decoded as an image
    #[display("Could not decode illustration: {}", _0)]
    ImageDecode(String),
    /// Encoding a rendered page failed
    #[display("Could not encode rendered page: {}", _0)]
    ImageEncode(String),
    /// The supplied text face could not be parsed as a font
    #[display("Could not parse font: {}", _0)]
    FontDecode(String),
    /// Assembling or serializing the output document failed
    #[display("Could not assemble document: {}", _0)]
    Assembly(String),
    /// Every page capture failed, leaving an empty document
    #[display("All {} page captures failed", _0)]
    Empty(usize),
}

/// Export error with source location tracking.
///
/// # Examples
///
/// ```
/// use ehon_error::{ExportError, ExportErrorKind};
///
/// let err = ExportError::new(ExportErrorKind::Empty(6));
/// assert!(format!("{}", err).contains("6"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// The kind of error that occurred
    pub kind: ExportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExportError {
    /// Create a new ExportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
