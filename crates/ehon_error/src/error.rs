//! Top-level error wrapper types.

use crate::{DecodeError, ExportError, GeminiError, PipelineError, ValidationError};

/// The foundation error enum for the Ehon workspace.
///
/// # Examples
///
/// ```
/// use ehon_error::{EhonError, ValidationError};
///
/// let val_err = ValidationError::new("idea must not be empty");
/// let err: EhonError = val_err.into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum EhonErrorKind {
    /// Malformed input rejected before any network call
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Upstream generation service failure
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Structured response did not match the expected shape
    #[from(DecodeError)]
    Decode(DecodeError),
    /// Multi-call pipeline failure
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Document export failure
    #[from(ExportError)]
    Export(ExportError),
}

/// Ehon error with kind discrimination.
///
/// # Examples
///
/// ```
/// use ehon_error::{EhonResult, GeminiError, GeminiErrorKind};
///
/// fn might_fail() -> EhonResult<()> {
///     Err(GeminiError::new(GeminiErrorKind::MissingApiKey))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Ehon Error: {}", _0)]
pub struct EhonError(Box<EhonErrorKind>);

impl EhonError {
    /// Create a new error from a kind.
    pub fn new(kind: EhonErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &EhonErrorKind {
        &self.0
    }

    /// True when the error originated from the upstream generation service
    /// (connectivity or non-success status) rather than a local contract
    /// or validation problem.
    pub fn is_upstream(&self) -> bool {
        matches!(self.kind(), EhonErrorKind::Gemini(e) if e.kind.is_upstream())
    }
}

// Generic From implementation for any type that converts to EhonErrorKind
impl<T> From<T> for EhonError
where
    T: Into<EhonErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Ehon operations.
///
/// # Examples
///
/// ```
/// use ehon_error::{EhonResult, ValidationError};
///
/// fn check(count: u32) -> EhonResult<()> {
///     if count == 0 {
///         Err(ValidationError::new("count must be positive"))?;
///     }
///     Ok(())
/// }
/// ```
pub type EhonResult<T> = std::result::Result<T, EhonError>;
