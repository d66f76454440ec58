//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// API request failed before a response was received
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and upstream message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the upstream envelope
        message: String,
    },
    /// Response envelope contained no candidate text
    #[display("Gemini response contained no candidate text")]
    EmptyResponse,
    /// Image synthesis response contained no prediction
    #[display("Image synthesis response contained no prediction")]
    EmptyPrediction,
    /// Base64 decoding of image payload failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
}

impl GeminiErrorKind {
    /// True when the kind represents an upstream service failure rather
    /// than a local or contract problem.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::ApiRequest(_) | GeminiErrorKind::HttpError { .. }
        )
    }
}

/// Gemini error with source location tracking.
///
/// Errors from the generation client propagate unmodified through the
/// orchestrator to the caller; the engine adds no retry or fallback because
/// generation costs money and silent retries would double-bill.
///
/// # Examples
///
/// ```
/// use ehon_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Upstream HTTP status code, when the failure carries one.
    pub fn status_code(&self) -> Option<u16> {
        match &self.kind {
            GeminiErrorKind::HttpError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
