//! Client configuration from the environment.

use ehon_error::{EhonResult, GeminiError, GeminiErrorKind};
use std::env;

/// Default model for structured story text.
const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Default model for image synthesis.
const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";

/// Configuration for [`crate::GeminiClient`].
///
/// Resolved from the environment:
/// - `GEMINI_API_KEY` (required)
/// - `EHON_TEXT_MODEL` (optional, defaults to `gemini-2.5-flash`)
/// - `EHON_IMAGE_MODEL` (optional, defaults to `imagen-3.0-generate-002`)
///
/// A `.env` file is loaded best-effort before reading.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub(crate) api_key: String,
    pub(crate) text_model: String,
    pub(crate) image_model: String,
}

impl GeminiConfig {
    /// Build a configuration explicitly (tests, embedding callers).
    pub fn new(
        api_key: impl Into<String>,
        text_model: impl Into<String>,
        image_model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            text_model: text_model.into(),
            image_model: image_model.into(),
        }
    }

    /// Resolve configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`GeminiError`] with kind `MissingApiKey` if
    /// `GEMINI_API_KEY` is unset.
    pub fn from_env() -> EhonResult<Self> {
        let _ = dotenvy::dotenv();
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        let text_model =
            env::var("EHON_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string());
        let image_model =
            env::var("EHON_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());
        Ok(Self {
            api_key,
            text_model,
            image_model,
        })
    }

    /// Model used for structured text calls.
    pub fn text_model(&self) -> &str {
        &self.text_model
    }

    /// Model used for image calls.
    pub fn image_model(&self) -> &str {
        &self.image_model
    }
}
