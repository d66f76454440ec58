//! Synthesizer trait definitions.

use crate::StructuredRequest;
use async_trait::async_trait;
use ehon_core::{AspectRatio, ImageData};
use ehon_error::EhonResult;
use std::sync::Arc;

/// Structured text generation against an external model endpoint.
///
/// Implementations perform exactly one network call per invocation: no
/// caching, no retry. Retry policy belongs to the transport layer or the
/// caller, never to the engine.
#[async_trait]
pub trait TextSynthesizer: Send + Sync {
    /// Issue a structured-generation request and return the raw response
    /// text (expected to be JSON matching the request's schema).
    async fn generate_structured(&self, request: &StructuredRequest) -> EhonResult<String>;

    /// Provider name (e.g. "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used for structured text calls.
    fn model_name(&self) -> &str;
}

/// Image synthesis against an external model endpoint.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    /// Synthesize one image from a prompt at the given aspect ratio.
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> EhonResult<ImageData>;

    /// Model identifier used for image calls.
    fn image_model_name(&self) -> &str;

    /// Maximum prompt length accepted by the image endpoint, in bytes.
    /// Callers truncate composed prompts to this budget before dispatch.
    fn max_prompt_bytes(&self) -> usize {
        4096
    }
}

// Shared handles are synthesizers too, so one client can serve both seams.

#[async_trait]
impl<T: TextSynthesizer + ?Sized> TextSynthesizer for Arc<T> {
    async fn generate_structured(&self, request: &StructuredRequest) -> EhonResult<String> {
        (**self).generate_structured(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: ImageSynthesizer + ?Sized> ImageSynthesizer for Arc<T> {
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> EhonResult<ImageData> {
        (**self).generate_image(prompt, aspect_ratio).await
    }

    fn image_model_name(&self) -> &str {
        (**self).image_model_name()
    }

    fn max_prompt_bytes(&self) -> usize {
        (**self).max_prompt_bytes()
    }
}
