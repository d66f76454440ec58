//! Request types carried across the synthesizer seam.

use ehon_core::ImageData;
use serde::{Deserialize, Serialize};

/// A structured-generation request: prompt text plus the JSON schema the
/// response must satisfy.
///
/// The prompt assembler builds these; the generation client sends them. The
/// schema is forwarded verbatim as the endpoint's `responseSchema`, so the
/// model is constrained to the agreed shape rather than trusted to follow
/// instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredRequest {
    /// System instruction fixing tone and audience
    pub system_instruction: String,
    /// User-facing prompt text
    pub prompt: String,
    /// JSON schema for the response body
    pub response_schema: serde_json::Value,
    /// Optional inline reference image (e.g. a child's drawing of the hero)
    pub reference_image: Option<ImageData>,
}

impl StructuredRequest {
    /// Create a structured request without a reference image.
    pub fn new(
        system_instruction: impl Into<String>,
        prompt: impl Into<String>,
        response_schema: serde_json::Value,
    ) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            prompt: prompt.into(),
            response_schema,
            reference_image: None,
        }
    }

    /// Attach a reference image to the request.
    pub fn with_reference_image(mut self, image: ImageData) -> Self {
        self.reference_image = Some(image);
        self
    }
}
