//! Wire types for the Gemini REST API.
//!
//! Request bodies are built from the seam types in `ehon_interface`;
//! responses decode into these structs before any field access, so a shape
//! mismatch fails in exactly one place.

use ehon_interface::StructuredRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Generate content (structured text)
// ============================================================================

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    #[serde(rename = "systemInstruction")]
    pub system_instruction: ContentPayload,
    pub contents: Vec<ContentPayload>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

/// A role-tagged list of parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// One part of a content payload: text or inline media.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

/// Inline base64 media.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

/// Generation configuration pinning the structured output contract.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: Value,
}

impl GenerateContentRequest {
    /// Build the request body from a structured request.
    pub fn from_structured(request: &StructuredRequest) -> Self {
        let mut parts = vec![Part {
            text: Some(request.prompt.clone()),
            inline_data: None,
        }];
        if let Some(reference) = &request.reference_image {
            parts.push(Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: reference.mime().to_string(),
                    data: reference.to_base64(),
                }),
            });
        }
        Self {
            system_instruction: ContentPayload {
                role: None,
                parts: vec![Part {
                    text: Some(request.system_instruction.clone()),
                    inline_data: None,
                }],
            },
            contents: vec![ContentPayload {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: request.response_schema.clone(),
            },
        }
    }
}

/// Response envelope for `generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<ContentPayload>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts, if any.
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

// ============================================================================
// Predict (image synthesis)
// ============================================================================

/// Request body for `models/{model}:predict`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub instances: Vec<PredictInstance>,
    pub parameters: PredictParameters,
}

/// One prompt instance.
#[derive(Debug, Clone, Serialize)]
pub struct PredictInstance {
    pub prompt: String,
}

/// Synthesis parameters. Sample count is always 1: the engine wants exactly
/// one image per call and pays per sample.
#[derive(Debug, Clone, Serialize)]
pub struct PredictParameters {
    #[serde(rename = "sampleCount")]
    pub sample_count: u32,
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: String,
}

/// Response envelope for `predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

/// One synthesized image.
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    #[serde(rename = "bytesBase64Encoded")]
    pub bytes_base64_encoded: String,
    #[serde(rename = "mimeType", default)]
    pub mime_type: Option<String>,
}

// ============================================================================
// Error envelope
// ============================================================================

/// Upstream error envelope `{error: {message, ...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// The error body carried on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ehon_core::ImageData;

    #[test]
    fn structured_request_serializes_schema_and_mime() {
        let structured = StructuredRequest::new(
            "system",
            "prompt",
            serde_json::json!({"type": "object"}),
        );
        let body = GenerateContentRequest::from_structured(&structured);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "object");
        assert_eq!(json["contents"][0]["role"], "user");
    }

    #[test]
    fn reference_image_becomes_inline_data() {
        let structured = StructuredRequest::new("s", "p", serde_json::json!({}))
            .with_reference_image(ImageData::new("image/png", vec![1, 2]));
        let body = GenerateContentRequest::from_structured(&structured);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][1]["inlineData"]["mimeType"], "image/png");
    }

    #[test]
    fn first_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"a\""}, {"text": ": 1}"}]}
            }]
        }))
        .unwrap();
        assert_eq!(response.first_text().unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(response.first_text().is_none());
    }
}
