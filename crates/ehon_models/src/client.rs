//! Gemini REST client.

use crate::GeminiConfig;
use crate::wire::{
    ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, PredictInstance,
    PredictParameters, PredictRequest, PredictResponse,
};
use ehon_core::{AspectRatio, ImageData};
use ehon_error::{EhonResult, GeminiError, GeminiErrorKind};
use ehon_interface::{ImageSynthesizer, StructuredRequest, TextSynthesizer};
use reqwest::Client;
use tracing::{debug, error, instrument};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini generative API.
///
/// Implements both synthesizer seams: structured text via
/// `generateContent` (response schema pinned server-side) and image
/// synthesis via the Imagen `predict` endpoint. One network call per
/// invocation; no retry, no caching.
///
/// # Example
///
/// ```no_run
/// use ehon_models::{GeminiClient, GeminiConfig};
/// use ehon_interface::{StructuredRequest, TextSynthesizer};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::from_env()?;
/// let request = StructuredRequest::new(
///     "You are a children's book author.",
///     "Write a one-line story about a cat.",
///     serde_json::json!({"type": "object"}),
/// );
/// let text = client.generate_structured(&request).await?;
/// println!("{text}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
    base_url: String,
}

impl GeminiClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: GeminiConfig) -> Self {
        debug!(
            text_model = %config.text_model(),
            image_model = %config.image_model(),
            "Creating new Gemini client"
        );
        Self {
            client: Client::new(),
            config,
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// Create a client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`GeminiError`] with kind `MissingApiKey` if
    /// `GEMINI_API_KEY` is unset.
    pub fn from_env() -> EhonResult<Self> {
        Ok(Self::new(GeminiConfig::from_env()?))
    }

    /// Override the API base URL (tests against a local stub server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// POST a JSON body and decode the response, mapping transport and
    /// status failures to [`GeminiError`].
    async fn post_json<B, R>(&self, url: &str, body: &B) -> EhonResult<R>
    where
        B: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send request to Gemini API");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            // Prefer the upstream envelope message; fall back to the raw body.
            let message = serde_json::from_str::<ErrorEnvelope>(&raw)
                .map(|envelope| envelope.error.message)
                .unwrap_or(raw);
            error!(status = %status, message = %message, "Gemini API returned error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        response.json::<R>().await.map_err(|e| {
            error!(error = %e, "Failed to decode Gemini response envelope");
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "response envelope decode failed: {e}"
            )))
            .into()
        })
    }
}

#[async_trait::async_trait]
impl TextSynthesizer for GeminiClient {
    #[instrument(skip(self, request), fields(model = %self.config.text_model()))]
    async fn generate_structured(&self, request: &StructuredRequest) -> EhonResult<String> {
        debug!(
            prompt_len = request.prompt.len(),
            has_reference = request.reference_image.is_some(),
            "Sending structured generation request"
        );
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url,
            self.config.text_model()
        );
        let body = GenerateContentRequest::from_structured(request);
        let response: GenerateContentResponse = self.post_json(&url, &body).await?;

        let text = response
            .first_text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))?;
        debug!(response_len = text.len(), "Received structured response");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.config.text_model()
    }
}

#[async_trait::async_trait]
impl ImageSynthesizer for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.config.image_model(), prompt_len = prompt.len()))]
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> EhonResult<ImageData> {
        let url = format!(
            "{}/models/{}:predict",
            self.base_url,
            self.config.image_model()
        );
        let body = PredictRequest {
            instances: vec![PredictInstance {
                prompt: prompt.to_string(),
            }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: aspect_ratio.as_str().to_string(),
            },
        };
        let response: PredictResponse = self.post_json(&url, &body).await?;

        let prediction = response
            .predictions
            .into_iter()
            .next()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyPrediction))?;
        let mime = prediction
            .mime_type
            .unwrap_or_else(|| "image/png".to_string());
        let image = ImageData::from_base64(mime, &prediction.bytes_base64_encoded)?;
        debug!(bytes = image.data().len(), "Received synthesized image");
        Ok(image)
    }

    fn image_model_name(&self) -> &str {
        self.config.image_model()
    }
}
