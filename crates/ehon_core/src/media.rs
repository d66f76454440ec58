//! Media payload types.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ehon_error::{EhonResult, GeminiError, GeminiErrorKind};
use serde::{Deserialize, Serialize};

/// Binary image payload with its MIME type.
///
/// Generated images travel through the engine as raw bytes; base64 is only
/// used at the wire boundary.
///
/// # Examples
///
/// ```
/// use ehon_core::ImageData;
///
/// let image = ImageData::new("image/png", vec![0x89, 0x50, 0x4e, 0x47]);
/// assert_eq!(image.mime(), "image/png");
/// assert!(!image.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    mime: String,
    data: Vec<u8>,
}

impl ImageData {
    /// Create an image payload from raw bytes.
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    /// Decode an image payload from a base64 string, as returned by the
    /// image-synthesis endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`GeminiError`] with kind `Base64Decode` if the string is
    /// not valid base64.
    pub fn from_base64(mime: impl Into<String>, encoded: &str) -> EhonResult<Self> {
        let data = STANDARD
            .decode(encoded)
            .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))?;
        Ok(Self::new(mime, data))
    }

    /// MIME type of the payload (e.g. "image/png").
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Raw image bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// True when the payload holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Encode the payload as base64 for the wire.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    /// Render the payload as a `data:` URI.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.to_base64())
    }
}

/// Aspect ratio for image synthesis.
///
/// The engine always requests landscape 4:3 frames so that generated art
/// fits the fixed export geometry, but the wire format is kept open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// Landscape 4:3 (the book page format)
    #[default]
    FourThirds,
    /// Square 1:1
    Square,
}

impl AspectRatio {
    /// The wire token the image endpoint expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::FourThirds => "4:3",
            AspectRatio::Square => "1:1",
        }
    }
}
