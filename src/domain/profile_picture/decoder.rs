use super::{errors::ImageUploadError, format::ImageFormat};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use uuid::Uuid;

const DATA_URI_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";
const GENERATED_NAME_LEN: usize = 12;

/// An inbound picture field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageUploadValue {
    /// File content already received as bytes, with the client's file name.
    Raw { bytes: Vec<u8>, declared_name: String },
    /// Bare base64 or `data:<mime>;base64,<payload>`.
    EncodedString(String),
}

impl From<String> for ImageUploadValue {
    fn from(value: String) -> Self {
        Self::EncodedString(value)
    }
}

/// A named file ready to be handed to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImageArtifact {
    pub file_name: String,
    pub content: Vec<u8>,
    pub format: ImageFormat,
}

impl DecodedImageArtifact {
    pub fn content_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

pub struct Base64ImageDecoder;

impl Base64ImageDecoder {
    /// Turns a picture field value into a storable artifact.
    ///
    /// Raw uploads pass through untouched. Encoded strings are stripped of any
    /// data-URI header, decoded, sniffed and given a fresh 12 character name.
    /// Performs no I/O.
    pub fn decode(value: ImageUploadValue) -> Result<DecodedImageArtifact, ImageUploadError> {
        match value {
            ImageUploadValue::Raw {
                bytes,
                declared_name,
            } => {
                let format = ImageFormat::sniff(&bytes);
                Ok(DecodedImageArtifact {
                    file_name: declared_name,
                    content: bytes,
                    format,
                })
            }
            ImageUploadValue::EncodedString(text) => Self::decode_encoded(&text),
        }
    }

    fn decode_encoded(text: &str) -> Result<DecodedImageArtifact, ImageUploadError> {
        let payload = extract_payload(text);
        let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();

        let content = STANDARD.decode(compact.as_bytes()).map_err(|err| {
            tracing::debug!(error = %err, "rejected malformed base64 image payload");
            ImageUploadError::InvalidImage
        })?;

        let format = ImageFormat::sniff(&content);
        let file_name = generate_file_name(format);
        tracing::debug!(file_name = %file_name, bytes = content.len(), "decoded base64 image");

        Ok(DecodedImageArtifact {
            file_name,
            content,
            format,
        })
    }
}

/// Everything after the first `;base64,` when the text is a data URI,
/// otherwise the text itself.
fn extract_payload(text: &str) -> &str {
    if text.contains(DATA_URI_SCHEME) {
        if let Some((_, payload)) = text.split_once(BASE64_MARKER) {
            return payload;
        }
    }
    text
}

/// A fresh `<12 hex chars>.<ext>` name for `format`.
pub(crate) fn generate_file_name(format: ImageFormat) -> String {
    let mut name = Uuid::new_v4().simple().to_string();
    name.truncate(GENERATED_NAME_LEN);
    format!("{}.{}", name, format.extension())
}
