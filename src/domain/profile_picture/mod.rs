//! Profile picture uploads.
//!
//! A picture arrives either as an uploaded file or as a base64 string (bare or
//! wrapped in a `data:` URI). [`Base64ImageDecoder`] turns either form into a
//! [`DecodedImageArtifact`]; [`validate_artifact`] then applies the image field
//! rules before anything is handed to storage.

pub mod decoder;
pub mod errors;
pub mod format;

pub use decoder::{Base64ImageDecoder, DecodedImageArtifact, ImageUploadValue};
pub use errors::ImageUploadError;
pub use format::ImageFormat;

/// Request field name the picture is reported under.
pub const PROFILE_PICTURE_FIELD: &str = "profile_picture";

/// Rejects artifacts that cannot be stored as an image.
///
/// The decoder accepts any well-formed base64; this is where non-image
/// content and nameless raw uploads are turned away.
pub fn validate_artifact(artifact: &DecodedImageArtifact) -> Result<(), ImageUploadError> {
    if artifact.file_name.trim().is_empty() || artifact.content.is_empty() {
        return Err(ImageUploadError::InvalidImage);
    }
    if artifact.format == ImageFormat::Unknown {
        return Err(ImageUploadError::UnrecognizedImageFormat);
    }
    Ok(())
}

/// Decodes and validates an optional picture field in one step.
///
/// `None` means the field was absent and short-circuits the decoder.
pub fn decode_optional(
    value: Option<ImageUploadValue>,
) -> Result<Option<DecodedImageArtifact>, ImageUploadError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let artifact = Base64ImageDecoder::decode(value)?;
    validate_artifact(&artifact)?;
    Ok(Some(artifact))
}

/// Storage key for an artifact under `prefix`.
///
/// The object name is always generated from the sniffed format. A client's
/// declared file name never reaches the bucket, so two uploads of
/// `avatar.png` cannot overwrite each other.
pub fn storage_key(prefix: &str, artifact: &DecodedImageArtifact) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        decoder::generate_file_name(artifact.format)
    )
}
