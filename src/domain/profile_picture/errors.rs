use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ImageUploadError {
    /// The payload was not valid base64, or the upload carried no usable file.
    #[error(
        "Upload a valid image. The file you uploaded was either not an image or a corrupted image."
    )]
    InvalidImage,
    /// Decoded content matched none of the known image signatures.
    #[error("Unsupported image format. Upload a PNG, JPEG, GIF, BMP or WEBP image.")]
    UnrecognizedImageFormat,
}
