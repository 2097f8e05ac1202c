use serde::{Deserialize, Serialize};
use ts_rs::TS;

const PNG_SIGNATURE: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];
const GIF87_SIGNATURE: &[u8] = b"GIF87a";
const GIF89_SIGNATURE: &[u8] = b"GIF89a";
const BMP_SIGNATURE: &[u8] = b"BM";
const RIFF_SIGNATURE: &[u8] = b"RIFF";
const WEBP_SIGNATURE: &[u8] = b"WEBP";

/// Image type identified from the leading bytes of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Webp,
    Unknown,
}

impl ImageFormat {
    /// Identifies the format from magic bytes. Declared names and mime types
    /// are never consulted.
    pub fn sniff(data: &[u8]) -> Self {
        if data.starts_with(PNG_SIGNATURE) {
            Self::Png
        } else if data.starts_with(JPEG_SIGNATURE) {
            Self::Jpeg
        } else if data.starts_with(GIF87_SIGNATURE) || data.starts_with(GIF89_SIGNATURE) {
            Self::Gif
        } else if data.len() >= 12 && &data[0..4] == RIFF_SIGNATURE && &data[8..12] == WEBP_SIGNATURE
        {
            Self::Webp
        } else if data.starts_with(BMP_SIGNATURE) {
            Self::Bmp
        } else {
            Self::Unknown
        }
    }

    /// File extension used for stored files. JPEG is stored as `jpg`.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Webp => "webp",
            Self::Unknown => "bin",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Webp => "image/webp",
            Self::Unknown => "application/octet-stream",
        }
    }

    pub fn is_image(self) -> bool {
        self != Self::Unknown
    }
}
