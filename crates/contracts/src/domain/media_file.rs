use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of an uploaded media file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaFileId(pub Uuid);

impl MediaFileId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for MediaFileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata of a user-selected file. The bytes stay in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFileInfo {
    pub id: MediaFileId,
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// Supported image upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    WebP,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.to_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Detects the format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Self::Png);
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        // WebP: RIFF....WEBP
        if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some(Self::WebP);
        }

        None
    }

    /// Magic bytes win over the browser-reported MIME type. The MIME type is
    /// only consulted when there is no content to inspect; non-empty data that
    /// matches no signature is rejected whatever its label says.
    pub fn detect(data: &[u8], mime: &str) -> Result<Self, ValidationError> {
        let detected = if data.is_empty() {
            Self::from_mime(mime)
        } else {
            Self::from_magic_bytes(data)
        };
        detected.ok_or_else(|| {
            let shown = if mime.is_empty() { "unknown type" } else { mime };
            ValidationError::UnsupportedImage(format!("{} (expected PNG, JPEG or WebP)", shown))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 12] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

    #[test]
    fn test_magic_bytes() {
        assert_eq!(ImageFormat::from_magic_bytes(&PNG_HEADER), Some(ImageFormat::Png));
        assert_eq!(
            ImageFormat::from_magic_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_magic_bytes(b"RIFF\x24\x00\x00\x00WEBPVP8 "),
            Some(ImageFormat::WebP)
        );
        assert_eq!(ImageFormat::from_magic_bytes(b"GIF89a"), None);
        assert_eq!(ImageFormat::from_magic_bytes(&[]), None);
    }

    #[test]
    fn test_detect_prefers_content_over_mime() {
        assert_eq!(ImageFormat::detect(&PNG_HEADER, "image/jpeg"), Ok(ImageFormat::Png));
        assert_eq!(ImageFormat::detect(&[], "image/webp"), Ok(ImageFormat::WebP));
        assert!(matches!(
            ImageFormat::detect(b"GIF89a", "image/gif"),
            Err(ValidationError::UnsupportedImage(_))
        ));
    }

    #[test]
    fn test_detect_rejects_mislabeled_content() {
        assert!(matches!(
            ImageFormat::detect(b"GIF89a\x01\x00\x01\x00", "image/png"),
            Err(ValidationError::UnsupportedImage(_))
        ));
        assert!(matches!(
            ImageFormat::detect(b"hello, not an image", "image/jpeg"),
            Err(ValidationError::UnsupportedImage(_))
        ));
        assert!(ImageFormat::detect(&[], "image/gif").is_err());
    }

    #[test]
    fn test_media_file_id_display() {
        let id = MediaFileId::new(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
        assert_ne!(MediaFileId::new_v4(), MediaFileId::new_v4());
    }
}
