//! Browser-side handle to a user-selected file.

use contracts::domain::{MediaFileId, MediaFileInfo};
use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Url};

/// Selected file plus its object-URL preview.
///
/// Not `Clone`: the preview URL is revoked when the value is dropped, i.e. when
/// the owning surface replaces or clears it, or unmounts.
#[derive(Debug)]
pub struct MediaFile {
    pub id: MediaFileId,
    pub file: File,
    pub preview_url: String,
}

impl MediaFile {
    pub fn from_file(file: File) -> Result<Self, String> {
        let preview_url = Url::create_object_url_with_blob(&file)
            .map_err(|e| format!("Failed to create preview for {}: {:?}", file.name(), e))?;
        Ok(Self {
            id: MediaFileId::new_v4(),
            file,
            preview_url,
        })
    }

    pub fn info(&self) -> MediaFileInfo {
        MediaFileInfo {
            id: self.id,
            name: self.file.name(),
            mime_type: self.file.type_(),
            size_bytes: self.file.size() as u64,
        }
    }
}

impl Drop for MediaFile {
    fn drop(&mut self) {
        if Url::revoke_object_url(&self.preview_url).is_err() {
            log::warn!("failed to revoke preview url {}", self.preview_url);
        }
    }
}

/// Reads the whole file into memory.
pub async fn read_bytes(file: &File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// "1.5 MB"-style size label
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }
}
