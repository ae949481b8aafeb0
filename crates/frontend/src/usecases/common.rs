//! Steps shared by the feature surfaces when preparing a request.

use contracts::domain::{ImageFormat, ProcessingState};
use leptos::prelude::*;
use serde::Serialize;
use web_sys::File;

use crate::shared::media_file::read_bytes;

/// Reads the upload and detects its format, reporting progress along the way.
pub async fn load_image(
    file: &File,
    processing: RwSignal<ProcessingState>,
) -> Result<ImageFormat, String> {
    let bytes = read_bytes(file).await?;
    let _ = processing.try_update(|p| *p = p.step("Checking image format", 50.0));
    ImageFormat::detect(&bytes, &file.type_()).map_err(|e| e.to_string())
}

pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize request: {}", e))
}

/// Final state write; ignored when the surface was unmounted meanwhile.
pub fn finish(
    result: Result<String, String>,
    processing: RwSignal<ProcessingState>,
    request_json: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
) {
    match result {
        Ok(json) => {
            log::info!("request prepared ({} bytes)", json.len());
            let _ = processing.try_set(ProcessingState::finished("Request ready"));
            let _ = request_json.try_set(Some(json));
        }
        Err(e) => {
            log::warn!("request preparation failed: {}", e);
            let _ = processing.try_set(ProcessingState::failed("Preparation failed"));
            let _ = error.try_set(Some(e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::{DurationBounds, VideoGenConfig, VideoGenerationRequest};

    #[test]
    fn test_to_pretty_json() {
        let bounds = DurationBounds::default();
        let mut config = VideoGenConfig::new(&bounds);
        config.prompt = "Sunrise over dunes".to_string();
        let request = VideoGenerationRequest::new(&config, &bounds).unwrap();

        let json = to_pretty_json(&request).unwrap();
        assert!(json.contains("\"prompt\": \"Sunrise over dunes\""));
        assert!(json.contains("\"orientation\": \"16:9\""));
        assert!(json.lines().count() > 1);
    }
}
