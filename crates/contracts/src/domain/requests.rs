//! Validated requests produced by the feature surfaces.

use crate::domain::{
    DurationBounds, EnhancementConfig, ImageFormat, MediaFileInfo, VideoGenConfig,
};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Prompt used when a logo animation is requested without one
pub const DEFAULT_LOGO_PROMPT: &str =
    "Animate this logo with smooth, professional motion and a clean reveal";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancementRequest {
    pub source: MediaFileInfo,
    pub format: ImageFormat,
    pub config: EnhancementConfig,
}

impl EnhancementRequest {
    pub fn new(
        source: MediaFileInfo,
        format: ImageFormat,
        config: &EnhancementConfig,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            source,
            format,
            config: config.normalized()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoGenerationRequest {
    pub config: VideoGenConfig,
}

impl VideoGenerationRequest {
    pub fn new(config: &VideoGenConfig, bounds: &DurationBounds) -> Result<Self, ValidationError> {
        config.validate(bounds, true)?;
        let mut config = config.clone();
        config.prompt = config.prompt.trim().to_string();
        Ok(Self { config })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoAnimationRequest {
    pub logo: MediaFileInfo,
    pub format: ImageFormat,
    pub config: VideoGenConfig,
}

impl LogoAnimationRequest {
    /// A blank prompt is replaced with [`DEFAULT_LOGO_PROMPT`].
    pub fn new(
        logo: MediaFileInfo,
        format: ImageFormat,
        config: &VideoGenConfig,
        bounds: &DurationBounds,
    ) -> Result<Self, ValidationError> {
        config.validate(bounds, false)?;
        let mut config = config.clone();
        config.prompt = match config.prompt.trim() {
            "" => DEFAULT_LOGO_PROMPT.to_string(),
            p => p.to_string(),
        };
        Ok(Self {
            logo,
            format,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EnhancementMode, MediaFileId, VideoStyle};
    use uuid::Uuid;

    fn logo_file() -> MediaFileInfo {
        MediaFileInfo {
            id: MediaFileId::new(Uuid::nil()),
            name: "logo.png".to_string(),
            mime_type: "image/png".to_string(),
            size_bytes: 2048,
        }
    }

    #[test]
    fn test_logo_request_falls_back_to_stock_prompt() {
        let bounds = DurationBounds::default();
        let config = VideoGenConfig::new(&bounds);
        let request =
            LogoAnimationRequest::new(logo_file(), ImageFormat::Png, &config, &bounds).unwrap();
        assert_eq!(request.config.prompt, DEFAULT_LOGO_PROMPT);

        let mut config = VideoGenConfig::new(&bounds);
        config.prompt = "  spin once  ".to_string();
        let request =
            LogoAnimationRequest::new(logo_file(), ImageFormat::Png, &config, &bounds).unwrap();
        assert_eq!(request.config.prompt, "spin once");
    }

    #[test]
    fn test_video_request_requires_prompt() {
        let bounds = DurationBounds::default();
        let mut config = VideoGenConfig::new(&bounds);
        assert_eq!(
            VideoGenerationRequest::new(&config, &bounds),
            Err(ValidationError::EmptyPrompt)
        );

        config.prompt = "Rain on a tin roof".to_string();
        config.style = VideoStyle::Vintage;
        let request = VideoGenerationRequest::new(&config, &bounds).unwrap();
        assert_eq!(request.config.style, VideoStyle::Vintage);
    }

    #[test]
    fn test_enhancement_request_normalizes_config() {
        let config = EnhancementConfig {
            mode: EnhancementMode::Auto,
            prompt: Some("leftover".to_string()),
        };
        let request = EnhancementRequest::new(logo_file(), ImageFormat::Png, &config).unwrap();
        assert_eq!(request.config.prompt, None);

        let missing = EnhancementConfig {
            mode: EnhancementMode::Prompt,
            prompt: None,
        };
        assert!(EnhancementRequest::new(logo_file(), ImageFormat::Png, &missing).is_err());
    }
}
