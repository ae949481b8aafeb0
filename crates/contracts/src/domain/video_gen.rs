//! Video generation configuration.

use crate::domain::MAX_PROMPT_CHARS;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Visual style of the generated clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VideoStyle {
    #[default]
    Realistic,
    Cinematic,
    Animation,
    Cyberpunk,
    Vintage,
}

impl VideoStyle {
    pub fn from_str(s: &str) -> Result<Self, ValidationError> {
        match s {
            "Realistic" => Ok(VideoStyle::Realistic),
            "Cinematic" => Ok(VideoStyle::Cinematic),
            "Animation" => Ok(VideoStyle::Animation),
            "Cyberpunk" => Ok(VideoStyle::Cyberpunk),
            "Vintage" => Ok(VideoStyle::Vintage),
            _ => Err(ValidationError::UnknownVariant {
                field: "style",
                value: s.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStyle::Realistic => "Realistic",
            VideoStyle::Cinematic => "Cinematic",
            VideoStyle::Animation => "Animation",
            VideoStyle::Cyberpunk => "Cyberpunk",
            VideoStyle::Vintage => "Vintage",
        }
    }

    pub fn all() -> [VideoStyle; 5] {
        [
            VideoStyle::Realistic,
            VideoStyle::Cinematic,
            VideoStyle::Animation,
            VideoStyle::Cyberpunk,
            VideoStyle::Vintage,
        ]
    }
}

/// Aspect ratio of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
}

impl Orientation {
    pub fn from_str(s: &str) -> Result<Self, ValidationError> {
        match s {
            "16:9" => Ok(Orientation::Landscape),
            "9:16" => Ok(Orientation::Portrait),
            _ => Err(ValidationError::UnknownVariant {
                field: "orientation",
                value: s.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "16:9",
            Orientation::Portrait => "9:16",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Landscape => "Landscape (16:9)",
            Orientation::Portrait => "Portrait (9:16)",
        }
    }

    pub fn all() -> [Orientation; 2] {
        [Orientation::Landscape, Orientation::Portrait]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Resolution {
    #[default]
    #[serde(rename = "720p")]
    Hd,
    #[serde(rename = "1080p")]
    FullHd,
}

impl Resolution {
    pub fn from_str(s: &str) -> Result<Self, ValidationError> {
        match s {
            "720p" => Ok(Resolution::Hd),
            "1080p" => Ok(Resolution::FullHd),
            _ => Err(ValidationError::UnknownVariant {
                field: "resolution",
                value: s.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Hd => "720p",
            Resolution::FullHd => "1080p",
        }
    }

    pub fn all() -> [Resolution; 2] {
        [Resolution::Hd, Resolution::FullHd]
    }
}

/// Allowed clip duration in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBounds {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl Default for DurationBounds {
    fn default() -> Self {
        Self {
            min: 4,
            max: 8,
            default: 5,
        }
    }
}

impl DurationBounds {
    pub fn new(min: u32, max: u32, default: u32) -> Result<Self, ValidationError> {
        let bounds = Self { min, max, default };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min == 0 || self.min > self.default || self.default > self.max {
            return Err(ValidationError::InvalidBounds {
                min: self.min,
                default: self.default,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, seconds: u32) -> bool {
        (self.min..=self.max).contains(&seconds)
    }

    pub fn check(&self, seconds: u32) -> Result<(), ValidationError> {
        if self.contains(seconds) {
            Ok(())
        } else {
            Err(ValidationError::DurationOutOfRange {
                value: seconds,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoGenConfig {
    pub prompt: String,
    pub style: VideoStyle,
    pub orientation: Orientation,
    pub resolution: Resolution,
    /// Seconds
    pub duration: u32,
}

impl VideoGenConfig {
    /// Empty prompt, default selectors and the default duration of `bounds`.
    pub fn new(bounds: &DurationBounds) -> Self {
        Self {
            prompt: String::new(),
            style: VideoStyle::default(),
            orientation: Orientation::default(),
            resolution: Resolution::default(),
            duration: bounds.default,
        }
    }

    /// Checks prompt length and duration; `require_prompt` rejects a blank prompt.
    pub fn validate(
        &self,
        bounds: &DurationBounds,
        require_prompt: bool,
    ) -> Result<(), ValidationError> {
        let prompt = self.prompt.trim();
        if require_prompt && prompt.is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }
        let len = prompt.chars().count();
        if len > MAX_PROMPT_CHARS {
            return Err(ValidationError::PromptTooLong {
                len,
                max: MAX_PROMPT_CHARS,
            });
        }
        bounds.check(self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds_are_valid() {
        let bounds = DurationBounds::default();
        assert_eq!(bounds.validate(), Ok(()));
        assert!(bounds.contains(4));
        assert!(bounds.contains(8));
        assert!(!bounds.contains(3));
        assert!(!bounds.contains(9));
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(DurationBounds::new(0, 8, 5).is_err());
        assert!(DurationBounds::new(6, 8, 5).is_err());
        assert!(DurationBounds::new(4, 8, 9).is_err());
        assert_eq!(
            DurationBounds::new(2, 10, 6),
            Ok(DurationBounds {
                min: 2,
                max: 10,
                default: 6
            })
        );
    }

    #[test]
    fn test_validate_config() {
        let bounds = DurationBounds::default();
        let mut cfg = VideoGenConfig::new(&bounds);
        assert_eq!(cfg.duration, 5);
        assert_eq!(cfg.validate(&bounds, true), Err(ValidationError::EmptyPrompt));
        assert_eq!(cfg.validate(&bounds, false), Ok(()));

        cfg.prompt = "A drone shot over a neon city".to_string();
        assert_eq!(cfg.validate(&bounds, true), Ok(()));

        cfg.duration = 12;
        assert_eq!(
            cfg.validate(&bounds, true),
            Err(ValidationError::DurationOutOfRange {
                value: 12,
                min: 4,
                max: 8
            })
        );
    }

    #[test]
    fn test_wire_names() {
        let bounds = DurationBounds::default();
        let cfg = VideoGenConfig {
            prompt: "waves".to_string(),
            style: VideoStyle::Cyberpunk,
            orientation: Orientation::Portrait,
            resolution: Resolution::FullHd,
            duration: bounds.max,
        };
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["style"], "Cyberpunk");
        assert_eq!(json["orientation"], "9:16");
        assert_eq!(json["resolution"], "1080p");
        assert_eq!(json["duration"], 8);
    }

    #[test]
    fn test_selectors_from_str() {
        for style in VideoStyle::all() {
            assert_eq!(VideoStyle::from_str(style.as_str()), Ok(style));
        }
        assert_eq!(Orientation::from_str("9:16"), Ok(Orientation::Portrait));
        assert_eq!(Resolution::from_str("1080p"), Ok(Resolution::FullHd));
        assert!(Resolution::from_str("4k").is_err());
    }
}
