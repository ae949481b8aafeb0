use crate::domain::MAX_PROMPT_CHARS;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// How the enhancer should treat the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnhancementMode {
    /// Let the model pick the improvements.
    #[default]
    Auto,
    /// Follow a free-text instruction.
    Prompt,
}

impl EnhancementMode {
    pub fn from_str(s: &str) -> Result<Self, ValidationError> {
        match s {
            "auto" => Ok(EnhancementMode::Auto),
            "prompt" => Ok(EnhancementMode::Prompt),
            _ => Err(ValidationError::UnknownVariant {
                field: "enhancement mode",
                value: s.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnhancementMode::Auto => "auto",
            EnhancementMode::Prompt => "prompt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnhancementMode::Auto => "Auto Enhance",
            EnhancementMode::Prompt => "Custom Instruction",
        }
    }

    pub fn all() -> [EnhancementMode; 2] {
        [EnhancementMode::Auto, EnhancementMode::Prompt]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnhancementConfig {
    pub mode: EnhancementMode,
    /// Only meaningful in `Prompt` mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl EnhancementConfig {
    pub fn auto() -> Self {
        Self::default()
    }

    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            mode: EnhancementMode::Prompt,
            prompt: Some(prompt.into()),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mode == EnhancementMode::Auto {
            return Ok(());
        }
        let prompt = self.prompt.as_deref().map(str::trim).unwrap_or_default();
        if prompt.is_empty() {
            return Err(ValidationError::MissingInstruction);
        }
        let len = prompt.chars().count();
        if len > MAX_PROMPT_CHARS {
            return Err(ValidationError::PromptTooLong {
                len,
                max: MAX_PROMPT_CHARS,
            });
        }
        Ok(())
    }

    /// Validated copy with a trimmed prompt; `Auto` mode drops the prompt.
    pub fn normalized(&self) -> Result<Self, ValidationError> {
        self.validate()?;
        let prompt = match self.mode {
            EnhancementMode::Auto => None,
            EnhancementMode::Prompt => self.prompt.as_deref().map(|p| p.trim().to_string()),
        };
        Ok(Self {
            mode: self.mode,
            prompt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_mode_needs_no_prompt() {
        assert_eq!(EnhancementConfig::auto().validate(), Ok(()));

        let cfg = EnhancementConfig {
            mode: EnhancementMode::Auto,
            prompt: Some("ignored".to_string()),
        };
        assert_eq!(cfg.normalized().unwrap().prompt, None);
    }

    #[test]
    fn test_prompt_mode_requires_instruction() {
        let missing = EnhancementConfig {
            mode: EnhancementMode::Prompt,
            prompt: None,
        };
        assert_eq!(missing.validate(), Err(ValidationError::MissingInstruction));
        assert_eq!(
            EnhancementConfig::with_prompt("   ").validate(),
            Err(ValidationError::MissingInstruction)
        );

        let cfg = EnhancementConfig::with_prompt("  sharpen the edges ").normalized().unwrap();
        assert_eq!(cfg.prompt.as_deref(), Some("sharpen the edges"));
    }

    #[test]
    fn test_prompt_too_long() {
        let cfg = EnhancementConfig::with_prompt("x".repeat(MAX_PROMPT_CHARS + 1));
        assert_eq!(
            cfg.validate(),
            Err(ValidationError::PromptTooLong {
                len: MAX_PROMPT_CHARS + 1,
                max: MAX_PROMPT_CHARS
            })
        );
    }

    #[test]
    fn test_serialization_skips_missing_prompt() {
        let json = serde_json::to_string(&EnhancementConfig::auto()).unwrap();
        assert_eq!(json, r#"{"mode":"auto"}"#);

        let cfg: EnhancementConfig =
            serde_json::from_str(r#"{"mode":"prompt","prompt":"warmer"}"#).unwrap();
        assert_eq!(cfg, EnhancementConfig::with_prompt("warmer"));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(EnhancementMode::from_str("prompt"), Ok(EnhancementMode::Prompt));
        assert!(EnhancementMode::from_str("manual").is_err());
    }
}
