use serde::{Deserialize, Serialize};

/// Progress of a long-running generation or enhancement operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingState {
    pub is_processing: bool,
    /// Human-readable status line
    pub message: String,
    /// Percent, 0..=100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f32>,
}

impl ProcessingState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn started(message: impl Into<String>) -> Self {
        Self {
            is_processing: true,
            message: message.into(),
            progress: None,
        }
    }

    /// Same operation, new status line and progress (clamped).
    pub fn step(&self, message: impl Into<String>, progress: f32) -> Self {
        Self {
            is_processing: self.is_processing,
            message: message.into(),
            progress: Some(clamp_percent(progress)),
        }
    }

    pub fn finished(message: impl Into<String>) -> Self {
        Self {
            is_processing: false,
            message: message.into(),
            progress: Some(100.0),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            is_processing: false,
            message: message.into(),
            progress: None,
        }
    }

    /// "42%" or an empty string when progress is unknown.
    pub fn percent_label(&self) -> String {
        self.progress
            .map(|p| format!("{:.0}%", p))
            .unwrap_or_default()
    }
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let state = ProcessingState::started("Reading file");
        assert!(state.is_processing);
        assert_eq!(state.progress, None);

        let state = state.step("Detecting format", 40.0);
        assert!(state.is_processing);
        assert_eq!(state.percent_label(), "40%");

        let done = ProcessingState::finished("Request ready");
        assert!(!done.is_processing);
        assert_eq!(done.progress, Some(100.0));
    }

    #[test]
    fn test_progress_is_clamped() {
        let state = ProcessingState::started("x");
        assert_eq!(state.step("over", 250.0).progress, Some(100.0));
        assert_eq!(state.step("under", -3.0).progress, Some(0.0));
        assert_eq!(state.step("nan", f32::NAN).progress, Some(0.0));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&ProcessingState::started("Working")).unwrap();
        assert_eq!(json, r#"{"isProcessing":true,"message":"Working"}"#);
        assert_eq!(ProcessingState::idle().percent_label(), "");
    }
}
