use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Top-level studio tab. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppTab {
    Enhance,
    Generate,
    #[default]
    Logo,
}

impl AppTab {
    pub fn from_str(s: &str) -> Result<Self, ValidationError> {
        match s {
            "enhance" => Ok(AppTab::Enhance),
            "generate" => Ok(AppTab::Generate),
            "logo" => Ok(AppTab::Logo),
            _ => Err(ValidationError::UnknownTab(s.to_string())),
        }
    }

    /// Value used in the URL query string and for CSS hooks.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppTab::Enhance => "enhance",
            AppTab::Generate => "generate",
            AppTab::Logo => "logo",
        }
    }

    /// Label shown in the header.
    pub fn label(&self) -> &'static str {
        match self {
            AppTab::Enhance => "Image Enhancer",
            AppTab::Generate => "Video Generator",
            AppTab::Logo => "Logo Animator",
        }
    }

    /// All tabs in header order.
    pub fn all() -> [AppTab; 3] {
        [AppTab::Logo, AppTab::Generate, AppTab::Enhance]
    }

    /// The feature surface mounted while this tab is active.
    pub fn surface(&self) -> FeatureSurface {
        match self {
            AppTab::Enhance => FeatureSurface::ImageEnhancer,
            AppTab::Generate => FeatureSurface::VideoGenerator,
            AppTab::Logo => FeatureSurface::LogoAnimator,
        }
    }
}

impl std::fmt::Display for AppTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three top-level generation/enhancement screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureSurface {
    ImageEnhancer,
    VideoGenerator,
    LogoAnimator,
}

impl FeatureSurface {
    pub fn all() -> [FeatureSurface; 3] {
        [
            FeatureSurface::ImageEnhancer,
            FeatureSurface::VideoGenerator,
            FeatureSurface::LogoAnimator,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_logo() {
        assert_eq!(AppTab::default(), AppTab::Logo);
        assert_eq!(AppTab::default().surface(), FeatureSurface::LogoAnimator);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(AppTab::from_str("enhance"), Ok(AppTab::Enhance));
        assert_eq!(AppTab::from_str("generate"), Ok(AppTab::Generate));
        assert_eq!(AppTab::from_str("logo"), Ok(AppTab::Logo));
        assert_eq!(
            AppTab::from_str("Logo"),
            Err(ValidationError::UnknownTab("Logo".to_string()))
        );
        assert!(AppTab::from_str("").is_err());
    }

    #[test]
    fn test_each_tab_mounts_exactly_one_distinct_surface() {
        for tab in AppTab::all() {
            let mounted: Vec<FeatureSurface> = FeatureSurface::all()
                .into_iter()
                .filter(|s| *s == tab.surface())
                .collect();
            assert_eq!(mounted, vec![tab.surface()]);
        }

        let surfaces: std::collections::HashSet<_> =
            AppTab::all().iter().map(|t| t.surface()).collect();
        assert_eq!(surfaces.len(), 3);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&AppTab::Generate).unwrap(), "\"generate\"");
        let tab: AppTab = serde_json::from_str("\"enhance\"").unwrap();
        assert_eq!(tab, AppTab::Enhance);
        assert!(serde_json::from_str::<AppTab>("\"video\"").is_err());
    }
}
