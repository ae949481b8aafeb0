//! Data shapes shared by the studio UI: tabs, media files, generation
//! configuration and processing state.

pub mod app_tab;
pub mod enhancement;
pub mod media_file;
pub mod processing;
pub mod requests;
pub mod video_gen;

pub use app_tab::{AppTab, FeatureSurface};
pub use enhancement::{EnhancementConfig, EnhancementMode};
pub use media_file::{ImageFormat, MediaFileId, MediaFileInfo};
pub use processing::ProcessingState;
pub use requests::{EnhancementRequest, LogoAnimationRequest, VideoGenerationRequest};
pub use video_gen::{DurationBounds, Orientation, Resolution, VideoGenConfig, VideoStyle};

/// Maximum prompt length (characters) accepted by any generation request
pub const MAX_PROMPT_CHARS: usize = 2000;
