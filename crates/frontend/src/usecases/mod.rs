pub mod common;
pub mod image_enhancer;
pub mod logo_animator;
pub mod video_generator;

pub use image_enhancer::ImageEnhancer;
pub use logo_animator::LogoAnimator;
pub use video_generator::VideoGenerator;
