pub mod view;

pub use view::LogoAnimator;
