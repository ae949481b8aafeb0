pub mod view;

pub use view::ImageEnhancer;
