pub mod view;

pub use view::VideoGenerator;
