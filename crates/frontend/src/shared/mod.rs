pub mod components;
pub mod config;
pub mod icons;
pub mod json_viewer;
pub mod media_file;
pub mod page_frame;
