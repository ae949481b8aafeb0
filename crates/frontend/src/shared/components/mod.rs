pub mod file_picker;
pub mod processing_status;
pub mod ui;
pub mod video_config_form;

pub use file_picker::ImagePicker;
pub use processing_status::ProcessingStatus;
pub use video_config_form::VideoConfigForm;
