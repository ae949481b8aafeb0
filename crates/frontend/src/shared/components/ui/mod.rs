pub mod button;
pub mod input;
pub mod radio;
pub mod select;
pub mod textarea;

pub use button::Button;
pub use input::NumberInput;
pub use radio::RadioGroup;
pub use select::Select;
pub use textarea::Textarea;
