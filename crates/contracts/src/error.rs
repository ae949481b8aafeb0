use thiserror::Error;

/// Validation failures for studio data shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown tab: {0}")]
    UnknownTab(String),

    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// Prompt mode selected without an instruction.
    #[error("enhancement mode 'prompt' requires an instruction")]
    MissingInstruction,

    #[error("prompt is too long: {len} characters (max {max})")]
    PromptTooLong { len: usize, max: usize },

    #[error("duration {value}s is outside the allowed range {min}..={max}s")]
    DurationOutOfRange { value: u32, min: u32, max: u32 },

    #[error("invalid duration bounds: min={min}, default={default}, max={max}")]
    InvalidBounds { min: u32, default: u32, max: u32 },

    #[error("unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("unknown value '{value}' for {field}")]
    UnknownVariant { field: &'static str, value: String },
}
