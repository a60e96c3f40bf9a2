#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AllocatorError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl AllocatorError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        AllocatorError::InvalidInput {
            reason: reason.into(),
        }
    }
}
