use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidAspect(String),
    EmptySectionKey,
    ZeroLoopDuration,
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidAspect(raw) => {
                write!(f, "invalid aspect ratio '{raw}' (expected 9/16 or 16/9)")
            }
            ModelError::EmptySectionKey => {
                write!(f, "section key must not be empty")
            }
            ModelError::ZeroLoopDuration => {
                write!(f, "loop duration must be greater than zero")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
