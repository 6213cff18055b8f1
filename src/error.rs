use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LanczosError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "Insufficient order: weights number must be at least 2*1.3/(fc2-fc1)+1 = {minimum}, got {num_taps}"
    )]
    InsufficientOrder { num_taps: usize, minimum: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LanczosError>;
