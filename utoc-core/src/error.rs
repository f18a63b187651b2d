use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("truncated input at offset 0x{offset:X}: need {needed} bytes, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ContainerError>;
