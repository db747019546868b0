use thiserror::Error;

#[derive(Debug, Error)]
pub enum CharcountError {
    #[error("Input is not valid UTF-8 text: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
