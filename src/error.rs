#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: offset must be a finite number, got {0}")]
    InvalidArgument(f64),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("No callback registered under {0:?}")]
    UnknownCallback(String),

    #[error("Callback {0:?} is already registered")]
    DuplicateCallback(String),
}
