use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarpsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid register {0:?}: a register is exactly one character")]
    InvalidRegister(String),

    #[error("Invalid path {0:?}: paths cannot contain the field separator byte")]
    InvalidPath(String),

    #[error("Nothing to store: the search pattern is empty")]
    EmptyPattern,

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, HarpsError>;
