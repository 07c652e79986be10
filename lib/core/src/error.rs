use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("artifact not found: {0}")]
    NotFound(String),

    #[error("encoding failed: {0}")]
    Encoding(String),

    #[error("empty selection: no query text supplied")]
    EmptySelection,

    #[error("invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}
