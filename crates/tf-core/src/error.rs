use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoldError {
    #[error("invalid text encoding: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FoldError>;
