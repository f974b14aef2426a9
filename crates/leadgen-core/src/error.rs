use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid rejection keyword: {0:?}")]
    InvalidKeyword(String),
}
