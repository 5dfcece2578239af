use crate::config::SpecConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("spec error: {0}")]
    Spec(#[from] SpecError),

    #[error("bundle error: {0}")]
    Bundle(#[from] BundleError),

    #[error("config error: {0}")]
    Config(#[from] SpecConfigError),
}

/// Errors raised while building or decoding a [`SearchSpec`](crate::SearchSpec).
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("term match type is required but was never set")]
    MissingTermMatch,

    #[error("{field} must be non-negative, got {value}")]
    NegativeCount { field: &'static str, value: i32 },

    #[error("unknown code {code} for {field}")]
    UnknownCode { field: &'static str, code: i32 },

    #[error(transparent)]
    Bundle(#[from] BundleError),
}

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("value under {key} is not {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    #[error("empty bundle data")]
    Empty,

    #[error("unsupported bundle format version: {0}")]
    UnsupportedVersion(u8),

    #[error("postcard error: {0}")]
    Postcard(#[from] postcard::Error),
}
