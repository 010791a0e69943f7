//! Error types for encounter construction and configuration.

use crate::Diet;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Immovable pair: a {first} cannot encounter a {second}")]
    ImmovablePair { first: Diet, second: Diet },

    #[error("Diet mismatch: expected {expected}, found {found}")]
    DietMismatch { expected: Diet, found: Diet },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
