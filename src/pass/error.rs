use thiserror::Error;

use super::{MAX_LENGTH, MIN_LENGTH};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no character class selected")]
    EmptyAlphabet,

    #[error("password length {length} is outside {}..={}", MIN_LENGTH, MAX_LENGTH)]
    InvalidLength { length: usize },

    #[error("unknown preset '{0}' (expected weak, medium or strong)")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, Error>;
