use crate::types::{ConfigError, TermError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
}

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("malformed prediction table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid term: {0}")]
    InvalidTerm(#[from] TermError),
}
