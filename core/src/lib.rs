//! Shared types for the sponge completion engine.
//!
//! - [`types::Searchable`]: the capability every indexed item provides.
//! - [`types::Word`]: the vocabulary entry handed to the completion index.
//! - [`predictor::NextWordPredictor`]: next-word tables and vocabulary export.
//! - [`types::CompletionConfig`]: TOML-backed completion settings.

pub mod error;
pub mod predictor;
pub mod types;

pub use error::{Error, LexiconError, Result};
