pub(crate) mod config;
pub use config::{CompletionConfig, ConfigError, SuggestionsConfig, VocabularyConfig};

pub(crate) mod term;
pub use term::{MAX_TERM_LENGTH, Term, TermError};

pub(crate) mod searchable;
pub use searchable::Searchable;

pub(crate) mod word;
pub use word::Word;

pub(crate) mod next_word;
pub use next_word::{NextWord, Prediction};
