mod completion;

pub use completion::{CompletionConfig, ConfigError, SuggestionsConfig, VocabularyConfig};
