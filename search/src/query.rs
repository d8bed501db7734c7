//! Search query types.

use crate::config::QueryOptions;

/// A query split into whitespace-separated terms, plus matching options.
///
/// Only the last term is completed; earlier terms are kept so the query can
/// be handed around as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoCompleteQuery {
    pub terms: Vec<String>,
    pub options: QueryOptions,
}

impl AutoCompleteQuery {
    pub fn new(query: &str) -> Self {
        Self::with_options(query, QueryOptions::default())
    }

    pub fn with_options(query: &str, options: QueryOptions) -> Self {
        Self {
            terms: query.split_whitespace().map(str::to_string).collect(),
            options,
        }
    }

    /// The word currently being typed.
    pub fn last_term(&self) -> Option<&str> {
        self.terms.last().map(String::as_str)
    }
}
