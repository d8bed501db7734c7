use sponge_core::types::SuggestionsConfig;

/// Matching and limiting options carried by an [`AutoCompleteQuery`].
///
/// The default matches [`AutoComplete::search`]: case-insensitive prefix
/// matching with no limit.
///
/// [`AutoCompleteQuery`]: crate::AutoCompleteQuery
/// [`AutoComplete::search`]: crate::AutoComplete::search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub case_sensitive: bool,
    /// Require a keyword equal to the typed word instead of starting with it.
    pub exact_match: bool,
    pub max_results: Option<usize>,
}

impl QueryOptions {
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl From<&SuggestionsConfig> for QueryOptions {
    fn from(config: &SuggestionsConfig) -> Self {
        Self {
            case_sensitive: config.case_sensitive,
            exact_match: config.exact_match,
            max_results: Some(config.limit),
        }
    }
}
