use crate::config::QueryOptions;

/// Canonical form a keyword is indexed under.
pub(crate) fn normalize(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

/// Character path of a keyword through the trie.
pub(crate) fn tokenize(keyword: &str) -> Vec<char> {
    normalize(keyword).chars().collect()
}

/// The word being typed: the last whitespace-separated segment of `query`.
pub(crate) fn last_segment(query: &str) -> Option<&str> {
    query.split_whitespace().next_back()
}

/// Whether `keyword` satisfies the typed `segment` under `options`.
pub(crate) fn keyword_matches(keyword: &str, segment: &str, options: &QueryOptions) -> bool {
    let (keyword, segment) = if options.case_sensitive {
        (keyword.trim().to_string(), segment.to_string())
    } else {
        (normalize(keyword), segment.to_lowercase())
    };

    if options.exact_match {
        keyword == segment
    } else {
        keyword.starts_with(&segment)
    }
}
