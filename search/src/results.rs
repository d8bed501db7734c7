//! Result ranking.

use sponge_core::types::Searchable;

/// Sort key for a matched item.
///
/// Shorter best keyword first, then the smallest keyword in its original
/// casing. The full sorted keyword list breaks any remaining tie.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct RankKey {
    shortest_len: usize,
    smallest: String,
    keywords: Vec<String>,
}

impl RankKey {
    pub(crate) fn of<T: Searchable>(item: &T) -> Self {
        let mut keywords = item.keywords();
        keywords.sort();

        Self {
            shortest_len: keywords
                .iter()
                .map(|k| k.chars().count())
                .min()
                .unwrap_or(usize::MAX),
            smallest: keywords.first().cloned().unwrap_or_default(),
            keywords,
        }
    }
}

/// Orders `items` by [`RankKey`], keeping the incoming order for equal keys.
pub(crate) fn rank<T: Searchable>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut keyed: Vec<(RankKey, T)> = items
        .into_iter()
        .map(|item| (RankKey::of(&item), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed.into_iter().map(|(_, item)| item).collect()
}
