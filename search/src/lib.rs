//! Sponge prefix-completion library.
//!
//! Indexes items by one or more keywords and completes the word being typed.
//!
//! # Design
//!
//! - [`TrieNode`] is an immutable character trie. Insertion rebuilds only the
//!   nodes along the inserted path and shares every other subtree via `Arc`.
//! - [`AutoComplete`] owns one root. Updates return a new index, so earlier
//!   snapshots remain valid and may be read concurrently.
//! - Keywords are indexed trimmed and lowercased.
//!
//! # Queries
//!
//! - `search()`: completes the last whitespace-separated word of the query
//! - `suggestions()`: `search()` capped to a limit
//! - `search_with()`: runs an [`AutoCompleteQuery`] with its [`QueryOptions`]
//!
//! Results are ranked by each item's shortest keyword length, then by its
//! smallest keyword.

mod config;
mod engine;
mod query;
mod results;
mod tokenizer;
mod trie;

pub use config::QueryOptions;
pub use engine::{AutoComplete, DEFAULT_SUGGESTION_LIMIT};
pub use query::AutoCompleteQuery;
pub use sponge_core::types::Searchable;
pub use trie::TrieNode;
