//! Next-word prediction records.
//!
//! The serialized form keeps the compact single-letter field names used by
//! the bundled prediction tables: `{ "w": "the", "p": [{ "w": "end", "c": 3 }] }`.

use serde::{Deserialize, Serialize};

/// All known continuations of a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextWord {
    #[serde(rename = "w")]
    pub word: String,
    #[serde(rename = "p", default)]
    pub predictions: Vec<Prediction>,
}

/// A word observed to follow another, with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "w")]
    pub word: String,
    #[serde(rename = "c")]
    pub count: u32,
}
