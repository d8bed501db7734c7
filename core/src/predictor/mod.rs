//! Next-word prediction store.
//!
//! Holds one [`NextWord`] record per known word. Records are keyed by their
//! exact (case-sensitive) spelling; inserting a record for a word that is
//! already known replaces it.

use crate::error::LexiconError;
use crate::types::{NextWord, Prediction, Word};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Default)]
pub struct NextWordPredictor {
    known_words: HashMap<String, NextWord>,
}

/// Create operations.
impl NextWordPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON array of prediction records.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let records: Vec<NextWord> = serde_json::from_str(json)?;
        let mut predictor = Self::new();
        for record in records {
            predictor.insert_word(record);
        }
        tracing::debug!(words = predictor.len(), "loaded next-word table");
        Ok(predictor)
    }
}

/// Mutation operations.
impl NextWordPredictor {
    pub fn insert_word(&mut self, word: NextWord) {
        self.known_words.insert(word.word.clone(), word);
    }
}

/// Read operations.
impl NextWordPredictor {
    pub fn get(&self, word: &str) -> Option<&NextWord> {
        self.known_words.get(word)
    }

    pub fn len(&self) -> usize {
        self.known_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known_words.is_empty()
    }

    /// Returns up to `limit` continuations of `word`, most frequent first.
    ///
    /// Equal counts are ordered by the predicted word.
    pub fn predictions(&self, word: &str, limit: usize) -> Vec<&Prediction> {
        let Some(record) = self.known_words.get(word) else {
            return Vec::new();
        };

        let mut predictions: Vec<&Prediction> = record.predictions.iter().collect();
        predictions.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        predictions.truncate(limit);
        predictions
    }

    /// Collects the words the completion index should offer.
    ///
    /// Every known word is included. Predicted words are included when seen at
    /// least `cutoff_frequency` times. Blank entries are skipped.
    pub fn vocabulary(&self, cutoff_frequency: u32) -> Vec<Word> {
        let predicted = self
            .known_words
            .values()
            .flat_map(|record| record.predictions.iter())
            .filter(|prediction| prediction.count >= cutoff_frequency)
            .map(|prediction| prediction.word.as_str());

        let spellings: BTreeSet<&str> = self
            .known_words
            .keys()
            .map(String::as_str)
            .chain(predicted)
            .collect();

        let mut words = BTreeSet::new();
        for spelling in spellings {
            match Word::parse(spelling) {
                Ok(word) => {
                    words.insert(word);
                }
                Err(error) => {
                    tracing::debug!(spelling, %error, "skipping vocabulary entry");
                }
            }
        }

        words.into_iter().collect()
    }
}

#[cfg(test)]
mod tests;
