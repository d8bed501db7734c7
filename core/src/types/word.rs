//! Vocabulary entries.

use super::{Searchable, Term, TermError};
use serde::{Deserialize, Serialize};

/// A vocabulary entry found by its surface form and any aliases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Word {
    pub term: Term,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Word {
    pub fn new(term: Term) -> Self {
        Self {
            term,
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(term: Term, aliases: Vec<String>) -> Self {
        Self { term, aliases }
    }

    /// Validates `text` as a term and wraps it without aliases.
    pub fn parse(text: &str) -> Result<Self, TermError> {
        Ok(Self::new(Term::try_new(text.to_string())?))
    }

    pub fn as_str(&self) -> &str {
        self.term.as_str()
    }
}

impl Searchable for Word {
    fn keywords(&self) -> Vec<String> {
        let mut keywords = Vec::with_capacity(1 + self.aliases.len());
        keywords.push(self.term.as_str().to_string());
        keywords.extend(self.aliases.iter().cloned());
        keywords
    }
}
