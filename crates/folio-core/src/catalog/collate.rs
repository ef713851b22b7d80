//! Display-name ordering.

use feruca::{Collator, Tailoring};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How catalog names are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Unicode Collation Algorithm with the CLDR root tailoring at tertiary
    /// strength: accents and case only break ties, lowercase first.
    #[default]
    Locale,
    /// Plain byte-wise comparison (`"Z" < "a"`).
    Ordinal,
}

impl SortOrder {
    /// Comparator for repeated use, e.g. inside a sort.
    pub fn collation(self) -> Collation {
        let collator = match self {
            // Spaces and punctuation stay significant (non-ignorable).
            SortOrder::Locale => Some(Collator::new(Tailoring::default(), false, true)),
            SortOrder::Ordinal => None,
        };
        Collation { collator }
    }

    /// One-off comparison. Builds a fresh [`Collation`] each call.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        self.collation().compare(a, b)
    }
}

/// Stateful comparator for one [`SortOrder`].
pub struct Collation {
    collator: Option<Collator>,
}

impl Collation {
    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        match &mut self.collator {
            Some(collator) => collator.collate(a, b),
            None => a.cmp(b),
        }
    }
}
