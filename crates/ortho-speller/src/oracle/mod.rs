// Dictionary oracle: the read-only word membership and neighbor service
//
// The engine never looks inside a dictionary. It asks two questions: is this
// exact form a word, and which words are close to this form. Everything else
// (case variants, user words, cross-reference variants) is layered on top by
// the rule.

pub mod wordlist;

pub use wordlist::WordListDictionary;

use crate::error::Result;

/// A fully loaded, immutable dictionary.
///
/// Implementations are shared between rule instances and threads behind an
/// `Arc`, so lookups take `&self` and must not lock.
pub trait DictionaryOracle: Send + Sync {
    /// Human-readable name used in logs ("en-US", "en_GB.txt").
    fn name(&self) -> &str;

    /// Check whether the exact form is an entry of the dictionary.
    fn is_valid(&self, word: &str) -> bool;

    /// Return dictionary entries within a small edit distance of `word`,
    /// ordered by increasing distance, ties broken lexicographically.
    ///
    /// At most `max_suggestions` entries are returned. The word itself is
    /// never returned.
    fn neighbors(&self, word: &str, max_suggestions: usize) -> Result<Vec<String>>;
}
