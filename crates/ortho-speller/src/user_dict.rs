// Session-scoped user dictionary layered over the oracle

use hashbrown::HashSet;
use ortho_core::case::lookup_forms;

use crate::normalize::normalize;

/// Immutable set of words the user accepts.
///
/// Words are stored in their lookup form, so an entry typed with a soft
/// hyphen matches the plain word in text and vice versa.
#[derive(Debug, Clone, Default)]
pub struct UserDictionary {
    words: HashSet<String>,
    /// Insertion order, for reporting back to the configuration layer.
    ordered: Vec<String>,
}

impl UserDictionary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        for word in words {
            let word = word.as_ref().trim();
            let Ok(normalized) = normalize(word) else {
                log::debug!("ignoring unnormalizable user word {word:?}");
                continue;
            };
            let word = normalized.into_string();
            if !word.is_empty() && dict.words.insert(word.clone()) {
                dict.ordered.push(word);
            }
        }
        dict
    }

    /// Whether `word` is accepted, allowing the usual case variants
    /// (`Mytestword` and `MYTESTWORD` match `mytestword`).
    pub fn contains(&self, word: &str) -> bool {
        !self.words.is_empty() && lookup_forms(word).iter().any(|f| self.words.contains(f))
    }

    /// The accepted words in the order they were added.
    pub fn words(&self) -> &[String] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
