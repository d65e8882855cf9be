// In-memory word list dictionary with length-bucketed neighbor search

use std::path::Path;

use hashbrown::HashSet;
use ortho_core::character::lower_str;

use super::DictionaryOracle;
use crate::error::{Result, SpellerError};

/// Maximum edit distance considered for a word of `len` characters.
///
/// Short words get a tight budget, otherwise every two-letter token would
/// match half the dictionary.
pub fn edit_budget(len: usize) -> usize {
    match len {
        0..=2 => 1,
        3..=7 => 2,
        _ => 3,
    }
}

/// A dictionary entry with its case-folded form precomputed.
#[derive(Debug, Clone)]
struct Entry {
    word: String,
    folded: String,
}

/// A dictionary backed by plain word lists.
///
/// Membership is an exact hash lookup. Neighbor search scans only the
/// length buckets within the edit budget of the query and ranks entries by
/// optimal string alignment distance over the case-folded forms.
#[derive(Debug)]
pub struct WordListDictionary {
    name: String,
    words: HashSet<String>,
    /// Entries indexed by character length.
    by_length: Vec<Vec<Entry>>,
}

impl WordListDictionary {
    /// Build a dictionary from an iterator of words.
    ///
    /// Blank entries are skipped. An empty result is an error: a dictionary
    /// without words is treated as corrupt data, not as "everything is wrong".
    pub fn from_words<I, S>(name: impl Into<String>, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let mut set = HashSet::new();
        let mut by_length: Vec<Vec<Entry>> = Vec::new();

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || !set.insert(word.to_string()) {
                continue;
            }
            let len = word.chars().count();
            if by_length.len() <= len {
                by_length.resize_with(len + 1, Vec::new);
            }
            by_length[len].push(Entry {
                word: word.to_string(),
                folded: lower_str(word),
            });
        }

        if set.is_empty() {
            return Err(SpellerError::EmptyDictionary(name));
        }
        log::debug!("dictionary '{}' loaded with {} words", name, set.len());

        Ok(Self {
            name,
            words: set,
            by_length,
        })
    }

    /// Build a dictionary from word-list text: one word per line, `#` starts
    /// a comment line.
    pub fn from_text(name: impl Into<String>, text: &str) -> Result<Self> {
        Self::from_words(name, parse_word_list(text))
    }

    /// Build a dictionary from several word-list texts (for example common
    /// words plus variant-specific additions).
    pub fn from_texts(name: impl Into<String>, texts: &[&str]) -> Result<Self> {
        Self::from_words(name, texts.iter().flat_map(|t| parse_word_list(t)))
    }

    /// Load a dictionary from one or more word-list files.
    pub fn from_paths<P: AsRef<Path>>(name: impl Into<String>, paths: &[P]) -> Result<Self> {
        let mut contents = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let text = std::fs::read_to_string(path).map_err(|source| SpellerError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            contents.push(text);
        }
        let texts: Vec<&str> = contents.iter().map(String::as_str).collect();
        Self::from_texts(name, &texts)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all entries in unspecified order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl DictionaryOracle for WordListDictionary {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn neighbors(&self, word: &str, max_suggestions: usize) -> Result<Vec<String>> {
        if max_suggestions == 0 || word.is_empty() {
            return Ok(Vec::new());
        }
        let folded = lower_str(word);
        let len = folded.chars().count();
        let budget = edit_budget(len);

        let lo = len.saturating_sub(budget);
        let hi = (len + budget).min(self.by_length.len().saturating_sub(1));

        let mut found: Vec<(usize, &str)> = Vec::new();
        for bucket in self.by_length.get(lo..=hi).into_iter().flatten() {
            for entry in bucket {
                if entry.word == word {
                    continue;
                }
                let distance = strsim::osa_distance(&folded, &entry.folded);
                if distance <= budget {
                    found.push((distance, entry.word.as_str()));
                }
            }
        }

        found.sort_unstable();
        Ok(found
            .into_iter()
            .take(max_suggestions)
            .map(|(_, w)| w.to_string())
            .collect())
    }
}

/// Split word-list text into entries, dropping comments and blank lines.
pub fn parse_word_list(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
