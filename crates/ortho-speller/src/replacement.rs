// Curated replacement table: known-incorrect forms mapped to corrections

use std::path::Path;

use hashbrown::HashMap;

use crate::error::{Result, SpellerError};

/// A suffix rewrite such as `*ises=es`.
#[derive(Debug, Clone)]
struct SuffixPattern {
    suffix: String,
    replacements: Vec<String>,
}

/// Mapping from incorrect forms to ordered corrections.
///
/// Two kinds of entries exist. Exact entries (`teached=taught`) are
/// authoritative and returned verbatim. Suffix patterns (`*ises=es`) only
/// propose a form; the caller decides whether it is a real word.
#[derive(Debug, Clone, Default)]
pub struct ReplacementTable {
    exact: HashMap<String, Vec<String>>,
    /// Sorted longest suffix first, file order otherwise.
    patterns: Vec<SuffixPattern>,
}

impl ReplacementTable {
    /// A table without entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse table text: `incorrect=correct1|correct2` per line, `#` starts a
    /// comment line, a leading `*` marks a suffix pattern.
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = Self::default();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let malformed = || SpellerError::MalformedRule {
                line: idx + 1,
                text: raw.to_string(),
            };

            let (key, values) = line.split_once('=').ok_or_else(malformed)?;
            let key = key.trim();
            let values: Vec<String> = values
                .split('|')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();
            if values.is_empty() {
                return Err(malformed());
            }

            match key.strip_prefix('*') {
                Some(suffix) if !suffix.is_empty() => table.add_pattern(suffix, values),
                Some(_) => return Err(malformed()),
                None if key.is_empty() => return Err(malformed()),
                None => table.add_exact(key, values),
            }
        }
        log::debug!(
            "replacement table loaded: {} entries, {} suffix patterns",
            table.exact.len(),
            table.patterns.len()
        );
        Ok(table)
    }

    /// Load a table from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SpellerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Add an exact entry. Repeated keys accumulate corrections in order.
    pub fn add_exact(&mut self, incorrect: &str, corrections: Vec<String>) {
        let slot = self.exact.entry(incorrect.to_string()).or_default();
        for c in corrections {
            if !slot.contains(&c) {
                slot.push(c);
            }
        }
    }

    /// Add a suffix pattern: a word ending in `suffix` has it replaced by
    /// each of `replacements`.
    pub fn add_pattern(&mut self, suffix: &str, replacements: Vec<String>) {
        self.patterns.push(SuffixPattern {
            suffix: suffix.to_string(),
            replacements,
        });
        self.patterns
            .sort_by(|a, b| b.suffix.chars().count().cmp(&a.suffix.chars().count()));
    }

    /// Exact corrections for `word`, empty when there is no entry.
    pub fn exact(&self, word: &str) -> &[String] {
        self.exact.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Forms proposed by suffix patterns, without any validity check.
    pub fn pattern_forms(&self, word: &str) -> Vec<String> {
        let mut out = Vec::new();
        for pattern in &self.patterns {
            let Some(stem) = word.strip_suffix(pattern.suffix.as_str()) else {
                continue;
            };
            if stem.is_empty() {
                continue;
            }
            for replacement in &pattern.replacements {
                let form = format!("{stem}{replacement}");
                if !out.contains(&form) {
                    out.push(form);
                }
            }
        }
        out
    }

    /// All corrections for `word`: exact entries first, then pattern forms
    /// that `accept` approves.
    ///
    /// An exact entry wins outright; patterns are not consulted for words
    /// the table lists explicitly.
    pub fn lookup(&self, word: &str, accept: impl Fn(&str) -> bool) -> Vec<String> {
        let exact = self.exact(word);
        if !exact.is_empty() {
            return exact.to_vec();
        }
        self.pattern_forms(word)
            .into_iter()
            .filter(|form| accept(form))
            .collect()
    }

    /// Number of exact entries plus patterns.
    pub fn len(&self) -> usize {
        self.exact.len() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
