// Match assembly: candidates -> ordered, span-disjoint matches

use hashbrown::HashSet;
use ortho_core::enums::Provenance;
use ortho_core::rule_match::Match;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Message templates for reported matches.
///
/// `other_variant` may contain `{word}` and `{variant}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub misspelling: String,
    pub other_variant: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            misspelling: "Possible spelling mistake found.".to_string(),
            other_variant: "Possible spelling mistake. '{word}' is {variant}.".to_string(),
        }
    }
}

impl Messages {
    /// Render the message for a candidate.
    pub fn render(&self, word: &str, other_variant: Option<&str>) -> String {
        match other_variant {
            Some(variant) => self
                .other_variant
                .replace("{word}", word)
                .replace("{variant}", variant),
            None => self.misspelling.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// SuggestionList
// ---------------------------------------------------------------------------

/// Ordered, duplicate-free, bounded suggestion collector.
#[derive(Debug, Clone)]
pub struct SuggestionList {
    max: usize,
    items: Vec<String>,
    seen: HashSet<String>,
}

impl SuggestionList {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Add a suggestion. Duplicates and anything past the limit are ignored.
    pub fn push(&mut self, suggestion: impl Into<String>) {
        if self.is_full() {
            return;
        }
        let suggestion = suggestion.into();
        if suggestion.is_empty() || !self.seen.insert(suggestion.clone()) {
            return;
        }
        self.items.push(suggestion);
    }

    pub fn extend<I, S>(&mut self, suggestions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for s in suggestions {
            if self.is_full() {
                break;
            }
            self.push(s);
        }
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

/// A proposed correction before resolution.
///
/// Candidates may overlap; the assembler decides which ones survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// First and last covered token index (inclusive).
    pub first_token: usize,
    pub last_token: usize,
    /// Character span in the original sentence.
    pub start: usize,
    pub end: usize,
    /// Surface text of the span, used in messages.
    pub word: String,
    /// Suggestions, best first. May contain duplicates.
    pub suggestions: Vec<String>,
    pub provenance: Provenance,
    /// Display name of a cross-reference variant accepting the word.
    pub other_variant: Option<String>,
}

impl Candidate {
    /// A candidate covering a single token.
    pub fn single(
        token: usize,
        span: (usize, usize),
        word: impl Into<String>,
        suggestions: Vec<String>,
        provenance: Provenance,
    ) -> Self {
        Self {
            first_token: token,
            last_token: token,
            start: span.0,
            end: span.1,
            word: word.into(),
            suggestions,
            provenance,
            other_variant: None,
        }
    }

    /// Attach the variant the word belongs to.
    pub fn in_other_variant(mut self, variant: impl Into<String>) -> Self {
        self.other_variant = Some(variant.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Resolve candidates into the final match list.
///
/// Candidates are taken by first token, then by provenance precedence.
/// A candidate touching an already covered token is dropped, so accepted
/// merges consume both of their tokens. Suggestions are deduplicated in
/// first-seen order and capped at `max_suggestions`.
pub fn assemble(
    mut candidates: Vec<Candidate>,
    max_suggestions: usize,
    messages: &Messages,
) -> Vec<Match> {
    candidates.sort_by_key(|c| (c.first_token, c.provenance));

    let mut covered: HashSet<usize> = HashSet::new();
    let mut matches = Vec::new();

    for candidate in candidates {
        let tokens = candidate.first_token..=candidate.last_token;
        if tokens.clone().any(|t| covered.contains(&t)) {
            continue;
        }
        covered.extend(tokens);

        let mut suggestions = SuggestionList::new(max_suggestions);
        suggestions.extend(candidate.suggestions);
        let message = messages.render(&candidate.word, candidate.other_variant.as_deref());
        matches.push(Match::new(
            candidate.start,
            candidate.end,
            message,
            suggestions.into_vec(),
            candidate.provenance,
        ));
    }

    matches.sort_by_key(|m| m.start);
    matches
}
