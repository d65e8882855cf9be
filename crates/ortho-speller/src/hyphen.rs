// Hyphen-compound resolution

use ortho_core::character::is_hyphen;

/// Outcome of checking a token as a hyphenated compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundVerdict {
    /// The token has no visible hyphen between letters.
    NotCompound,
    /// Every part is a valid word.
    Accepted,
    /// At least one part is invalid; the whole token is misspelled.
    Rejected,
}

/// Split a token on visible hyphens, dropping empty parts.
pub fn compound_parts(word: &str) -> Vec<&str> {
    word.split(is_hyphen).filter(|p| !p.is_empty()).collect()
}

/// Whether the token is a hyphenated compound of at least two parts.
pub fn is_compound(word: &str) -> bool {
    word.contains(is_hyphen) && compound_parts(word).len() >= 2
}

/// Accept a hyphenated token if and only if every part validates.
///
/// `is_valid` is the full acceptance check (user dictionary, then oracle).
/// No per-part correction is attempted.
pub fn resolve_compound(word: &str, is_valid: impl Fn(&str) -> bool) -> CompoundVerdict {
    if !is_compound(word) {
        return CompoundVerdict::NotCompound;
    }
    if compound_parts(word).into_iter().all(is_valid) {
        CompoundVerdict::Accepted
    } else {
        CompoundVerdict::Rejected
    }
}
