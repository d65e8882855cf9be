// Annotated sentence input types

use crate::enums::TokenType;

// ---------------------------------------------------------------------------
// AnalyzedToken
// ---------------------------------------------------------------------------

/// One token of an already tokenized sentence.
///
/// Offsets are character offsets (not bytes) into the original, un-normalized
/// sentence text. Ignorable characters such as soft hyphens count towards
/// the offsets like any other character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedToken {
    /// The type of this token.
    pub token_type: TokenType,

    /// Surface form exactly as it appears in the sentence.
    pub text: String,

    /// Start offset in characters (inclusive).
    pub start: usize,

    /// Set by upstream annotators for tokens that must never be reported
    /// (quoted code, names already validated elsewhere).
    pub immunized: bool,
}

impl AnalyzedToken {
    /// Create a new token starting at character offset `start`.
    pub fn new(token_type: TokenType, text: impl Into<String>, start: usize) -> Self {
        Self {
            token_type,
            text: text.into(),
            start,
            immunized: false,
        }
    }

    /// Shorthand for a word token.
    pub fn word(text: impl Into<String>, start: usize) -> Self {
        Self::new(TokenType::Word, text, start)
    }

    /// Mark the token as immune to spell checking.
    pub fn immunize(mut self) -> Self {
        self.immunized = true;
        self
    }

    /// Length of the surface form in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// End offset in characters (exclusive).
    pub fn end(&self) -> usize {
        self.start + self.char_len()
    }

    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }

    pub fn is_whitespace(&self) -> bool {
        self.token_type == TokenType::Whitespace
    }
}

// ---------------------------------------------------------------------------
// AnnotatedSentence
// ---------------------------------------------------------------------------

/// A sentence with its tokens, in text order.
///
/// Tokens are expected to tile the text (whitespace tokens included), but the
/// engine only relies on each token's own offsets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotatedSentence {
    text: String,
    tokens: Vec<AnalyzedToken>,
}

impl AnnotatedSentence {
    pub fn new(text: impl Into<String>, tokens: Vec<AnalyzedToken>) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }

    /// The original sentence text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[AnalyzedToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Return the original text between two character offsets.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_offsets_count_characters() {
        let tok = AnalyzedToken::word("fianc\u{00E9}", 4);
        assert_eq!(tok.char_len(), 6);
        assert_eq!(tok.end(), 10);
    }

    #[test]
    fn soft_hyphen_counts_towards_length() {
        let tok = AnalyzedToken::word("soft\u{00AD}ware", 0);
        assert_eq!(tok.end(), 9);
    }

    #[test]
    fn immunize_sets_flag() {
        let tok = AnalyzedToken::word("sdaasdwe", 0).immunize();
        assert!(tok.immunized);
        assert!(tok.is_word());
    }

    #[test]
    fn sentence_slice_uses_character_offsets() {
        let s = AnnotatedSentence::new("caf\u{00E9} au lait", Vec::new());
        assert_eq!(s.slice(0, 4), "caf\u{00E9}");
        assert_eq!(s.slice(5, 7), "au");
        assert_eq!(s.slice(7, 5), "");
        assert!(s.is_empty());
    }
}
