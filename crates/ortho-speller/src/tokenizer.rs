// Reference tokenizer for the command line tools and tests
//
// Real deployments feed sentences tokenized by their own pipeline. This one
// produces word, punctuation and whitespace tokens with the properties the
// rule relies on: connectors and ignorables stay inside words, URLs and
// e-mail addresses stay whole.

use ortho_core::character::{is_ignorable, is_word_connector, simple_lower};
use ortho_core::enums::TokenType;
use ortho_core::token::{AnalyzedToken, AnnotatedSentence};

// ---------------------------------------------------------------------------
// Non-word detection
// ---------------------------------------------------------------------------

/// Check whether a token is a URL, an e-mail address or a `www.` host.
pub fn is_nonword(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if n < 4 {
        return false;
    }

    // "//" followed by "." -> URL
    if let Some(slashes) = chars.windows(2).position(|w| w == ['/', '/']) {
        if chars[slashes + 2..].contains(&'.') {
            return true;
        }
    }

    // "@" with "." after it -> e-mail
    if let Some(at) = chars.iter().position(|&c| c == '@') {
        if at > 0 && chars[at + 1..].contains(&'.') {
            return true;
        }
    }

    // "www." prefix
    n >= 5
        && chars[..3].iter().all(|&c| simple_lower(c) == 'w')
        && chars[3] == '.'
        && chars[4..].contains(&'.')
}

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

fn is_combining_mark(c: char) -> bool {
    matches!(c as u32, 0x0300..=0x036F | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF | 0x20D0..=0x20FF)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_ignorable(c) || is_combining_mark(c)
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{00A1}' | '\u{00AB}' | '\u{00BB}' | '\u{00BF}' | '\u{2013}' | '\u{2014}'
                | '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}' | '\u{2026}'
        )
}

/// Trailing characters that end a sentence rather than a URL.
fn is_url_trailer(c: char) -> bool {
    matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | ')' | ']' | '"' | '\'')
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// Length of a URL or e-mail address at the start of `chars`, or 0.
fn nonword_len(chars: &[char]) -> usize {
    let mut end = chars.iter().position(|c| c.is_whitespace()).unwrap_or(chars.len());
    while end > 0 && is_url_trailer(chars[end - 1]) {
        end -= 1;
    }
    let candidate: String = chars[..end].iter().collect();
    if is_nonword(&candidate) { end } else { 0 }
}

/// Length of the word starting at `chars[0]`.
///
/// A connector (hyphen, apostrophe) is kept only between word characters.
fn word_len(chars: &[char]) -> usize {
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_word_char(c) {
            i += 1;
        } else if is_word_connector(c)
            && i > 0
            && chars.get(i + 1).is_some_and(|&next| is_word_char(next))
        {
            i += 1;
        } else {
            break;
        }
    }
    i
}

/// Split a sentence into tokens with character offsets.
pub fn tokenize(text: &str) -> AnnotatedSentence {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let rest = &chars[pos..];
        let c = rest[0];

        let (token_type, len) = if c.is_whitespace() {
            let len = rest.iter().take_while(|c| c.is_whitespace()).count();
            (TokenType::Whitespace, len)
        } else if is_word_char(c) {
            match nonword_len(rest) {
                0 => (TokenType::Word, word_len(rest)),
                len => (TokenType::Word, len),
            }
        } else if is_punctuation(c) {
            (TokenType::Punctuation, 1)
        } else {
            (TokenType::Unknown, 1)
        };

        let surface: String = rest[..len].iter().collect();
        tokens.push(AnalyzedToken::new(token_type, surface, pos));
        pos += len;
    }

    AnnotatedSentence::new(text, tokens)
}
