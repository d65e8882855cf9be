// Character classification used by normalization, tokenization and lookup

// ---------------------------------------------------------------------------
// Ignorable code points
// ---------------------------------------------------------------------------

/// SOFT HYPHEN (U+00AD).
pub const SOFT_HYPHEN: char = '\u{00AD}';

/// Code points that carry no lexical content and are removed before lookup.
///
/// Soft hyphens come from hyphenated copy-paste, the zero-width characters
/// from word processors and web pages.
const IGNORABLE: &[char] = &[
    SOFT_HYPHEN,
    '\u{034F}', // COMBINING GRAPHEME JOINER
    '\u{180E}', // MONGOLIAN VOWEL SEPARATOR
    '\u{200B}', // ZERO WIDTH SPACE
    '\u{200C}', // ZERO WIDTH NON-JOINER
    '\u{200D}', // ZERO WIDTH JOINER
    '\u{2060}', // WORD JOINER
    '\u{FEFF}', // ZERO WIDTH NO-BREAK SPACE
];

/// Check whether a character is an ignorable (invisible, zero-width) code point.
pub fn is_ignorable(c: char) -> bool {
    IGNORABLE.contains(&c)
}

// ---------------------------------------------------------------------------
// Hyphens and word connectors
// ---------------------------------------------------------------------------

/// Check whether a character is a visible hyphen that joins compound parts.
///
/// Soft hyphens are deliberately excluded: they are ignorable, not compound
/// separators.
pub fn is_hyphen(c: char) -> bool {
    matches!(
        c,
        '-' | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
    )
}

/// Check whether a character may join two letter runs into one word token
/// ("don't", "web-based").
pub fn is_word_connector(c: char) -> bool {
    is_hyphen(c) || matches!(c, '\'' | '\u{2019}')
}

// ---------------------------------------------------------------------------
// Script classification
// ---------------------------------------------------------------------------

/// Check whether a character is a letter of the Latin script.
///
/// Covers Basic Latin, Latin-1 Supplement, Latin Extended-A/B, IPA
/// extensions, Latin Extended Additional and the Latin ligatures.
pub fn is_latin_letter(c: char) -> bool {
    let cp = c as u32;
    c.is_ascii_alphabetic()
        || ((0xC0..=0x24F).contains(&cp) && cp != 0xD7 && cp != 0xF7)
        || (0x250..=0x2AF).contains(&cp)
        || (0x1E00..=0x1EFF).contains(&cp)
        || (0xFB00..=0xFB06).contains(&cp)
}

/// Check whether a string contains at least one Latin-script letter.
pub fn has_latin_letter(s: &str) -> bool {
    s.chars().any(is_latin_letter)
}

/// Check whether a string contains a decimal digit.
pub fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_numeric())
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// One-to-one mappings only: characters whose full case mapping expands to
// several characters keep just the first one, so character counts (and
// therefore offsets) never change under case conversion.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

/// Lowercase a whole string with simple (length-preserving) mappings.
pub fn lower_str(s: &str) -> String {
    s.chars().map(simple_lower).collect()
}
