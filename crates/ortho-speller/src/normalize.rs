// Lookup-form normalization: strip ignorable code points, keep an offset map

use ortho_core::character::is_ignorable;

use crate::error::NormalizeError;

/// The lookup form of a token together with the way back to the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    lookup: String,
    /// `offsets[i]` is the original character index of lookup character `i`.
    /// One extra trailing element holds the original character length.
    offsets: Vec<usize>,
}

impl Normalized {
    /// The form used for dictionary lookup.
    pub fn as_str(&self) -> &str {
        &self.lookup
    }

    pub fn into_string(self) -> String {
        self.lookup
    }

    /// Length of the lookup form in characters.
    pub fn char_len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Whether normalization removed anything.
    pub fn is_changed(&self) -> bool {
        self.char_len() != self.original_len()
    }

    /// Length of the original surface form in characters.
    pub fn original_len(&self) -> usize {
        self.offsets[self.offsets.len() - 1]
    }

    /// Map a character position in the lookup form to the original form.
    /// A position at or past the end maps to the original length.
    pub fn original_offset(&self, pos: usize) -> usize {
        self.offsets[pos.min(self.offsets.len() - 1)]
    }

    /// Map a half-open character range of the lookup form to the smallest
    /// original range covering the same characters.
    ///
    /// Ignorables before the first or after the last covered character are
    /// excluded; ignorables in between stay inside the range.
    pub fn original_span(&self, start: usize, end: usize) -> (usize, usize) {
        if start >= end {
            let at = self.original_offset(start);
            return (at, at);
        }
        let first = self.original_offset(start);
        let last = self.original_offset(end - 1) + 1;
        (first, last)
    }
}

/// Normalize a surface form for lookup.
///
/// Soft hyphens and zero-width characters are removed. Text carrying a
/// replacement character or a control character is rejected: it came from
/// a broken decoder and no dictionary lookup can make sense of it.
/// Normalizing an already normalized form returns it unchanged.
pub fn normalize(surface: &str) -> Result<Normalized, NormalizeError> {
    let mut lookup = String::with_capacity(surface.len());
    let mut offsets = Vec::with_capacity(surface.len() + 1);
    let mut original_len = 0;

    for (i, c) in surface.chars().enumerate() {
        original_len = i + 1;
        if c == char::REPLACEMENT_CHARACTER {
            return Err(NormalizeError::ReplacementCharacter(i));
        }
        if c.is_control() {
            return Err(NormalizeError::ControlCharacter {
                code: c as u32,
                position: i,
            });
        }
        if is_ignorable(c) {
            continue;
        }
        lookup.push(c);
        offsets.push(i);
    }
    offsets.push(original_len);

    Ok(Normalized { lookup, offsets })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_word_is_unchanged() {
        let n = normalize("feedback").unwrap();
        assert_eq!(n.as_str(), "feedback");
        assert!(!n.is_changed());
        assert_eq!(n.original_span(0, 8), (0, 8));
    }

    #[test]
    fn soft_hyphen_is_removed() {
        let n = normalize("soft\u{00AD}ware").unwrap();
        assert_eq!(n.as_str(), "software");
        assert!(n.is_changed());
        assert_eq!(n.char_len(), 8);
        assert_eq!(n.original_len(), 9);
        // "ware" starts at lookup position 4, original position 5
        assert_eq!(n.original_offset(4), 5);
        assert_eq!(n.original_span(0, 8), (0, 9));
    }

    #[test]
    fn zero_width_characters_are_removed() {
        let n = normalize("\u{200B}tank\u{FEFF}\u{2060}").unwrap();
        assert_eq!(n.as_str(), "tank");
        // leading and trailing ignorables fall outside the word span
        assert_eq!(n.original_span(0, 4), (1, 5));
        assert_eq!(n.original_offset(4), 7);
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize("col\u{00AD}o\u{200D}ur").unwrap();
        let twice = normalize(once.as_str()).unwrap();
        assert_eq!(once.as_str(), twice.as_str());
        assert!(!twice.is_changed());
    }

    #[test]
    fn empty_input() {
        let n = normalize("").unwrap();
        assert_eq!(n.as_str(), "");
        assert_eq!(n.original_span(0, 0), (0, 0));
    }

    #[test]
    fn only_ignorables() {
        let n = normalize("\u{00AD}\u{00AD}").unwrap();
        assert_eq!(n.as_str(), "");
        assert_eq!(n.original_len(), 2);
    }

    #[test]
    fn replacement_character_is_rejected() {
        assert_eq!(
            normalize("caf\u{FFFD}").unwrap_err(),
            NormalizeError::ReplacementCharacter(3)
        );
    }

    #[test]
    fn control_character_is_rejected() {
        assert_eq!(
            normalize("a\u{0007}b").unwrap_err(),
            NormalizeError::ControlCharacter {
                code: 7,
                position: 1
            }
        );
    }

    #[test]
    fn multibyte_offsets_are_in_characters() {
        let n = normalize("fian\u{00AD}c\u{00E9}").unwrap();
        assert_eq!(n.as_str(), "fianc\u{00E9}");
        assert_eq!(n.original_offset(5), 6);
        assert_eq!(n.original_span(0, 6), (0, 7));
    }
}
