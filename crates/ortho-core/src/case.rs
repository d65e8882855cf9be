// Case pattern detection, case transfer and case-variant lookup forms

use crate::character::{is_lower, is_upper, simple_lower, simple_upper};

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No cased letters at all ("123", "-").
    NoLetters,
    /// All letters are lowercase: "software".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Software".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "LanguageTool".
    Complex,
    /// All letters are uppercase: "URL".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Uncased characters (digits, punctuation) are ignored. A single uppercase
/// letter ("A", "I") counts as `AllUpper`.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars().filter(|&c| is_upper(c) || is_lower(c));
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let mut rest_lower = true;
    let mut rest_upper = true;
    for c in chars {
        if is_upper(c) {
            rest_lower = false;
        } else {
            rest_upper = false;
        }
    }

    match (is_upper(first), rest_lower, rest_upper) {
        (true, _, true) => CaseType::AllUpper,
        (true, true, false) => CaseType::FirstUpper,
        (false, true, _) => CaseType::AllLower,
        _ => CaseType::Complex,
    }
}

/// Apply a case pattern to a word.
///
/// - `NoLetters` / `Complex`: the word is returned unchanged.
/// - `AllLower` / `AllUpper`: every letter is converted.
/// - `FirstUpper`: the first letter is uppercased, the rest left as is.
pub fn apply_case(word: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::NoLetters | CaseType::Complex => word.to_string(),
        CaseType::AllLower => word.chars().map(simple_lower).collect(),
        CaseType::AllUpper => word.chars().map(simple_upper).collect(),
        CaseType::FirstUpper => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => std::iter::once(simple_upper(first)).chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Transfer the case pattern of `source` onto a suggestion.
///
/// Only suggestions written entirely in lowercase are adjusted; anything
/// with deliberate capitals ("LanguageTool", "USTestWord") is kept. A single
/// uppercase letter source ("I") is treated as capitalized, not shouted.
pub fn transfer_case(source: &str, suggestion: &str) -> String {
    if detect_case(suggestion) != CaseType::AllLower {
        return suggestion.to_string();
    }
    match detect_case(source) {
        CaseType::AllUpper if source.chars().filter(|&c| is_upper(c)).count() > 1 => {
            apply_case(suggestion, CaseType::AllUpper)
        }
        CaseType::AllUpper | CaseType::FirstUpper => apply_case(suggestion, CaseType::FirstUpper),
        _ => suggestion.to_string(),
    }
}

/// Return the forms under which a word may legitimately appear in a word list.
///
/// The exact form always comes first. Capitalized words also try their
/// lowercase form (sentence-initial "But"); all-uppercase words additionally
/// try the capitalized form ("LONDON" -> "London"). Mixed-case words are only
/// looked up verbatim.
pub fn lookup_forms(word: &str) -> Vec<String> {
    let mut forms = vec![word.to_string()];
    match detect_case(word) {
        CaseType::FirstUpper => {
            forms.push(apply_case(word, CaseType::AllLower));
        }
        CaseType::AllUpper => {
            let lower = apply_case(word, CaseType::AllLower);
            let capitalized = apply_case(&lower, CaseType::FirstUpper);
            if capitalized != word {
                forms.push(capitalized);
            }
            forms.push(lower);
        }
        CaseType::NoLetters | CaseType::AllLower | CaseType::Complex => {}
    }
    forms.dedup();
    forms
}
