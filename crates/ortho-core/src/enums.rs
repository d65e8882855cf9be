// Shared enums: TokenType, Provenance

use serde::{Deserialize, Serialize};

/// Token types produced by the upstream tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Word token (letters, possibly joined by hyphens or apostrophes).
    Word,
    /// Punctuation token.
    Punctuation,
    /// Whitespace token.
    Whitespace,
    /// Anything else (symbols, emoji, unassigned code points).
    Unknown,
}

/// Where a correction came from.
///
/// The variant order is the precedence order used when several candidates
/// compete for the same token position: earlier variants win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// Two adjacent tokens repaired into one span.
    MergeRepair,
    /// Curated replacement-table hit.
    ReplacementRule,
    /// One token split into two dictionary words.
    SplitRepair,
    /// Hyphenated compound with an invalid part; suggestions cover the whole token.
    HyphenPart,
    /// Edit-distance neighbors from the dictionary.
    DictionaryNeighbor,
}

impl Provenance {
    /// Short identifier used in logs and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Provenance::MergeRepair => "merge-repair",
            Provenance::ReplacementRule => "replacement-rule",
            Provenance::SplitRepair => "split-repair",
            Provenance::HyphenPart => "hyphen-part",
            Provenance::DictionaryNeighbor => "dictionary-neighbor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provenance_precedence_order() {
        assert!(Provenance::MergeRepair < Provenance::ReplacementRule);
        assert!(Provenance::ReplacementRule < Provenance::SplitRepair);
        assert!(Provenance::SplitRepair < Provenance::HyphenPart);
        assert!(Provenance::HyphenPart < Provenance::DictionaryNeighbor);
    }

    #[test]
    fn provenance_serializes_kebab_case() {
        let json = serde_json::to_string(&Provenance::ReplacementRule).unwrap();
        assert_eq!(json, "\"replacement-rule\"");
        assert_eq!(Provenance::SplitRepair.as_str(), "split-repair");
    }
}
