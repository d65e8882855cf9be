// Word-boundary repair: splitting fused words and merging broken ones
//
// Both directions reduce to probing a string against the lexicon:
//
//   split  "efeedback"        -> every (prefix, suffix) with both halves valid
//   merge  "than" + "kyou"    -> "thankyou" valid? replacement hit? else
//                                re-split it anywhere except "than|kyou"
//
// The functions here are pure. Choosing which tokens to probe, and keeping
// track of consumed tokens, belongs to the rule and the assembler.

/// The word-level checks repair needs.
pub trait Lexicon {
    /// Full acceptance check (user dictionary, then primary dictionary).
    fn is_valid(&self, word: &str) -> bool;

    /// Replacement-table corrections for `word`, best first.
    fn replacements(&self, word: &str) -> Vec<String>;
}

/// A word cut in two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Character index of the cut.
    pub at: usize,
    pub left: String,
    pub right: String,
    /// Number of halves that needed a replacement-table correction.
    pub cost: usize,
}

impl Split {
    /// The two halves joined by a space.
    pub fn joined(&self) -> String {
        format!("{} {}", self.left, self.right)
    }
}

/// Resolve one half of a split: valid as is (cost 0) or through its first
/// replacement (cost 1).
fn resolve_half<L: Lexicon + ?Sized>(lexicon: &L, half: &str) -> Option<(String, usize)> {
    if lexicon.is_valid(half) {
        return Some((half.to_string(), 0));
    }
    lexicon
        .replacements(half)
        .into_iter()
        .next()
        .map(|replacement| (replacement, 1))
}

/// Find the best binary split of `word` into two words.
///
/// Splits whose halves are exact dictionary hits beat splits needing a
/// replacement. Among equals the cut nearest the middle wins, then the
/// leftmost cut. `exclude` names a cut position that must not be proposed
/// (the original token boundary when re-splitting a merge).
pub fn best_split<L: Lexicon + ?Sized>(
    lexicon: &L,
    word: &str,
    exclude: Option<usize>,
) -> Option<Split> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut best: Option<((usize, usize), Split)> = None;

    for at in 1..n {
        if exclude == Some(at) {
            continue;
        }
        let left: String = chars[..at].iter().collect();
        let right: String = chars[at..].iter().collect();
        let Some((left, left_cost)) = resolve_half(lexicon, &left) else {
            continue;
        };
        let Some((right, right_cost)) = resolve_half(lexicon, &right) else {
            continue;
        };

        let cost = left_cost + right_cost;
        let key = (cost, (2 * at).abs_diff(n));
        if best.as_ref().is_none_or(|(best_key, _)| key < *best_key) {
            best = Some((
                key,
                Split {
                    at,
                    left,
                    right,
                    cost,
                },
            ));
        }
    }

    best.map(|(_, split)| split)
}

/// Repair two adjacent tokens as one word.
///
/// Returns the single correction for the pair: the concatenation when it
/// is a word, otherwise its first replacement, otherwise the best re-split
/// of the concatenation at a different boundary.
pub fn merge_pair<L: Lexicon + ?Sized>(lexicon: &L, left: &str, right: &str) -> Option<String> {
    let merged = format!("{left}{right}");
    if lexicon.is_valid(&merged) {
        return Some(merged);
    }
    if let Some(replacement) = lexicon.replacements(&merged).into_iter().next() {
        return Some(replacement);
    }
    let boundary = left.chars().count();
    best_split(lexicon, &merged, Some(boundary)).map(|split| split.joined())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockLexicon {
        words: &'static [&'static str],
        rules: &'static [(&'static str, &'static str)],
    }

    impl Lexicon for MockLexicon {
        fn is_valid(&self, word: &str) -> bool {
            self.words.contains(&word)
        }

        fn replacements(&self, word: &str) -> Vec<String> {
            self.rules
                .iter()
                .filter(|(from, _)| *from == word)
                .map(|(_, to)| to.to_string())
                .collect()
        }
    }

    const LEX: MockLexicon = MockLexicon {
        words: &[
            "the", "feedback", "thank", "you", "for", "offers", "spell", "a", "an", "i", "no",
            "on", "car", "pet", "carpet", "taught", "us",
        ],
        rules: &[("teached", "taught"), ("carpit", "carpet")],
    };

    #[test]
    fn split_into_two_words() {
        let s = best_split(&LEX, "efeedback", None);
        assert!(s.is_none());
        let s = best_split(&LEX, "thefeedback", None).unwrap();
        assert_eq!(s.joined(), "the feedback");
        assert_eq!(s.at, 3);
        assert_eq!(s.cost, 0);
    }

    #[test]
    fn no_split_for_unsplittable_word() {
        assert!(best_split(&LEX, "thnk", None).is_none());
        assert!(best_split(&LEX, "", None).is_none());
        assert!(best_split(&LEX, "a", None).is_none());
    }

    #[test]
    fn midpoint_split_preferred() {
        // "anno": "an|no" (midpoint) beats nothing else; "ian" only splits as "i|an"
        assert_eq!(best_split(&LEX, "anno", None).unwrap().joined(), "an no");
        assert_eq!(best_split(&LEX, "ian", None).unwrap().joined(), "i an");
    }

    #[test]
    fn equal_distance_picks_leftmost() {
        const TIE: MockLexicon = MockLexicon {
            words: &["ab", "cde", "abc", "de"],
            rules: &[],
        };
        // cuts at 2 and 3 are both half a character from the middle of 5
        let s = best_split(&TIE, "abcde", None).unwrap();
        assert_eq!(s.at, 2);
        assert_eq!(s.joined(), "ab cde");
    }

    #[test]
    fn exact_halves_beat_replacement_halves() {
        const MIX: MockLexicon = MockLexicon {
            words: &["ab", "cdef", "abcd"],
            rules: &[("ef", "of")],
        };
        // "abcd|ef" needs a replacement, "ab|cdef" does not
        assert_eq!(best_split(&MIX, "abcdef", None).unwrap().joined(), "ab cdef");
    }

    #[test]
    fn replacement_half_is_used_when_needed() {
        let s = best_split(&LEX, "teachedus", None).unwrap();
        assert_eq!(s.joined(), "taught us");
        assert_eq!(s.cost, 1);
    }

    #[test]
    fn excluded_cut_is_skipped() {
        assert!(best_split(&LEX, "carpet", Some(3)).is_none());
        assert_eq!(best_split(&LEX, "carpet", None).unwrap().joined(), "car pet");
    }

    #[test]
    fn merge_valid_concatenation() {
        assert_eq!(merge_pair(&LEX, "car", "pet").as_deref(), Some("carpet"));
    }

    #[test]
    fn merge_through_replacement() {
        assert_eq!(merge_pair(&LEX, "car", "pit").as_deref(), Some("carpet"));
    }

    #[test]
    fn merge_resplits_at_new_boundary() {
        assert_eq!(merge_pair(&LEX, "than", "kyou").as_deref(), Some("thank you"));
        assert_eq!(merge_pair(&LEX, "thanky", "ou").as_deref(), Some("thank you"));
        assert_eq!(merge_pair(&LEX, "fo", "rthe").as_deref(), Some("for the"));
        assert_eq!(merge_pair(&LEX, "offer", "sspell").as_deref(), Some("offers spell"));
    }

    #[test]
    fn merge_never_proposes_the_original_boundary() {
        assert_eq!(merge_pair(&LEX, "thank", "you"), None);
    }

    #[test]
    fn merge_fails_without_reconciliation() {
        assert_eq!(merge_pair(&LEX, "thnk", "you"), None);
    }
}
