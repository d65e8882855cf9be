// The spelling rule: token checks, candidate generation, assembly

use ortho_core::case::{lookup_forms, transfer_case};
use ortho_core::character::{has_digit, has_latin_letter};
use ortho_core::enums::Provenance;
use ortho_core::rule_match::Match;
use ortho_core::token::{AnalyzedToken, AnnotatedSentence};

use crate::assembler::{Candidate, SuggestionList, assemble};
use crate::cache::{CacheKey, CacheStats, SuggestionCache};
use crate::config::RuleConfig;
use crate::error::{Result, SpellerError};
use crate::hyphen::{CompoundVerdict, is_compound, resolve_compound};
use crate::normalize::{Normalized, normalize};
use crate::replacement::ReplacementTable;
use crate::repair::{Lexicon, best_split, merge_pair};
use crate::tokenizer::{is_nonword, tokenize};
use crate::user_dict::UserDictionary;
use crate::variant::VariantProfile;

// ---------------------------------------------------------------------------
// Word verdicts
// ---------------------------------------------------------------------------

/// Why a word is wrong and what to offer instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    pub provenance: Provenance,
    /// Suggestions for the word on its own, best first.
    pub suggestions: Vec<String>,
    /// Display name of a cross-reference variant accepting the word.
    pub other_variant: Option<String>,
    /// Whether the word may take part in split/merge repair.
    pub repairable: bool,
}

/// Standalone outcome of checking one word. This is what the cache stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordVerdict {
    /// Accepted through the user dictionary.
    UserWord,
    /// Accepted by the primary dictionary.
    Valid,
    /// Hyphenated compound whose parts are all valid.
    Compound,
    Misspelled(Misspelling),
}

impl WordVerdict {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, WordVerdict::Misspelled(_))
    }

    pub fn misspelling(&self) -> Option<&Misspelling> {
        match self {
            WordVerdict::Misspelled(m) => Some(m),
            _ => None,
        }
    }

    /// Whether a neighbor may merge with this word.
    fn is_merge_partner(&self) -> bool {
        match self {
            WordVerdict::Valid => true,
            WordVerdict::Misspelled(m) => m.repairable,
            WordVerdict::UserWord | WordVerdict::Compound => false,
        }
    }
}

/// Per-token state for one sentence.
struct Checked {
    lookup: Normalized,
    verdict: WordVerdict,
}

enum TokenState {
    /// Not a token the rule looks at.
    Skipped,
    /// A word that could not be normalized.
    Broken,
    Checked(Checked),
}

// ---------------------------------------------------------------------------
// SpellerRule
// ---------------------------------------------------------------------------

/// A spelling rule for one language variant.
///
/// The rule owns its configuration, user dictionary and cache; dictionaries
/// are shared through the profile. Matching takes `&self` and may run from
/// several threads at once.
pub struct SpellerRule {
    id: String,
    profile: VariantProfile,
    replacements: ReplacementTable,
    user_dict: UserDictionary,
    config: RuleConfig,
    cache: SuggestionCache<WordVerdict>,
}

impl SpellerRule {
    /// Build a rule. The configured variant must name the profile.
    pub fn new(
        profile: VariantProfile,
        replacements: ReplacementTable,
        config: RuleConfig,
    ) -> Result<Self> {
        config.validate()?;
        if config.variant != profile.id() {
            return Err(SpellerError::InvalidConfig(format!(
                "configured variant '{}' does not match profile '{}'",
                config.variant,
                profile.id()
            )));
        }
        let user_dict = UserDictionary::new(&config.user_words);
        let cache = SuggestionCache::with_capacity(config.cache_capacity);
        log::debug!(
            "spelling rule {} ready: {} cross-references, {} user words",
            profile.rule_id(),
            profile.cross_references().len(),
            user_dict.len()
        );
        Ok(Self {
            id: profile.rule_id(),
            profile,
            replacements,
            user_dict,
            config,
            cache,
        })
    }

    /// Rule identifier, e.g. `MORFOLOGIK_RULE_EN_US`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn profile(&self) -> &VariantProfile {
        &self.profile
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn user_dictionary(&self) -> &UserDictionary {
        &self.user_dict
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Replace the user dictionary. Cached verdicts are dropped.
    pub fn set_user_dictionary<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.user_dict = UserDictionary::new(words);
        self.config.user_words = self.user_dict.words().to_vec();
        self.cache.clear();
        log::debug!("{}: user dictionary replaced ({} words)", self.id, self.user_dict.len());
    }

    /// Replace the configuration. The variant cannot change; build a new
    /// rule for another variant.
    pub fn reconfigure(&mut self, config: RuleConfig) -> Result<()> {
        config.validate()?;
        if config.variant != self.profile.id() {
            return Err(SpellerError::InvalidConfig(format!(
                "cannot switch rule {} to variant '{}'",
                self.id, config.variant
            )));
        }
        self.user_dict = UserDictionary::new(&config.user_words);
        self.cache = SuggestionCache::with_capacity(config.cache_capacity);
        self.config = config;
        log::debug!("{}: reconfigured", self.id);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Public checks
    // -----------------------------------------------------------------------

    /// Tokenize `text` with the reference tokenizer and match it.
    pub fn match_text(&self, text: &str) -> Result<Vec<Match>> {
        self.match_sentence(&tokenize(text))
    }

    /// Find spelling issues in a tokenized sentence.
    ///
    /// Matches are sorted by start offset and never overlap.
    pub fn match_sentence(&self, sentence: &AnnotatedSentence) -> Result<Vec<Match>> {
        if self.config.is_disabled(&self.id) {
            return Ok(Vec::new());
        }
        let tokens = sentence.tokens();
        let states = tokens
            .iter()
            .map(|token| self.check_token(token))
            .collect::<Result<Vec<_>>>()?;

        let lexicon = RuleLexicon { rule: self };
        let mut candidates = Vec::new();

        for (i, (token, state)) in tokens.iter().zip(&states).enumerate() {
            let checked = match state {
                TokenState::Skipped => continue,
                TokenState::Broken => {
                    candidates.push(Candidate::single(
                        i,
                        (token.start, token.end()),
                        token.text.clone(),
                        Vec::new(),
                        Provenance::DictionaryNeighbor,
                    ));
                    continue;
                }
                TokenState::Checked(checked) => checked,
            };
            let Some(misspelling) = checked.verdict.misspelling() else {
                continue;
            };

            let (start, end) = word_span(token, &checked.lookup);
            let mut candidate = Candidate::single(
                i,
                (start, end),
                sentence.slice(start, end),
                misspelling.suggestions.clone(),
                misspelling.provenance,
            );
            if let Some(variant) = &misspelling.other_variant {
                candidate = candidate.in_other_variant(variant.clone());
            }
            candidates.push(candidate);

            if !(misspelling.repairable && self.config.split_merge_repair) {
                continue;
            }
            let neighbors = [
                previous_word(tokens, i).map(|p| (p, i)),
                next_word(tokens, i).map(|n| (i, n)),
            ];
            for (left, right) in neighbors.into_iter().flatten() {
                if let Some(merge) = self.merge_candidate(sentence, &states, &lexicon, left, right)
                {
                    candidates.push(merge);
                }
            }
        }

        Ok(assemble(
            candidates,
            self.config.max_suggestions,
            &self.config.messages,
        ))
    }

    /// Check a single word outside any sentence context.
    pub fn check_word(&self, word: &str) -> Result<WordVerdict> {
        match normalize(word) {
            Ok(lookup) if !lookup.as_str().is_empty() => self.verdict(lookup.as_str()),
            Ok(_) => Ok(WordVerdict::Valid),
            Err(_) => Ok(WordVerdict::Misspelled(Misspelling {
                provenance: Provenance::DictionaryNeighbor,
                suggestions: Vec::new(),
                other_variant: None,
                repairable: false,
            })),
        }
    }

    /// Suggestions for a single word; empty when the word is accepted.
    pub fn suggest(&self, word: &str) -> Result<Vec<String>> {
        let verdict = self.check_word(word)?;
        let mut list = SuggestionList::new(self.config.max_suggestions);
        if let Some(m) = verdict.misspelling() {
            list.extend(m.suggestions.iter().cloned());
        }
        Ok(list.into_vec())
    }

    // -----------------------------------------------------------------------
    // Token classification
    // -----------------------------------------------------------------------

    fn check_token(&self, token: &AnalyzedToken) -> Result<TokenState> {
        if !self.is_checked(token) {
            return Ok(TokenState::Skipped);
        }
        let Ok(lookup) = normalize(&token.text) else {
            log::debug!("{}: cannot normalize {:?}", self.id, token.text);
            return Ok(TokenState::Broken);
        };
        if lookup.as_str().is_empty() {
            return Ok(TokenState::Skipped);
        }
        let verdict = self.verdict(lookup.as_str())?;
        Ok(TokenState::Checked(Checked { lookup, verdict }))
    }

    fn is_checked(&self, token: &AnalyzedToken) -> bool {
        let text = token.text.as_str();
        token.is_word()
            && !token.immunized
            && has_latin_letter(text)
            && !(self.config.ignore_nonwords && is_nonword(text))
            && !(self.config.ignore_words_with_digits && has_digit(text))
    }

    /// Cached standalone verdict for a normalized word.
    fn verdict(&self, word: &str) -> Result<WordVerdict> {
        let key = CacheKey::new(word, self.profile.id());
        self.cache.get_or_compute(&key, || self.compute_verdict(word))
    }

    fn compute_verdict(&self, word: &str) -> Result<WordVerdict> {
        if self.user_dict.contains(word) {
            return Ok(WordVerdict::UserWord);
        }
        if self.profile.accepts(word) {
            return Ok(WordVerdict::Valid);
        }

        if let Some(other) = self.profile.other_variant(word) {
            let mut suggestions: Vec<String> = other.conversion(word).into_iter().collect();
            let provenance = if suggestions.is_empty() {
                Provenance::DictionaryNeighbor
            } else {
                Provenance::ReplacementRule
            };
            suggestions.extend(self.fuzzy(word)?);
            return Ok(WordVerdict::Misspelled(Misspelling {
                provenance,
                suggestions,
                other_variant: Some(other.name().to_string()),
                repairable: false,
            }));
        }

        match resolve_compound(word, |part| self.is_valid(part)) {
            CompoundVerdict::Accepted => return Ok(WordVerdict::Compound),
            CompoundVerdict::Rejected => {
                let mut suggestions = self.replacement_hits(word);
                suggestions.extend(self.fuzzy(word)?);
                return Ok(WordVerdict::Misspelled(Misspelling {
                    provenance: Provenance::HyphenPart,
                    suggestions,
                    other_variant: None,
                    repairable: false,
                }));
            }
            CompoundVerdict::NotCompound => {}
        }

        let hits = self.replacement_hits(word);
        let (provenance, mut suggestions) = if !hits.is_empty() {
            (Provenance::ReplacementRule, hits)
        } else if let Some(split) = self.split(word) {
            (Provenance::SplitRepair, vec![split])
        } else {
            (Provenance::DictionaryNeighbor, Vec::new())
        };
        suggestions.extend(self.fuzzy(word)?);

        Ok(WordVerdict::Misspelled(Misspelling {
            provenance,
            suggestions,
            other_variant: None,
            repairable: !is_compound(word),
        }))
    }

    // -----------------------------------------------------------------------
    // Generators
    // -----------------------------------------------------------------------

    /// User dictionary first, then the primary dictionary.
    fn is_valid(&self, word: &str) -> bool {
        self.user_dict.contains(word) || self.profile.accepts(word)
    }

    /// Replacement-table corrections, cased like `word`.
    fn replacement_hits(&self, word: &str) -> Vec<String> {
        for form in lookup_forms(word) {
            let hits = self
                .replacements
                .lookup(&form, |candidate| self.profile.accepts(candidate));
            if !hits.is_empty() {
                return hits.iter().map(|h| transfer_case(word, h)).collect();
            }
        }
        Vec::new()
    }

    fn split(&self, word: &str) -> Option<String> {
        if !self.config.split_merge_repair {
            return None;
        }
        let split = best_split(&RuleLexicon { rule: self }, word, None)?;
        log::debug!("{}: split {:?} -> {:?}", self.id, word, split.joined());
        Some(transfer_case(word, &split.joined()))
    }

    /// Edit-distance neighbors from the primary dictionary.
    fn fuzzy(&self, word: &str) -> Result<Vec<String>> {
        let neighbors = self
            .profile
            .primary()
            .neighbors(word, self.config.max_suggestions)?;
        Ok(neighbors.iter().map(|n| transfer_case(word, n)).collect())
    }

    /// A merge candidate over tokens `left` and `right`, when both may merge
    /// and the pair reconciles into a word.
    fn merge_candidate(
        &self,
        sentence: &AnnotatedSentence,
        states: &[TokenState],
        lexicon: &RuleLexicon<'_>,
        left: usize,
        right: usize,
    ) -> Option<Candidate> {
        let (TokenState::Checked(l), TokenState::Checked(r)) = (&states[left], &states[right])
        else {
            return None;
        };
        if !(l.verdict.is_merge_partner() && r.verdict.is_merge_partner())
            || is_compound(l.lookup.as_str())
            || is_compound(r.lookup.as_str())
        {
            return None;
        }
        let merged = merge_pair(lexicon, l.lookup.as_str(), r.lookup.as_str())?;
        let suggestion = transfer_case(l.lookup.as_str(), &merged);

        let tokens = sentence.tokens();
        let start = word_span(&tokens[left], &l.lookup).0;
        let end = word_span(&tokens[right], &r.lookup).1;
        log::debug!(
            "{}: merge {:?} + {:?} -> {:?}",
            self.id,
            l.lookup.as_str(),
            r.lookup.as_str(),
            suggestion
        );
        Some(Candidate {
            first_token: left,
            last_token: right,
            start,
            end,
            word: sentence.slice(start, end),
            suggestions: vec![suggestion],
            provenance: Provenance::MergeRepair,
            other_variant: None,
        })
    }
}

impl std::fmt::Debug for SpellerRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellerRule")
            .field("id", &self.id)
            .field("profile", &self.profile)
            .field("user_words", &self.user_dict.len())
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Split/merge repair sees the primary dictionary only, so user words
/// never change how other words are repaired.
struct RuleLexicon<'a> {
    rule: &'a SpellerRule,
}

impl Lexicon for RuleLexicon<'_> {
    fn is_valid(&self, word: &str) -> bool {
        self.rule.profile.accepts(word)
    }

    fn replacements(&self, word: &str) -> Vec<String> {
        self.rule.replacement_hits(word)
    }
}

// ---------------------------------------------------------------------------
// Sentence helpers
// ---------------------------------------------------------------------------

/// Character span of a word in the sentence, without leading or trailing
/// ignorables.
fn word_span(token: &AnalyzedToken, lookup: &Normalized) -> (usize, usize) {
    let (a, b) = lookup.original_span(0, lookup.char_len());
    (token.start + a, token.start + b)
}

/// The word token before `i` with only whitespace in between.
fn previous_word(tokens: &[AnalyzedToken], i: usize) -> Option<usize> {
    let mut j = i.checked_sub(1)?;
    while tokens[j].is_whitespace() {
        j = j.checked_sub(1)?;
    }
    (j + 1 < i && tokens[j].is_word()).then_some(j)
}

/// The word token after `i` with only whitespace in between.
fn next_word(tokens: &[AnalyzedToken], i: usize) -> Option<usize> {
    let mut j = i + 1;
    while tokens.get(j)?.is_whitespace() {
        j += 1;
    }
    (j > i + 1 && tokens[j].is_word()).then_some(j)
}
