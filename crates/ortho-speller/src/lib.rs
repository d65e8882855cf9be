//! Dictionary-backed spelling rule.
//!
//! A [`SpellerRule`] checks the word tokens of an [`AnnotatedSentence`]
//! against a [`VariantProfile`] and returns span-disjoint
//! [`Match`]es. Candidates come from, in order of precedence:
//!
//! 1. merges of two adjacent tokens ([`repair::merge_pair`])
//! 2. the curated [`ReplacementTable`]
//! 3. splits of one token into two words ([`repair::best_split`])
//! 4. hyphenated compounds with an invalid part
//! 5. edit-distance neighbors from the [`DictionaryOracle`]
//!
//! Per-word results are memoized in a [`SuggestionCache`] owned by the rule.
//!
//! [`AnnotatedSentence`]: ortho_core::token::AnnotatedSentence
//! [`Match`]: ortho_core::rule_match::Match

pub mod assembler;
pub mod cache;
pub mod config;
#[cfg(feature = "bundled-en")]
pub mod english;
pub mod error;
pub mod hyphen;
pub mod normalize;
pub mod oracle;
pub mod repair;
pub mod replacement;
pub mod rule;
pub mod tokenizer;
pub mod user_dict;
pub mod variant;

pub use cache::SuggestionCache;
pub use config::RuleConfig;
pub use error::{NormalizeError, Result, SpellerError};
pub use oracle::{DictionaryOracle, WordListDictionary};
pub use replacement::ReplacementTable;
pub use rule::{SpellerRule, WordVerdict};
pub use user_dict::UserDictionary;
pub use variant::{CrossReference, VariantProfile};
