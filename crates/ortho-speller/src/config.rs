// Rule configuration

use serde::{Deserialize, Serialize};

use crate::assembler::Messages;
use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::error::{Result, SpellerError};

/// Default number of suggestions per match.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Options consumed by [`SpellerRule`](crate::rule::SpellerRule).
///
/// Every field has a default, so a configuration file only needs to name
/// what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Language tag of the active variant (`en-US`, `en-GB`, `en-CA`).
    pub variant: String,
    /// Extra words accepted for this session, in order.
    pub user_words: Vec<String>,
    /// Rule identifiers switched off by the user.
    pub disabled_rules: Vec<String>,
    pub max_suggestions: usize,
    /// Skip tokens containing digits ("mp3", "B2B").
    pub ignore_words_with_digits: bool,
    /// Skip URLs, e-mail addresses and `www.` hosts.
    pub ignore_nonwords: bool,
    /// Probe neighbor tokens for split or merged words.
    pub split_merge_repair: bool,
    /// Distinct words the verdict cache holds before it starts over.
    pub cache_capacity: usize,
    pub messages: Messages,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            variant: "en-US".to_string(),
            user_words: Vec::new(),
            disabled_rules: Vec::new(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            ignore_words_with_digits: true,
            ignore_nonwords: true,
            split_merge_repair: true,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            messages: Messages::default(),
        }
    }
}

impl RuleConfig {
    /// Default configuration for one variant.
    pub fn for_variant(variant: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            ..Self::default()
        }
    }

    /// Builder-style user word list.
    pub fn with_user_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Check values that would make the rule meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.variant.trim().is_empty() {
            return Err(SpellerError::InvalidConfig("variant must not be empty".into()));
        }
        if self.max_suggestions == 0 {
            return Err(SpellerError::InvalidConfig(
                "max_suggestions must be at least 1".into(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(SpellerError::InvalidConfig(
                "cache_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn is_disabled(&self, rule_id: &str) -> bool {
        self.disabled_rules.iter().any(|r| r == rule_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = RuleConfig::default();
        assert_eq!(c.variant, "en-US");
        assert_eq!(c.max_suggestions, 10);
        assert!(c.ignore_words_with_digits);
        assert!(c.ignore_nonwords);
        assert!(c.split_merge_repair);
        assert_eq!(c.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c: RuleConfig =
            serde_json::from_str(r#"{"variant":"en-GB","user_words":["mytestword"]}"#).unwrap();
        assert_eq!(c.variant, "en-GB");
        assert_eq!(c.user_words, vec!["mytestword"]);
        assert_eq!(c.max_suggestions, DEFAULT_MAX_SUGGESTIONS);
    }

    #[test]
    fn round_trips_through_json() {
        let c = RuleConfig::for_variant("en-CA").with_user_words(["a1", "b2"]);
        let json = serde_json::to_string(&c).unwrap();
        let back: RuleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut c = RuleConfig::for_variant(" ");
        assert!(matches!(c.validate(), Err(SpellerError::InvalidConfig(_))));
        c.variant = "en-US".into();
        c.max_suggestions = 0;
        assert!(c.validate().is_err());
        c.max_suggestions = 3;
        c.cache_capacity = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn disabled_rule_lookup() {
        let mut c = RuleConfig::default();
        c.disabled_rules.push("MORFOLOGIK_RULE_EN_US".into());
        assert!(c.is_disabled("MORFOLOGIK_RULE_EN_US"));
        assert!(!c.is_disabled("MORFOLOGIK_RULE_EN_GB"));
    }
}
