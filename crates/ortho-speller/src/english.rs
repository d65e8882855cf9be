// Bundled English data: American, British and Canadian profiles

use std::sync::Arc;

use hashbrown::HashMap;

use crate::config::RuleConfig;
use crate::error::{Result, SpellerError};
use crate::oracle::WordListDictionary;
use crate::replacement::ReplacementTable;
use crate::rule::SpellerRule;
use crate::variant::{CrossReference, OracleRef, VariantProfile, invert_conversions, parse_conversions};

const COMMON: &str = include_str!("../data/en_common.txt");
const ADDITIONS: &str = include_str!("../data/spelling_en.txt");
const AMERICAN: &str = include_str!("../data/en_US.txt");
const BRITISH: &str = include_str!("../data/en_GB.txt");
const CANADIAN: &str = include_str!("../data/en_CA.txt");
const REPLACEMENTS: &str = include_str!("../data/replacements_en.txt");
const BRITISH_TO_AMERICAN: &str = include_str!("../data/en_GB_US.txt");

/// Supported variant tags.
pub const VARIANTS: &[&str] = &["en-US", "en-GB", "en-CA"];

/// The bundled English dictionaries, loaded once and shared by every
/// profile built from them.
#[derive(Clone)]
pub struct BundledEnglish {
    american: OracleRef,
    british: OracleRef,
    canadian: OracleRef,
    replacements: ReplacementTable,
    british_to_american: HashMap<String, String>,
}

impl BundledEnglish {
    pub fn load() -> Result<Self> {
        let american = WordListDictionary::from_texts("en-US", &[COMMON, AMERICAN, ADDITIONS])?;
        let british = WordListDictionary::from_texts("en-GB", &[COMMON, BRITISH, ADDITIONS])?;
        let canadian = WordListDictionary::from_texts("en-CA", &[COMMON, CANADIAN, ADDITIONS])?;
        Ok(Self {
            american: Arc::new(american),
            british: Arc::new(british),
            canadian: Arc::new(canadian),
            replacements: ReplacementTable::parse(REPLACEMENTS)?,
            british_to_american: parse_conversions(BRITISH_TO_AMERICAN)?,
        })
    }

    pub fn replacements(&self) -> &ReplacementTable {
        &self.replacements
    }

    /// American English, explaining British spellings.
    pub fn american(&self) -> VariantProfile {
        VariantProfile::new("en-US", "American English", Arc::clone(&self.american))
            .with_cross_reference(
                CrossReference::new("British English", Arc::clone(&self.british))
                    .with_conversions(self.british_to_american.clone()),
            )
    }

    /// British English, explaining American spellings.
    pub fn british(&self) -> VariantProfile {
        VariantProfile::new("en-GB", "British English", Arc::clone(&self.british))
            .with_cross_reference(
                CrossReference::new("American English", Arc::clone(&self.american))
                    .with_conversions(invert_conversions(&self.british_to_american)),
            )
    }

    /// Canadian English, explaining American and British spellings.
    ///
    /// Canadian follows British spelling for the `-our`/`-re` words, so the
    /// American conversions are the inverted British ones.
    pub fn canadian(&self) -> VariantProfile {
        VariantProfile::new("en-CA", "Canadian English", Arc::clone(&self.canadian))
            .with_cross_reference(
                CrossReference::new("American English", Arc::clone(&self.american))
                    .with_conversions(invert_conversions(&self.british_to_american)),
            )
            .with_cross_reference(CrossReference::new(
                "British English",
                Arc::clone(&self.british),
            ))
    }

    /// Profile for a variant tag.
    pub fn profile(&self, variant: &str) -> Result<VariantProfile> {
        match variant {
            "en-US" => Ok(self.american()),
            "en-GB" => Ok(self.british()),
            "en-CA" => Ok(self.canadian()),
            other => Err(SpellerError::UnknownVariant(other.to_string())),
        }
    }

    /// Build a rule for the configured variant.
    pub fn rule(&self, config: RuleConfig) -> Result<SpellerRule> {
        let profile = self.profile(&config.variant)?;
        SpellerRule::new(profile, self.replacements.clone(), config)
    }
}

impl std::fmt::Debug for BundledEnglish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundledEnglish")
            .field("replacements", &self.replacements.len())
            .field("conversions", &self.british_to_american.len())
            .finish_non_exhaustive()
    }
}

/// Load the bundled data and build one rule.
pub fn rule(config: RuleConfig) -> Result<SpellerRule> {
    BundledEnglish::load()?.rule(config)
}
