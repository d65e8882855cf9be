// Language variant profiles: one primary dictionary plus cross-references

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use ortho_core::case::{lookup_forms, transfer_case};

use crate::error::{Result, SpellerError};
use crate::oracle::DictionaryOracle;

/// Shared handle to a loaded dictionary.
pub type OracleRef = Arc<dyn DictionaryOracle>;

/// Check a word against an oracle, allowing the usual case variants.
pub fn accepts(oracle: &dyn DictionaryOracle, word: &str) -> bool {
    lookup_forms(word).iter().any(|form| oracle.is_valid(form))
}

// ---------------------------------------------------------------------------
// CrossReference
// ---------------------------------------------------------------------------

/// A dictionary of another variant of the same language.
///
/// It never makes a word correct. It only explains why a word is wrong
/// ("colour is British English") and may know the primary spelling.
#[derive(Clone)]
pub struct CrossReference {
    name: String,
    oracle: OracleRef,
    /// Cross-reference spelling -> primary-variant spelling.
    conversions: HashMap<String, String>,
}

impl CrossReference {
    /// `name` is the human-readable variant name used in messages.
    pub fn new(name: impl Into<String>, oracle: OracleRef) -> Self {
        Self {
            name: name.into(),
            oracle,
            conversions: HashMap::new(),
        }
    }

    /// Attach a conversion map to the primary variant.
    pub fn with_conversions(mut self, conversions: HashMap<String, String>) -> Self {
        self.conversions = conversions;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn oracle(&self) -> &OracleRef {
        &self.oracle
    }

    /// Whether the word is spelled correctly in this variant.
    pub fn accepts(&self, word: &str) -> bool {
        accepts(self.oracle.as_ref(), word)
    }

    /// The primary-variant spelling of `word`, cased like `word`.
    pub fn conversion(&self, word: &str) -> Option<String> {
        lookup_forms(word)
            .iter()
            .find_map(|form| self.conversions.get(form))
            .map(|target| transfer_case(word, target))
    }
}

impl fmt::Debug for CrossReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossReference")
            .field("name", &self.name)
            .field("oracle", &self.oracle.name())
            .field("conversions", &self.conversions.len())
            .finish()
    }
}

/// Parse a conversion table: `source=target` per line, `#` comments.
pub fn parse_conversions(text: &str) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let pair = line
            .split_once('=')
            .map(|(a, b)| (a.trim(), b.trim()))
            .filter(|(a, b)| !a.is_empty() && !b.is_empty());
        let Some((source, target)) = pair else {
            return Err(SpellerError::MalformedConversion {
                line: idx + 1,
                text: raw.to_string(),
            });
        };
        map.insert(source.to_string(), target.to_string());
    }
    Ok(map)
}

/// Invert a conversion table (`colour=color` becomes `color=colour`).
pub fn invert_conversions(map: &HashMap<String, String>) -> HashMap<String, String> {
    map.iter().map(|(a, b)| (b.clone(), a.clone())).collect()
}

// ---------------------------------------------------------------------------
// VariantProfile
// ---------------------------------------------------------------------------

/// Everything the rule needs to know about the active variant.
#[derive(Clone)]
pub struct VariantProfile {
    id: String,
    name: String,
    primary: OracleRef,
    cross_references: Vec<CrossReference>,
}

impl VariantProfile {
    /// `id` is a language tag such as `en-US`, `name` its display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>, primary: OracleRef) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            primary,
            cross_references: Vec::new(),
        }
    }

    /// Add a cross-reference variant. Earlier ones take precedence when a
    /// word is valid in several.
    pub fn with_cross_reference(mut self, cross_reference: CrossReference) -> Self {
        self.cross_references.push(cross_reference);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary(&self) -> &OracleRef {
        &self.primary
    }

    pub fn cross_references(&self) -> &[CrossReference] {
        &self.cross_references
    }

    /// Identifier of the spelling rule for this variant, for example
    /// `MORFOLOGIK_RULE_EN_US`.
    pub fn rule_id(&self) -> String {
        let tag: String = self
            .id
            .chars()
            .map(|c| if c == '-' { '_' } else { c.to_ascii_uppercase() })
            .collect();
        format!("MORFOLOGIK_RULE_{tag}")
    }

    /// Whether the primary dictionary accepts `word` (with case variants).
    pub fn accepts(&self, word: &str) -> bool {
        accepts(self.primary.as_ref(), word)
    }

    /// The first cross-reference variant that accepts `word`.
    pub fn other_variant(&self, word: &str) -> Option<&CrossReference> {
        self.cross_references.iter().find(|cr| cr.accepts(word))
    }
}

impl fmt::Debug for VariantProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantProfile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("primary", &self.primary.name())
            .field("cross_references", &self.cross_references)
            .finish()
    }
}
