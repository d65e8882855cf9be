// Error types for rule construction and lookup

use std::path::PathBuf;

/// Errors raised while loading data or answering a lookup.
///
/// Load errors are fatal: a rule is never constructed over partially loaded
/// data. `OracleUnavailable` is the only error a running rule can return.
#[derive(Debug, thiserror::Error)]
pub enum SpellerError {
    /// A data file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A word list loaded without a single usable entry.
    #[error("dictionary '{0}' contains no words")]
    EmptyDictionary(String),

    /// A replacement table line could not be parsed.
    #[error("malformed replacement rule at line {line}: {text:?}")]
    MalformedRule { line: usize, text: String },

    /// A conversion table line could not be parsed.
    #[error("malformed conversion entry at line {line}: {text:?}")]
    MalformedConversion { line: usize, text: String },

    /// The dictionary service stopped answering during a lookup.
    #[error("dictionary oracle unavailable: {0}")]
    OracleUnavailable(String),

    /// No profile is known for the requested variant.
    #[error("unknown language variant: {0}")]
    UnknownVariant(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A token that cannot be turned into a lookup form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// The text contains U+FFFD, i.e. it was decoded from a broken encoding.
    #[error("token contains a replacement character at position {0}")]
    ReplacementCharacter(usize),

    /// The text contains a control character.
    #[error("token contains control character U+{code:04X} at position {position}")]
    ControlCharacter { code: u32, position: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SpellerError>;
