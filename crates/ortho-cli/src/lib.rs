// ortho-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::Args;
use ortho_speller::english::BundledEnglish;
use ortho_speller::variant::{CrossReference, VariantProfile, parse_conversions};
use ortho_speller::{ReplacementTable, RuleConfig, SpellerError, SpellerRule, WordListDictionary};

/// Primary word list inside a profile directory.
const WORDS_FILE: &str = "words.txt";

/// Optional replacement table inside a profile directory.
const REPLACEMENTS_FILE: &str = "replacements.txt";

/// Suffix of cross-reference word lists (`British_English.variant.txt`).
const VARIANT_SUFFIX: &str = ".variant.txt";

/// Suffix of conversion tables next to a cross-reference list.
const CONVERSION_SUFFIX: &str = ".conv.txt";

/// Options shared by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Language variant (en-US, en-GB, en-CA, or any tag with --dict-dir)
    #[arg(short, long)]
    pub variant: Option<String>,

    /// Profile directory with words.txt instead of the bundled English data
    #[arg(short, long, env = "ORTHO_DICT_PATH", value_name = "DIR")]
    pub dict_dir: Option<PathBuf>,

    /// JSON rule configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Accept an extra word (repeatable)
    #[arg(short = 'u', long = "user-word", value_name = "WORD")]
    pub user_words: Vec<String>,

    /// Maximum number of suggestions per match
    #[arg(short = 'n', long)]
    pub max_suggestions: Option<usize>,
}

impl CommonArgs {
    /// The rule configuration: config file first, then flags on top.
    pub fn rule_config(&self) -> Result<RuleConfig, String> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RuleConfig::default(),
        };
        if let Some(variant) = &self.variant {
            config.variant = variant.clone();
        }
        config.user_words.extend(self.user_words.iter().cloned());
        if let Some(n) = self.max_suggestions {
            config.max_suggestions = n;
        }
        Ok(config)
    }
}

/// Install the `env_logger` backend, honouring `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}

/// Read a [`RuleConfig`] from a JSON file.
pub fn load_config(path: &Path) -> Result<RuleConfig, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config {}: {}", path.display(), e))
}

/// Build the rule described by the command line.
pub fn load_rule(args: &CommonArgs) -> Result<SpellerRule, String> {
    let config = args.rule_config()?;
    let rule = match &args.dict_dir {
        Some(dir) => {
            let (profile, replacements) =
                load_profile_dir(dir, &config.variant).map_err(|e| e.to_string())?;
            SpellerRule::new(profile, replacements, config)
        }
        None => BundledEnglish::load().and_then(|en| en.rule(config)),
    };
    rule.map_err(|e| format!("failed to create rule: {e}"))
}

/// Load a variant profile from a directory.
///
/// Layout:
/// - `words.txt`: the primary word list (required)
/// - `replacements.txt`: replacement table (optional)
/// - `<Name>.variant.txt`: cross-reference word list; underscores in the
///   name become spaces in messages
/// - `<Name>.conv.txt`: conversions from that variant to the primary one
pub fn load_profile_dir(
    dir: &Path,
    variant: &str,
) -> Result<(VariantProfile, ReplacementTable), SpellerError> {
    let words = dir.join(WORDS_FILE);
    let primary = WordListDictionary::from_paths(variant, &[&words])?;
    let mut profile = VariantProfile::new(variant, variant, Arc::new(primary));

    for (name, path) in cross_reference_files(dir)? {
        let oracle = WordListDictionary::from_paths(name.as_str(), &[&path])?;
        let mut cross_reference = CrossReference::new(name.replace('_', " "), Arc::new(oracle));
        let conv = dir.join(format!("{name}{CONVERSION_SUFFIX}"));
        if conv.is_file() {
            let text = read(&conv)?;
            cross_reference = cross_reference.with_conversions(parse_conversions(&text)?);
        }
        log::debug!("cross-reference '{}' from {}", name, path.display());
        profile = profile.with_cross_reference(cross_reference);
    }

    let replacements_path = dir.join(REPLACEMENTS_FILE);
    let replacements = if replacements_path.is_file() {
        ReplacementTable::from_path(&replacements_path)?
    } else {
        ReplacementTable::empty()
    };
    Ok((profile, replacements))
}

/// Cross-reference lists in `dir`, sorted by name so the order is stable.
fn cross_reference_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, SpellerError> {
    let io_err = |source: std::io::Error| SpellerError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(VARIANT_SUFFIX))
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        if let Some(name) = name {
            files.push((name, path));
        }
    }
    files.sort();
    Ok(files)
}

fn read(path: &Path) -> Result<String, SpellerError> {
    std::fs::read_to_string(path).map_err(|source| SpellerError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Print an error message and exit with status 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
