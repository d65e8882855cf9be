//! End-to-end tests over the bundled English dictionaries.
//!
//! `golden/english_matches.json` lists sentences with the expected match
//! spans and top suggestions; the remaining tests pin down properties that
//! are easier to state in code.
//!
//! Run: cargo test -p ortho-speller --test english_speller

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use ortho_core::enums::Provenance;
use ortho_core::rule_match::Match;
use ortho_speller::english::BundledEnglish;
use ortho_speller::{RuleConfig, SpellerRule};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn english() -> BundledEnglish {
    BundledEnglish::load().expect("bundled English data")
}

fn rule(variant: &str) -> SpellerRule {
    english().rule(RuleConfig::for_variant(variant)).expect("rule")
}

fn spans(matches: &[Match]) -> Vec<(usize, usize)> {
    matches.iter().map(|m| (m.start, m.end)).collect()
}

#[derive(Debug, Deserialize)]
struct GoldenCase {
    variant: String,
    text: String,
    #[serde(default)]
    user_words: Vec<String>,
    matches: Vec<GoldenMatch>,
}

#[derive(Debug, Deserialize)]
struct GoldenMatch {
    start: usize,
    end: usize,
    top: Option<String>,
}

fn load_golden() -> Vec<GoldenCase> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/english_matches.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

// ---------------------------------------------------------------------------
// Golden sentences
// ---------------------------------------------------------------------------

#[test]
fn golden_sentences() {
    let en = english();
    let mut failures = Vec::new();

    for case in load_golden() {
        let config = RuleConfig::for_variant(&case.variant).with_user_words(&case.user_words);
        let rule = en.rule(config).expect("rule");
        let actual = rule.match_text(&case.text).expect("match");

        let expected: Vec<(usize, usize, Option<&str>)> = case
            .matches
            .iter()
            .map(|m| (m.start, m.end, m.top.as_deref()))
            .collect();
        let got: Vec<(usize, usize, Option<&str>)> = actual
            .iter()
            .map(|m| (m.start, m.end, m.top_suggestion()))
            .collect();
        if expected != got {
            failures.push(format!(
                "[{}] {:?}\n  expected {:?}\n  got      {:?}",
                case.variant, case.text, expected, got
            ));
        }
    }

    assert!(failures.is_empty(), "{} golden mismatches:\n{}", failures.len(), failures.join("\n"));
}

// ---------------------------------------------------------------------------
// Split / merge
// ---------------------------------------------------------------------------

#[test]
fn merge_suggests_exactly_one_reconciliation() {
    let m = rule("en-US").match_text("But thnk you fo rthe feedback").unwrap();
    assert_eq!(spans(&m), vec![(4, 8), (13, 20)]);
    assert!(m[0].suggestions.iter().any(|s| s == "think"));
    assert_eq!(m[1].suggestions, vec!["for the"]);
    assert_eq!(m[1].provenance, Provenance::MergeRepair);
}

#[test]
fn consumed_tokens_are_not_reported_again() {
    let m = rule("en-US").match_text("But than kyou for the feedback").unwrap();
    assert_eq!(m.len(), 1);
    assert!(!m.iter().any(|x| x.start == 9));
}

#[test]
fn merge_keeps_sentence_case() {
    let m = rule("en-US").match_text("Than kyou").unwrap();
    assert_eq!(m[0].top_suggestion(), Some("Thank you"));
}

#[test]
fn single_token_split() {
    let m = rule("en-US").match_text("We get thefeedback today").unwrap();
    assert_eq!(spans(&m), vec![(7, 18)]);
    assert_eq!(m[0].top_suggestion(), Some("the feedback"));
    assert_eq!(m[0].provenance, Provenance::SplitRepair);
}

// ---------------------------------------------------------------------------
// Replacement table
// ---------------------------------------------------------------------------

#[test]
fn replacement_hits_come_before_neighbors() {
    let m = rule("en-US").match_text("He teached us.").unwrap();
    assert_eq!(m[0].provenance, Provenance::ReplacementRule);
    assert_eq!(m[0].suggestions[0], "taught");
    assert!(m[0].suggestions.len() > 1);
}

#[test]
fn replacement_with_several_corrections() {
    let r = rule("en-US");
    assert_eq!(&r.suggest("farer").unwrap()[..2], ["further", "farther"]);
    assert_eq!(&r.suggest("farest").unwrap()[..2], ["furthest", "farthest"]);
}

#[test]
fn irregular_forms() {
    let r = rule("en-US");
    for (wrong, right) in [
        ("buyed", "bought"),
        ("thinked", "thought"),
        ("becomed", "became"),
        ("keeped", "kept"),
        ("womans", "women"),
        ("badest", "worst"),
        ("goodest", "best"),
        ("parenthesises", "parentheses"),
    ] {
        assert_eq!(
            r.suggest(wrong).unwrap().first().map(String::as_str),
            Some(right),
            "{wrong}"
        );
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

#[test]
fn british_spelling_under_american_profile() {
    let m = rule("en-US").match_text("This is a nice colour.").unwrap();
    assert_eq!(m.len(), 1);
    assert!(m[0].message.contains("is British English"), "{}", m[0].message);
    assert_eq!(m[0].top_suggestion(), Some("color"));
}

#[test]
fn american_spelling_under_british_profile() {
    let m = rule("en-GB").match_text("This is a nice color.").unwrap();
    assert!(m[0].message.contains("is American English"));
    assert_eq!(m[0].top_suggestion(), Some("colour"));
}

#[test]
fn canadian_names_the_other_variant() {
    let m = rule("en-CA").match_text("USTestWordToBeIgnored").unwrap();
    assert_eq!(m.len(), 1);
    assert!(m[0].message.contains("American English"));
}

#[test]
fn capitalized_variant_word_keeps_case() {
    let m = rule("en-US").match_text("Colour is nice").unwrap();
    assert_eq!(m[0].top_suggestion(), Some("Color"));
}

// ---------------------------------------------------------------------------
// User dictionary
// ---------------------------------------------------------------------------

#[test]
fn user_words_only_affect_themselves() {
    let en = english();
    let text = "mytestword mytesttwo mytestthree is nice";
    let plain = en.rule(RuleConfig::default()).unwrap().match_text(text).unwrap();
    assert_eq!(plain.len(), 3);

    let config = RuleConfig::default().with_user_words(["mytestword", "mytesttwo"]);
    let with_user = en.rule(config).unwrap().match_text(text).unwrap();
    assert_eq!(spans(&with_user), vec![(21, 32)]);
    assert_eq!(with_user[0], plain[2]);
}

#[test]
fn replacing_the_user_dictionary_takes_effect() {
    let mut r = rule("en-US");
    assert_eq!(r.match_text("mytestword").unwrap().len(), 1);
    r.set_user_dictionary(["mytestword"]);
    assert!(r.match_text("mytestword").unwrap().is_empty());
    r.set_user_dictionary(Vec::<String>::new());
    assert_eq!(r.match_text("mytestword").unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Ignorables and offsets
// ---------------------------------------------------------------------------

#[test]
fn soft_hyphen_keeps_following_offsets() {
    let r = rule("en-US");
    let plain = r.match_text("software is nicx").unwrap();
    let hyphenated = r.match_text("soft\u{00AD}ware is nicx").unwrap();
    assert_eq!(spans(&plain), vec![(12, 16)]);
    assert_eq!(spans(&hyphenated), vec![(13, 17)]);
}

#[test]
fn misspelled_word_with_soft_hyphen_keeps_its_span() {
    let m = rule("en-US").match_text("nic\u{00AD}x day").unwrap();
    assert_eq!(spans(&m), vec![(0, 5)]);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn disabled_rule_id() {
    let mut config = RuleConfig::for_variant("en-GB");
    config.disabled_rules = vec!["MORFOLOGIK_RULE_EN_GB".to_string()];
    let r = english().rule(config).unwrap();
    assert!(r.match_text("kyou").unwrap().is_empty());
}

#[test]
fn max_suggestions_is_respected() {
    let mut config = RuleConfig::default();
    config.max_suggestions = 2;
    let r = english().rule(config).unwrap();
    let m = r.match_text("aõh").unwrap();
    assert_eq!(m[0].suggestions.len(), 2);
}

// ---------------------------------------------------------------------------
// Cache behaviour
// ---------------------------------------------------------------------------

#[test]
fn matching_is_idempotent() {
    let r = rule("en-US");
    let text = "LanguageTol offer sspell checking, but thnk you fo rthe feedback";
    let first = r.match_text(text).unwrap();
    let second = r.match_text(text).unwrap();
    assert_eq!(first, second);
    assert!(r.cache_stats().hits > 0);
}

#[test]
fn rule_instances_do_not_share_caches() {
    let en = english();
    let us = en.rule(RuleConfig::for_variant("en-US")).unwrap();
    let gb = en.rule(RuleConfig::for_variant("en-GB")).unwrap();
    assert_eq!(us.match_text("colour").unwrap().len(), 1);
    assert!(gb.match_text("colour").unwrap().is_empty());
    assert_eq!(us.match_text("colour").unwrap().len(), 1);
}

#[test]
fn concurrent_matching_agrees_with_sequential() {
    let r = Arc::new(rule("en-US"));
    let sentences = [
        "But than kyou for the feedback",
        "He teached us.",
        "This is a nice colour.",
        "web-baxsed software",
    ];
    let expected: Vec<Vec<Match>> = sentences
        .iter()
        .map(|s| rule("en-US").match_text(s).unwrap())
        .collect();

    thread::scope(|scope| {
        for _ in 0..4 {
            let r = Arc::clone(&r);
            let expected = &expected;
            scope.spawn(move || {
                for (s, e) in sentences.iter().zip(expected) {
                    assert_eq!(&r.match_text(s).unwrap(), e);
                }
            });
        }
    });
}

#[test]
fn rule_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SpellerRule>();
}
