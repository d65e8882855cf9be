// Criterion benchmarks for ortho-speller.
//
// Uses the bundled English dictionaries, so no external data is needed.
//
// Run:
//   cargo bench -p ortho-speller

use criterion::{Criterion, criterion_group, criterion_main};
use ortho_speller::RuleConfig;
use ortho_speller::english::BundledEnglish;
use ortho_speller::tokenizer::tokenize;
use std::hint::black_box;

const SENTENCES: &[&str] = &[
    "But than kyou for the feedback",
    "LanguageTol offer sspell checking",
    "But thnk you fo rthe feedback",
    "This is a nice colour.",
    "He teached us.",
    "web-feature-drivenx-car",
    "We get thefeedback today",
    "The analysises of the criterions",
];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Load all three bundled dictionaries.
fn bench_load(c: &mut Criterion) {
    c.bench_function("load_bundled_english", |b| {
        b.iter(|| black_box(BundledEnglish::load().unwrap()))
    });
}

/// Match the sample sentences with a cache that is already warm.
fn bench_match_warm(c: &mut Criterion) {
    let en = BundledEnglish::load().unwrap();
    let rule = en.rule(RuleConfig::default()).unwrap();
    let sentences: Vec<_> = SENTENCES.iter().map(|s| tokenize(s)).collect();
    for s in &sentences {
        rule.match_sentence(s).unwrap();
    }

    c.bench_function("match_sentences_warm", |b| {
        b.iter(|| {
            for s in &sentences {
                black_box(rule.match_sentence(black_box(s)).unwrap());
            }
        })
    });
}

/// Match the sample sentences on a fresh rule each time.
fn bench_match_cold(c: &mut Criterion) {
    let en = BundledEnglish::load().unwrap();
    let sentences: Vec<_> = SENTENCES.iter().map(|s| tokenize(s)).collect();

    c.bench_function("match_sentences_cold", |b| {
        b.iter(|| {
            let rule = en.rule(RuleConfig::default()).unwrap();
            for s in &sentences {
                black_box(rule.match_sentence(black_box(s)).unwrap());
            }
        })
    });
}

/// Neighbor search for a long misspelling (widest edit budget).
fn bench_suggest_long_word(c: &mut Criterion) {
    let en = BundledEnglish::load().unwrap();
    let rule = en.rule(RuleConfig::default()).unwrap();

    c.bench_function("suggest_long_word_cold", |b| {
        b.iter(|| {
            let fresh = en.rule(rule.config().clone()).unwrap();
            black_box(fresh.suggest(black_box("CATestWordToBeIgnore")).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_load,
    bench_match_warm,
    bench_match_cold,
    bench_suggest_long_word
);
criterion_main!(benches);
