// ortho-suggest: Check words and print spelling suggestions.
//
// If WORD arguments are given, checks each of them; otherwise reads words
// from stdin (one per line). Output:
//   C: word        (correct)
//   W: word        (misspelled)
//   S: suggestion  (one line per suggestion, after a W: line)
//
// Usage:
//   ortho-suggest [-v VARIANT] [-d DIR] [-n N] [WORD...]

use std::io::{self, BufRead, Write};

use clap::Parser;
use ortho_cli::CommonArgs;
use ortho_speller::SpellerRule;

#[derive(Parser, Debug)]
#[command(name = "ortho-suggest")]
#[command(about = "Check words and print spelling suggestions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Only print C:/W: lines
    #[arg(short = 'q', long)]
    no_suggestions: bool,

    /// Words to check (stdin when empty)
    #[arg(value_name = "WORD")]
    words: Vec<String>,
}

fn report(out: &mut impl Write, rule: &SpellerRule, word: &str, suggest: bool) {
    let verdict = rule
        .check_word(word)
        .unwrap_or_else(|e| ortho_cli::fatal(&e.to_string()));
    if verdict.is_accepted() {
        let _ = writeln!(out, "C: {word}");
        return;
    }
    let _ = writeln!(out, "W: {word}");
    if suggest {
        let suggestions = rule
            .suggest(word)
            .unwrap_or_else(|e| ortho_cli::fatal(&e.to_string()));
        for s in suggestions {
            let _ = writeln!(out, "S: {s}");
        }
    }
}

fn main() {
    ortho_cli::init_logging();
    let cli = Cli::parse();
    let rule = ortho_cli::load_rule(&cli.common).unwrap_or_else(|e| ortho_cli::fatal(&e));
    let suggest = !cli.no_suggestions;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !cli.words.is_empty() {
        for word in &cli.words {
            report(&mut out, &rule, word, suggest);
        }
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        report(&mut out, &rule, word, suggest);
    }
}
