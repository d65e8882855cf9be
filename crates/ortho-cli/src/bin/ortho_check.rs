// ortho-check: Report spelling mistakes in sentences from stdin.
//
// Reads one sentence per line and prints each match as
//   LINE:START-END: message
//     -> suggestion, suggestion, ...
// With --json, prints one JSON array of matches per input line instead.
//
// Usage:
//   ortho-check [-v VARIANT] [-d DIR] [-c CONFIG] [-u WORD]... [--json]

use std::io::{self, BufRead, Write};

use clap::Parser;
use ortho_cli::CommonArgs;

#[derive(Parser, Debug)]
#[command(name = "ortho-check")]
#[command(about = "Report spelling mistakes in sentences read from stdin")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Print matches as JSON, one array per input line
    #[arg(long)]
    json: bool,
}

fn main() {
    ortho_cli::init_logging();
    let cli = Cli::parse();
    let rule = ortho_cli::load_rule(&cli.common).unwrap_or_else(|e| ortho_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (idx, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let matches = rule
            .match_text(&line)
            .unwrap_or_else(|e| ortho_cli::fatal(&e.to_string()));

        if cli.json {
            let json = serde_json::to_string(&matches)
                .unwrap_or_else(|e| ortho_cli::fatal(&e.to_string()));
            let _ = writeln!(out, "{json}");
            continue;
        }
        for m in &matches {
            let _ = writeln!(out, "{}:{}-{}: {}", idx + 1, m.start, m.end, m.message);
            if !m.suggestions.is_empty() {
                let _ = writeln!(out, "  -> {}", m.suggestions.join(", "));
            }
        }
    }
}
