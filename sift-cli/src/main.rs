//! Interactive SMS Spam Checker
//!
//! Reads messages from stdin, one per line, and prints a spam/ham verdict
//! for each. The trained model artifacts are loaded once at startup.
//!
//! ## Usage
//!
//! ```bash
//! # Artifacts in the working directory (vectorizer.json, model.json)
//! ./target/release/sift
//!
//! # Artifacts elsewhere
//! ./target/release/sift /path/to/vectorizer.json /path/to/model.json
//!
//! # Non-interactive: pipe messages in, one per line
//! echo "WIN a FREE prize now!!!" | ./target/release/sift
//! ```
//!
//! Type `quit` or `exit` (or send EOF with Ctrl-D) to leave. Empty input
//! prompts for a message instead of classifying.
//!
//! Set `RUST_LOG=debug` to watch artifact loading and per-message scores.

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use sift_core::SpamFilter;
use sift_types::Label;

const DEFAULT_VECTORIZER: &str = "vectorizer.json";
const DEFAULT_MODEL: &str = "model.json";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (vectorizer_path, model_path) = match args.len() {
        1 => (DEFAULT_VECTORIZER, DEFAULT_MODEL),
        3 => (args[1].as_str(), args[2].as_str()),
        _ => {
            eprintln!("Usage: sift [vectorizer.json model.json]");
            std::process::exit(1);
        }
    };

    let mut filter = SpamFilter::from_artifacts(vectorizer_path, model_path)
        .with_context(|| format!("failed to load model from {vectorizer_path} and {model_path}"))?;

    println!("SMS spam checker. Type a message, or `quit` to leave.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message == "quit" || message == "exit" {
            break;
        }
        if message.is_empty() {
            println!("Please enter a message to check.");
            continue;
        }

        let prediction = filter.classify(message);
        match prediction.label {
            Label::Spam => println!("SPAM: this message looks suspicious."),
            Label::Ham => println!("Not spam: this message looks safe."),
        }
    }

    let metrics = filter.metrics();
    log::info!(
        "session over: {} classified, {} flagged as spam",
        metrics.messages_classified,
        metrics.spam_flagged
    );

    Ok(())
}
