use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use l10n_annotate::{format_annotation, run_annotate};

/// Annotate source text on stdin with English translations for
/// localization-message keys
#[derive(Parser, Debug)]
#[command(name = "l10n")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to search for the messages_en.json catalog
    #[arg(value_name = "ROOT", default_value = ".")]
    root: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Error: failed to read stdin: {}", e);
        process::exit(1);
    }

    match run_annotate(&cli.root, &input) {
        Ok(annotations) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for annotation in &annotations {
                if writeln!(out, "{}", format_annotation(annotation)).is_err() {
                    // Broken pipe from the consuming editor; nothing left to do
                    process::exit(0);
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
