#![deny(missing_docs)]
//! A command-line interface for breaking many-time pad ciphertexts.

use clap::{Parser, Subcommand};
use log::{error, info};
use mtp_core::corpus::Corpus;
use mtp_core::{keystream, report};
use std::fs;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encrypt every line of a file with one reused keystream\nmtp-cli encrypt ./lines.txt --output ./cryptograms.hex --key-output ./key.hex\n\n# Recover the keystream and the messages\nmtp-cli recover ./cryptograms.hex\n\n# Recover from raw binary cryptograms and save a JSON report\nmtp-cli recover --binary ./a.bin ./b.bin ./c.bin --report ./report.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recover the shared keystream and decrypt the cryptograms
    Recover {
        /// Files holding cryptograms, hex encoded one per line
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Treat every input file as one raw binary cryptogram
        #[arg(long)]
        binary: bool,

        /// Path to write a JSON report of the recovery
        #[arg(short, long, value_name = "REPORT_FILE")]
        report: Option<PathBuf>,
    },
    /// Encrypt every line of a file with the same random keystream
    Encrypt {
        /// Path to the plaintext file, one message per line
        #[arg()]
        input: PathBuf,

        /// Path to write the hex encoded cryptograms
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: PathBuf,

        /// Path to write the hex encoded keystream
        #[arg(short, long, value_name = "KEY_FILE")]
        key_output: Option<PathBuf>,
    },
}

/// Reads hex cryptograms, one per non-blank line.
fn read_hex_cryptograms(path: &Path) -> std::io::Result<Vec<Vec<u8>>> {
    let contents = fs::read_to_string(path)?;
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            hex::decode(line.trim()).map_err(|e| {
                Error::new(
                    ErrorKind::InvalidData,
                    format!("{}:{}: {e}", path.display(), number + 1),
                )
            })
        })
        .collect()
}

fn read_cryptograms(inputs: &[PathBuf], binary: bool) -> std::io::Result<Vec<Vec<u8>>> {
    let mut cryptograms = Vec::new();
    for path in inputs {
        if binary {
            cryptograms.push(fs::read(path)?);
        } else {
            cryptograms.extend(read_hex_cryptograms(path)?);
        }
    }
    Ok(cryptograms)
}

fn run_recover(inputs: &[PathBuf], binary: bool, report_path: Option<&Path>) {
    let cryptograms = read_cryptograms(inputs, binary).unwrap_or_else(|e| {
        error!("Failed to read cryptograms: {e}");
        std::process::exit(1);
    });
    info!("Loaded {} cryptogram(s).", cryptograms.len());

    let mut corpus: Corpus = cryptograms.into_iter().collect();
    corpus.recover();
    let Some(recovery) = corpus.recovery() else {
        error!("No cryptograms to recover from.");
        std::process::exit(1);
    };

    println!("Key: {}", hex::encode(recovery.key()));
    for (index, message) in recovery.messages().iter().enumerate() {
        println!("[{index}] {}", message.escape_debug());
    }

    if let Some(path) = report_path {
        let Some(recovery_report) = report::RecoveryReport::from_corpus(&corpus) else {
            error!("Recovery is not available for the report.");
            std::process::exit(1);
        };
        if let Err(e) = report::save_report(path, &recovery_report) {
            error!("Failed to write report: {e}");
            std::process::exit(1);
        }
        info!("Report written to '{}'.", path.display());
    }
}

fn run_encrypt(input: &Path, output: &Path, key_output: Option<&Path>) {
    let contents = fs::read_to_string(input).unwrap_or_else(|e| {
        error!("Failed to read input file: {e}");
        std::process::exit(1);
    });
    let plaintexts: Vec<&str> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    let longest = plaintexts.iter().map(|line| line.len()).max().unwrap_or(0);
    info!(
        "Encrypting {} message(s) with one {longest}-byte keystream.",
        plaintexts.len()
    );

    let shared_key = keystream::generate_keystream(longest).unwrap_or_else(|e| {
        error!("Failed to generate keystream: {e}");
        std::process::exit(1);
    });
    let cryptograms = keystream::encrypt_all(&plaintexts, &shared_key).unwrap_or_else(|e| {
        error!("Failed to encrypt: {e}");
        std::process::exit(1);
    });

    let encoded: String = cryptograms
        .iter()
        .map(|cryptogram| hex::encode(cryptogram) + "\n")
        .collect();
    if let Err(e) = fs::write(output, encoded) {
        error!("Failed to write cryptograms: {e}");
        std::process::exit(1);
    }
    if let Some(path) = key_output {
        if let Err(e) = fs::write(path, hex::encode(&shared_key) + "\n") {
            error!("Failed to write keystream: {e}");
            std::process::exit(1);
        }
    }
    info!("Cryptograms written to '{}'.", output.display());
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Recover {
            inputs,
            binary,
            report: report_path,
        } => run_recover(inputs, *binary, report_path.as_deref()),
        Commands::Encrypt {
            input,
            output,
            key_output,
        } => run_encrypt(input, output, key_output.as_deref()),
    }
}
