// File:    report.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Serializable summary of a recovery, persisted as JSON.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::corpus::Corpus;

/// One decrypted cryptogram.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageReport {
    /// Position of the cryptogram in the corpus.
    pub index: usize,
    /// Length of the cryptogram in bytes.
    pub length: usize,
    /// SHA-256 of the cryptogram, hex encoded.
    pub ciphertext_hash: String,
    /// The decrypted message.
    pub plaintext: String,
}

/// The outcome of a recovery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecoveryReport {
    /// The recovered keystream, hex encoded.
    pub key: String,
    /// Length of the keystream in bytes.
    pub key_length: usize,
    /// One entry per cryptogram, in corpus order.
    pub messages: Vec<MessageReport>,
}

impl RecoveryReport {
    /// Builds a report from the corpus' current recovery.
    ///
    /// Returns `None` if the corpus has not been recovered since its last
    /// mutation.
    #[must_use]
    pub fn from_corpus(corpus: &Corpus) -> Option<Self> {
        let recovery = corpus.recovery()?;
        let messages = corpus
            .cryptograms()
            .iter()
            .zip(recovery.messages())
            .enumerate()
            .map(|(index, (cryptogram, plaintext))| MessageReport {
                index,
                length: cryptogram.len(),
                ciphertext_hash: hex::encode(Sha256::digest(cryptogram)),
                plaintext: plaintext.clone(),
            })
            .collect();
        Some(Self {
            key: hex::encode(recovery.key()),
            key_length: recovery.key().len(),
            messages,
        })
    }
}

/// Saves a report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn save_report(path: &Path, report: &RecoveryReport) -> std::io::Result<()> {
    let report_str = serde_json::to_string_pretty(report)?;
    fs::write(path, report_str)
}

/// Loads a report written by [`save_report`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a report.
pub fn load_report(path: &Path) -> std::io::Result<RecoveryReport> {
    let report_str = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&report_str)?)
}
