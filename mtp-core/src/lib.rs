// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: The main library crate for mtp-core, wiring together classification, scoring, key search and the cryptogram corpus.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # MTP Core Library
//!
//! This library recovers the shared keystream of a many-time pad: several
//! messages encrypted by XOR with the same key. Only the ciphertexts are
//! needed; the key is rebuilt byte by byte from the statistical structure of
//! English text.
//!
//! ```
//! use mtp_core::corpus::Corpus;
//!
//! let mut corpus = Corpus::new();
//! corpus.add(vec![0x35, 0x0a, 0x03]);
//! corpus.recover();
//! assert_eq!(corpus.key().map(<[u8]>::len), Some(3));
//! ```

/// Maps decoded bytes onto the character classes used for scoring.
pub mod classifier;
/// The cryptogram collection and its cached recovery.
pub mod corpus;
/// XOR primitives and projection of a key onto cryptograms.
pub mod crypto;
/// Plausibility scoring of candidate key bytes.
pub mod fitness;
/// Letter and bigram frequency tables for English.
pub mod frequency;
/// Left-to-right greedy search for the shared keystream.
pub mod key_search;
/// Keystream generation and many-time-pad encryption.
pub mod keystream;
/// Serializable summaries of a finished recovery.
pub mod report;
