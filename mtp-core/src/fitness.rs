// File:    fitness.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Scores candidate key bytes by how plausible the text they decode to looks.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Fitness of candidate key bytes.
//!
//! A candidate for position `i` is scored against every cryptogram that is
//! longer than `i`. Each cryptogram contributes a base weight for the class
//! of the byte the candidate decodes to, plus context terms that look at the
//! one or two bytes before it as decoded by the key bytes already committed.
//!
//! The committed key prefix is passed as a slice and its length *is* the
//! position being scored.

use crate::classifier::{CharClass, classify, is_sentence_punctuation};
use crate::frequency::FrequencyTables;

/// Number of candidate values for one key byte.
pub const CANDIDATES: usize = 256;

/// A fitness score for every candidate key byte, indexed by byte value.
pub type FitnessVector = [f64; CANDIDATES];

const SPACE_WEIGHT: f64 = 1.2;
const LETTER_WEIGHT: f64 = 1.0;
const DIGIT_WEIGHT: f64 = 0.75;
const TYPOGRAPHIC_WEIGHT: f64 = 0.8;
const OTHER_WEIGHT: f64 = 0.4;
const INVALID_WEIGHT: f64 = -1.0;

const LETTER_FREQUENCY_FACTOR: f64 = 0.01;
const BIGRAM_FREQUENCY_FACTOR: f64 = 0.12;

const SENTENCE_START_BONUS: f64 = 0.05;
const CAPITAL_AFTER_LOWERCASE_PENALTY: f64 = 0.15;
const SPACE_BEFORE_PUNCTUATION_PENALTY: f64 = 0.1;
const TERMINAL_PUNCTUATION_BONUS: f64 = 0.15;

/// Plaintext byte at `index` under the committed key, if both reach it.
fn decoded_at(cryptogram: &[u8], committed: &[u8], index: usize) -> Option<u8> {
    Some(cryptogram.get(index)? ^ committed.get(index)?)
}

/// Score one cryptogram contributes for `candidate` at position
/// `committed.len()`.
///
/// Returns `None` when the cryptogram is too short to reach the position.
#[must_use]
pub fn contribution(
    cryptogram: &[u8],
    committed: &[u8],
    candidate: u8,
    tables: &FrequencyTables,
) -> Option<f64> {
    let position = committed.len();
    let decoded = cryptogram.get(position)? ^ candidate;
    let previous = position
        .checked_sub(1)
        .and_then(|index| decoded_at(cryptogram, committed, index));
    let before_previous = position
        .checked_sub(2)
        .and_then(|index| decoded_at(cryptogram, committed, index));

    let score = match classify(decoded) {
        CharClass::Space => SPACE_WEIGHT,
        CharClass::Lower(letter) => {
            let mut score = LETTER_WEIGHT + LETTER_FREQUENCY_FACTOR * tables.letter(letter);
            if let Some(prev_letter) = previous.and_then(|byte| classify(byte).letter()) {
                score += BIGRAM_FREQUENCY_FACTOR * tables.bigram(prev_letter, letter);
            }
            score
        }
        CharClass::Upper(letter) => {
            let mut score = LETTER_WEIGHT + LETTER_FREQUENCY_FACTOR * tables.letter(letter);
            match previous {
                None => score += SENTENCE_START_BONUS,
                Some(prev) if matches!(classify(prev), CharClass::Lower(_)) => {
                    score -= CAPITAL_AFTER_LOWERCASE_PENALTY;
                }
                Some(b' ') if before_previous.is_some_and(is_sentence_punctuation) => {
                    score += SENTENCE_START_BONUS;
                }
                Some(_) => {}
            }
            score
        }
        CharClass::Digit => DIGIT_WEIGHT,
        CharClass::Typo => {
            let mut score = TYPOGRAPHIC_WEIGHT;
            if is_sentence_punctuation(decoded) {
                if previous == Some(b' ') {
                    score -= SPACE_BEFORE_PUNCTUATION_PENALTY;
                } else if position + 1 == cryptogram.len() {
                    score += TERMINAL_PUNCTUATION_BONUS;
                }
            }
            score
        }
        CharClass::Other => OTHER_WEIGHT,
        CharClass::Invalid => INVALID_WEIGHT,
    };
    Some(score)
}

/// Total fitness of `candidate` at position `committed.len()`, summed over
/// every cryptogram long enough to reach it.
#[must_use]
pub fn fitness(
    cryptograms: &[Vec<u8>],
    committed: &[u8],
    candidate: u8,
    tables: &FrequencyTables,
) -> f64 {
    cryptograms
        .iter()
        .filter_map(|cryptogram| contribution(cryptogram, committed, candidate, tables))
        .sum()
}

/// Fitness of all 256 candidates at position `committed.len()`.
#[must_use]
pub fn fitness_vector(
    cryptograms: &[Vec<u8>],
    committed: &[u8],
    tables: &FrequencyTables,
) -> FitnessVector {
    let mut scores = [0.0; CANDIDATES];
    for (slot, candidate) in scores.iter_mut().zip(0..=u8::MAX) {
        *slot = fitness(cryptograms, committed, candidate, tables);
    }
    scores
}
