// File:    key_search.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Greedy left-to-right recovery of a keystream shared by several cryptograms.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Key search.
//!
//! Positions are processed strictly in increasing order. Scoring position
//! `i` reads the key bytes already committed for `i - 1` and `i - 2`, so
//! the search is a fold over positions where each step sees the immutable
//! prefix produced by all earlier steps. Earlier bytes are never revisited.

use log::{debug, trace};

use crate::fitness::{FitnessVector, fitness_vector};
use crate::frequency::FrequencyTables;

/// Length of the longest cryptogram, or zero for none.
#[must_use]
pub fn max_len(cryptograms: &[Vec<u8>]) -> usize {
    cryptograms.iter().map(Vec::len).max().unwrap_or(0)
}

/// Picks the candidate with the highest fitness.
///
/// On exact ties the smallest byte value wins: a later candidate replaces
/// the current best only when it scores strictly higher.
#[must_use]
pub fn best_candidate(fitness: &FitnessVector) -> u8 {
    let mut best = 0;
    let mut best_fitness = f64::NEG_INFINITY;
    for (candidate, &score) in (0..=u8::MAX).zip(fitness.iter()) {
        if score > best_fitness {
            best = candidate;
            best_fitness = score;
        }
    }
    best
}

/// Commits the next key byte after `committed`.
#[must_use]
pub fn next_key_byte(
    cryptograms: &[Vec<u8>],
    committed: &[u8],
    tables: &FrequencyTables,
) -> u8 {
    let fitness = fitness_vector(cryptograms, committed, tables);
    let best = best_candidate(&fitness);
    trace!(
        "position {}: key byte {best:#04x} (fitness {:.3})",
        committed.len(),
        fitness[usize::from(best)]
    );
    best
}

/// Recovers a key as long as the longest cryptogram.
///
/// An empty slice yields an empty key.
#[must_use]
pub fn recover_key(cryptograms: &[Vec<u8>], tables: &FrequencyTables) -> Vec<u8> {
    let length = max_len(cryptograms);
    debug!(
        "Searching a {length}-byte key over {} cryptogram(s).",
        cryptograms.len()
    );
    (0..length).fold(Vec::with_capacity(length), |mut key, _| {
        let byte = next_key_byte(cryptograms, &key, tables);
        key.push(byte);
        key
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::CANDIDATES;
    use crate::frequency::ENGLISH;

    #[test]
    fn ties_go_to_the_smallest_candidate() {
        let mut fitness = [0.0; CANDIDATES];
        fitness[0x41] = 2.5;
        fitness[0x61] = 2.5;
        fitness[0xfe] = 2.5;
        assert_eq!(best_candidate(&fitness), 0x41);
    }

    #[test]
    fn flat_vector_picks_zero() {
        assert_eq!(best_candidate(&[-1.0; CANDIDATES]), 0);
    }

    #[test]
    fn strict_maximum_wins_regardless_of_position() {
        let mut fitness = [1.0; CANDIDATES];
        fitness[0xff] = 1.5;
        assert_eq!(best_candidate(&fitness), 0xff);
    }

    #[test]
    fn key_covers_the_longest_cryptogram() {
        let cryptograms = vec![vec![1, 2, 3], vec![4; 7], vec![]];
        assert_eq!(max_len(&cryptograms), 7);
        assert_eq!(recover_key(&cryptograms, &ENGLISH).len(), 7);
        assert!(recover_key(&[], &ENGLISH).is_empty());
    }

    #[test]
    fn single_byte_prefers_space() {
        // Nothing outscores a space for a lone byte.
        let key = recover_key(&[vec![0x5a]], &ENGLISH);
        assert_eq!(key, vec![0x5a ^ b' ']);
    }

    #[test]
    fn case_flipped_pair_resolves_to_the_smaller_key_byte() {
        // Key 0x41 decodes "A"/"a", key 0x61 decodes "a"/"A": equal fitness.
        let key = recover_key(&[vec![0x00], vec![0x20]], &ENGLISH);
        assert_eq!(key, vec![0x41]);
    }
}
