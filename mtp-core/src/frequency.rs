// File:    frequency.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Constant English letter and bigram frequency tables used by the fitness scorer.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Letter and bigram frequency tables.
//!
//! Both tables are indexed by case-folded alphabet position (`a` = 0 through
//! `z` = 25) and hold percentages. The bigram table is the output shape of
//! an offline corpus counter: row = first letter, column = second letter.

/// Number of letters in the alphabet the tables cover.
pub const LETTERS: usize = 26;

/// Read-only letter and bigram statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTables {
    letters: [f64; LETTERS],
    bigrams: [[f64; LETTERS]; LETTERS],
}

impl FrequencyTables {
    /// Builds tables from a letter frequency vector and a bigram matrix.
    #[must_use]
    pub const fn new(letters: [f64; LETTERS], bigrams: [[f64; LETTERS]; LETTERS]) -> Self {
        Self { letters, bigrams }
    }

    /// Frequency of a single letter, in percent.
    ///
    /// # Panics
    ///
    /// Panics if `letter` is not below [`LETTERS`].
    #[must_use]
    pub fn letter(&self, letter: u8) -> f64 {
        self.letters[usize::from(letter)]
    }

    /// Frequency of `second` directly following `first`, in percent.
    ///
    /// # Panics
    ///
    /// Panics if either index is not below [`LETTERS`].
    #[must_use]
    pub fn bigram(&self, first: u8, second: u8) -> f64 {
        self.bigrams[usize::from(first)][usize::from(second)]
    }
}

impl Default for FrequencyTables {
    fn default() -> Self {
        ENGLISH.clone()
    }
}

/// English reference statistics.
pub static ENGLISH: FrequencyTables = FrequencyTables::new(LETTER_FREQUENCIES, BIGRAM_FREQUENCIES);

#[rustfmt::skip]
const LETTER_FREQUENCIES: [f64; LETTERS] = [
    // a     b     c     d     e     f     g     h     i     j     k     l     m
    9.90, 1.47, 4.36, 3.35, 8.77, 0.30, 1.42, 1.08, 8.21, 2.28, 3.51, 3.92, 2.80,
    // n     o     p     q     r     s     t     u     v     w     x     y     z
    5.72, 8.60, 3.13, 0.14, 4.69, 4.98, 3.98, 2.50, 0.04, 4.65, 0.02, 3.76, 6.53,
];

#[rustfmt::skip]
const BIGRAM_FREQUENCIES: [[f64; LETTERS]; LETTERS] = [
    // a
    [
        0.00, 0.12, 1.09, 0.57, 0.00, 0.03, 0.15, 0.02, 0.03, 0.42, 0.71, 0.59, 0.49,
        1.10, 0.01, 0.14, 0.00, 0.59, 0.57, 0.46, 0.15, 0.00, 0.64, 0.00, 0.00, 0.48,
    ],
    // b
    [
        0.20, 0.00, 0.01, 0.00, 0.17, 0.00, 0.00, 0.01, 0.27, 0.01, 0.01, 0.08, 0.00,
        0.04, 0.21, 0.00, 0.00, 0.16, 0.02, 0.00, 0.07, 0.00, 0.00, 0.00, 0.45, 0.00,
    ],
    // c
    [
        0.21, 0.00, 0.00, 0.00, 0.31, 0.00, 0.00, 1.24, 0.91, 0.25, 0.06, 0.00, 0.00,
        0.03, 0.24, 0.00, 0.00, 0.00, 0.00, 0.03, 0.04, 0.00, 0.00, 0.00, 0.25, 1.46,
    ],
    // d
    [
        0.41, 0.02, 0.04, 0.02, 0.24, 0.00, 0.00, 0.00, 0.06, 0.01, 0.06, 0.13, 0.04,
        0.31, 0.70, 0.04, 0.00, 0.17, 0.04, 0.01, 0.15, 0.00, 0.06, 0.00, 0.27, 0.84,
    ],
    // e
    [
        0.04, 0.16, 0.67, 0.62, 0.01, 0.02, 0.69, 0.00, 0.02, 0.71, 0.41, 0.37, 0.66,
        0.75, 0.04, 0.15, 0.00, 0.58, 0.73, 0.26, 0.03, 0.00, 0.18, 0.00, 0.00, 0.42,
    ],
    // f
    [
        0.06, 0.00, 0.00, 0.00, 0.04, 0.00, 0.00, 0.00, 0.09, 0.00, 0.00, 0.01, 0.00,
        0.00, 0.06, 0.00, 0.00, 0.03, 0.00, 0.00, 0.02, 0.00, 0.00, 0.00, 0.00, 0.00,
    ],
    // g
    [
        0.20, 0.00, 0.00, 0.09, 0.06, 0.00, 0.00, 0.00, 0.14, 0.00, 0.00, 0.07, 0.01,
        0.05, 0.76, 0.00, 0.00, 0.13, 0.00, 0.00, 0.05, 0.00, 0.01, 0.00, 0.00, 0.01,
    ],
    // h
    [
        0.12, 0.00, 0.05, 0.01, 0.05, 0.00, 0.00, 0.00, 0.05, 0.00, 0.00, 0.00, 0.01,
        0.03, 0.15, 0.00, 0.00, 0.05, 0.00, 0.01, 0.03, 0.00, 0.04, 0.00, 0.02, 0.00,
    ],
    // i
    [
        1.23, 0.02, 0.59, 0.11, 4.22, 0.01, 0.04, 0.00, 0.07, 0.04, 0.14, 0.18, 0.20,
        0.38, 0.23, 0.02, 0.00, 0.03, 0.33, 0.11, 0.11, 0.01, 0.19, 0.00, 0.00, 0.17,
    ],
    // j
    [
        0.80, 0.01, 0.02, 0.02, 0.91, 0.00, 0.00, 0.00, 0.14, 0.00, 0.01, 0.01, 0.04,
        0.07, 0.05, 0.01, 0.00, 0.02, 0.11, 0.00, 0.09, 0.00, 0.02, 0.00, 0.00, 0.00,
    ],
    // k
    [
        0.60, 0.01, 0.05, 0.00, 0.04, 0.00, 0.00, 0.00, 0.73, 0.00, 0.01, 0.04, 0.00,
        0.03, 0.86, 0.00, 0.00, 0.20, 0.13, 0.37, 0.24, 0.00, 0.04, 0.00, 0.00, 0.03,
    ],
    // l
    [
        0.34, 0.04, 0.02, 0.01, 0.59, 0.00, 0.00, 0.00, 0.64, 0.00, 0.17, 0.02, 0.01,
        0.25, 0.17, 0.00, 0.00, 0.00, 0.04, 0.02, 0.17, 0.00, 0.02, 0.00, 0.00, 0.00,
    ],
    // m
    [
        0.38, 0.02, 0.01, 0.00, 0.16, 0.00, 0.00, 0.00, 0.75, 0.00, 0.01, 0.00, 0.01,
        0.12, 0.51, 0.04, 0.00, 0.01, 0.02, 0.01, 0.23, 0.00, 0.00, 0.00, 0.23, 0.01,
    ],
    // n
    [
        1.55, 0.00, 0.14, 0.06, 0.72, 0.01, 0.04, 0.00, 2.67, 0.00, 0.12, 0.00, 0.00,
        0.13, 0.60, 0.01, 0.00, 0.00, 0.16, 0.18, 0.05, 0.00, 0.01, 0.00, 0.61, 0.01,
    ],
    // o
    [
        0.01, 0.49, 0.34, 0.78, 0.01, 0.04, 0.24, 0.01, 0.04, 0.21, 0.24, 0.35, 0.29,
        0.68, 0.01, 0.22, 0.00, 0.85, 1.00, 0.29, 0.01, 0.00, 1.50, 0.00, 0.00, 0.54,
    ],
    // p
    [
        0.26, 0.00, 0.02, 0.00, 0.16, 0.00, 0.00, 0.00, 0.30, 0.00, 0.01, 0.05, 0.00,
        0.04, 1.29, 0.00, 0.00, 1.17, 0.03, 0.02, 0.11, 0.00, 0.00, 0.00, 0.04, 0.00,
    ],
    // q
    [
        0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00,
        0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00,
    ],
    // r
    [
        1.11, 0.01, 0.10, 0.10, 0.45, 0.00, 0.04, 0.00, 0.09, 0.00, 0.03, 0.01, 0.06,
        0.06, 1.01, 0.03, 0.00, 0.01, 0.14, 0.11, 0.21, 0.00, 0.09, 0.00, 0.33, 1.30,
    ],
    // s
    [
        0.27, 0.00, 0.61, 0.00, 0.11, 0.01, 0.00, 0.00, 0.82, 0.02, 0.38, 0.12, 0.09,
        0.17, 0.25, 0.28, 0.00, 0.04, 0.02, 1.43, 0.10, 0.00, 0.20, 0.00, 0.13, 0.89,
    ],
    // t
    [
        0.96, 0.00, 0.01, 0.00, 0.76, 0.00, 0.00, 0.01, 0.04, 0.00, 0.15, 0.01, 0.01,
        0.14, 0.96, 0.01, 0.00, 0.40, 0.01, 0.01, 0.29, 0.00, 0.27, 0.00, 0.60, 0.01,
    ],
    // u
    [
        0.03, 0.10, 0.20, 0.17, 0.01, 0.01, 0.07, 0.00, 0.01, 0.16, 0.14, 0.06, 0.14,
        0.13, 0.00, 0.08, 0.00, 0.15, 0.24, 0.22, 0.00, 0.00, 0.05, 0.00, 0.00, 0.18,
    ],
    // v
    [
        0.00, 0.00, 0.00, 0.00, 0.01, 0.00, 0.00, 0.00, 0.01, 0.00, 0.00, 0.00, 0.00,
        0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00,
    ],
    // w
    [
        1.01, 0.00, 0.09, 0.05, 0.34, 0.00, 0.00, 0.00, 1.19, 0.00, 0.02, 0.01, 0.00,
        0.25, 0.56, 0.03, 0.00, 0.07, 0.30, 0.03, 0.02, 0.00, 0.01, 0.00, 0.64, 0.07,
    ],
    // x
    [
        0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.01, 0.00, 0.00, 0.00, 0.00,
        0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.01, 0.00, 0.00, 0.00, 0.00,
    ],
    // y
    [
        0.00, 0.06, 0.80, 0.08, 0.00, 0.01, 0.04, 0.00, 0.00, 0.10, 0.16, 0.14, 0.51,
        0.22, 0.01, 0.09, 0.00, 0.04, 0.41, 0.20, 0.00, 0.00, 0.26, 0.00, 0.00, 0.11,
    ],
    // z
    [
        1.26, 0.06, 0.17, 0.12, 1.86, 0.00, 0.06, 0.00, 0.62, 0.04, 0.12, 0.06, 0.12,
        0.64, 0.31, 0.05, 0.00, 0.06, 0.05, 0.06, 0.18, 0.00, 0.17, 0.00, 1.31, 0.00,
    ],
];
