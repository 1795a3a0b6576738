// File:    crypto.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: XOR primitives and the projection of a recovered key onto cryptograms.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the XOR operations shared by encryption and decryption.

/// XORs `data` with the leading bytes of `keystream`.
///
/// The output is as long as the shorter of the two inputs, so a key built
/// for the longest cryptogram decrypts every shorter one.
#[must_use]
pub fn xor_prefix(data: &[u8], keystream: &[u8]) -> Vec<u8> {
    data.iter().zip(keystream).map(|(d, k)| d ^ k).collect()
}

/// Decrypts a cryptogram with `key` into a message string.
///
/// Each plaintext byte becomes the `char` with the same code point, so
/// non-printable and high bytes survive the conversion one-to-one.
#[must_use]
pub fn project(cryptogram: &[u8], key: &[u8]) -> String {
    xor_prefix(cryptogram, key)
        .into_iter()
        .map(char::from)
        .collect()
}
