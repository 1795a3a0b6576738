// File:    keystream.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Generates random keystreams and reproduces the many-time pad misuse on a batch of plaintexts.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use rand::{TryRngCore, rngs::OsRng};
use std::io::{Error, ErrorKind};

use crate::crypto::xor_prefix;

/// Generates a keystream of `size` bytes from the operating system RNG.
///
/// # Errors
///
/// This function will return an error if the operating system RNG fails.
pub fn generate_keystream(size: usize) -> std::io::Result<Vec<u8>> {
    let mut rng = OsRng;
    let mut buffer = vec![0u8; size];
    rng.try_fill_bytes(&mut buffer).map_err(Error::other)?;
    Ok(buffer)
}

/// Encrypts every plaintext with the same keystream.
///
/// This is exactly the reuse the key search exploits.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidInput`] if the keystream is shorter than the
/// longest plaintext.
pub fn encrypt_all<P: AsRef<[u8]>>(
    plaintexts: &[P],
    keystream: &[u8],
) -> std::io::Result<Vec<Vec<u8>>> {
    let longest = plaintexts
        .iter()
        .map(|plaintext| plaintext.as_ref().len())
        .max()
        .unwrap_or(0);
    if keystream.len() < longest {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!(
                "keystream of {} bytes cannot cover a {longest}-byte plaintext",
                keystream.len()
            ),
        ));
    }
    Ok(plaintexts
        .iter()
        .map(|plaintext| xor_prefix(plaintext.as_ref(), keystream))
        .collect())
}
