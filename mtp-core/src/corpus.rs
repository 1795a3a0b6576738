// File:    corpus.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: The ordered collection of cryptograms together with its cached key and decrypted messages.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The cryptogram corpus.
//!
//! A [`Corpus`] owns its cryptograms and the result of the last recovery.
//! The key and the decrypted messages are held together as one
//! [`Recovery`]: `recover()` replaces it wholesale, and any mutation of the
//! corpus drops it, so the accessors never return stale data.
//!
//! Mutation and recovery both borrow the corpus mutably. Sharing a corpus
//! between threads therefore requires external synchronization around the
//! whole call, which keeps a recovery from interleaving with `add`/`clear`.

use log::debug;

use crate::crypto::project;
use crate::frequency::{ENGLISH, FrequencyTables};
use crate::key_search::{max_len, recover_key};

/// The key recovered from a corpus and the messages it decrypts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    key: Vec<u8>,
    messages: Vec<String>,
}

impl Recovery {
    /// The recovered keystream, as long as the longest cryptogram.
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// One decrypted message per cryptogram, in corpus order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// Freshness of the cached recovery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Analysis {
    /// Never recovered, or invalidated by a mutation.
    #[default]
    Stale,
    /// Matches the current cryptograms.
    Fresh(Recovery),
}

/// An ordered collection of cryptograms encrypted with one shared keystream.
#[derive(Debug, Clone)]
pub struct Corpus {
    cryptograms: Vec<Vec<u8>>,
    tables: &'static FrequencyTables,
    analysis: Analysis,
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new()
    }
}

impl Corpus {
    /// Creates an empty corpus scored against English statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tables(&ENGLISH)
    }

    /// Creates an empty corpus scored against the given tables.
    ///
    /// The tables must live for the whole process. Tables built at run time,
    /// for example from a bigram counter's output, can be promoted with
    /// `Box::leak`.
    #[must_use]
    pub fn with_tables(tables: &'static FrequencyTables) -> Self {
        Self {
            cryptograms: Vec::new(),
            tables,
            analysis: Analysis::Stale,
        }
    }

    fn invalidate(&mut self) {
        self.analysis = Analysis::Stale;
    }

    /// Appends a cryptogram. Any byte sequence is accepted, including an empty one.
    pub fn add(&mut self, cryptogram: impl Into<Vec<u8>>) {
        self.cryptograms.push(cryptogram.into());
        self.invalidate();
    }

    /// Appends several cryptograms in order.
    pub fn add_all<I>(&mut self, cryptograms: I)
    where
        I: IntoIterator,
        I::Item: Into<Vec<u8>>,
    {
        self.cryptograms
            .extend(cryptograms.into_iter().map(Into::into));
        self.invalidate();
    }

    /// Removes the cryptogram at `index`, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<Vec<u8>> {
        if index >= self.cryptograms.len() {
            return None;
        }
        self.invalidate();
        Some(self.cryptograms.remove(index))
    }

    /// Removes every cryptogram.
    pub fn clear(&mut self) {
        self.cryptograms.clear();
        self.invalidate();
    }

    /// The cryptograms in insertion order.
    #[must_use]
    pub fn cryptograms(&self) -> &[Vec<u8>] {
        &self.cryptograms
    }

    /// Number of cryptograms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cryptograms.len()
    }

    /// Whether the corpus holds no cryptograms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cryptograms.is_empty()
    }

    /// Length of the longest cryptogram.
    #[must_use]
    pub fn max_len(&self) -> usize {
        max_len(&self.cryptograms)
    }

    /// Recovers the key and decrypts every cryptogram with it.
    ///
    /// Does nothing on an empty corpus. Otherwise the whole key is searched
    /// again from scratch, even if a fresh recovery already exists.
    pub fn recover(&mut self) {
        if self.cryptograms.is_empty() {
            debug!("Corpus is empty, nothing to recover.");
            return;
        }
        let key = recover_key(&self.cryptograms, self.tables);
        let messages = self
            .cryptograms
            .iter()
            .map(|cryptogram| project(cryptogram, &key))
            .collect();
        debug!(
            "Recovered a {}-byte key for {} cryptogram(s).",
            key.len(),
            self.cryptograms.len()
        );
        self.analysis = Analysis::Fresh(Recovery { key, messages });
    }

    /// The last recovery, if it still matches the cryptograms.
    #[must_use]
    pub const fn recovery(&self) -> Option<&Recovery> {
        match &self.analysis {
            Analysis::Fresh(recovery) => Some(recovery),
            Analysis::Stale => None,
        }
    }

    /// The recovered key, if fresh.
    #[must_use]
    pub fn key(&self) -> Option<&[u8]> {
        self.recovery().map(Recovery::key)
    }

    /// The decrypted messages, if fresh.
    #[must_use]
    pub fn decrypted_messages(&self) -> Option<&[String]> {
        self.recovery().map(Recovery::messages)
    }
}

impl<C: Into<Vec<u8>>> Extend<C> for Corpus {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<C: Into<Vec<u8>>> FromIterator<C> for Corpus {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut corpus = Self::new();
        corpus.add_all(iter);
        corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recovered() -> Corpus {
        let mut corpus: Corpus = [b"Hello there".to_vec(), b"General".to_vec()]
            .into_iter()
            .collect();
        corpus.recover();
        assert!(corpus.recovery().is_some());
        corpus
    }

    #[test]
    fn empty_corpus_recovers_nothing() {
        let mut corpus = Corpus::new();
        corpus.recover();
        assert!(corpus.key().is_none());
        assert!(corpus.decrypted_messages().is_none());
    }

    #[test]
    fn add_invalidates() {
        let mut corpus = recovered();
        corpus.add(b"x".to_vec());
        assert!(corpus.key().is_none());
        assert!(corpus.decrypted_messages().is_none());
    }

    #[test]
    fn add_all_invalidates_even_when_empty() {
        let mut corpus = recovered();
        corpus.add_all(Vec::<Vec<u8>>::new());
        assert!(corpus.recovery().is_none());
    }

    #[test]
    fn clear_invalidates_and_empties() {
        let mut corpus = recovered();
        corpus.clear();
        assert!(corpus.is_empty());
        assert!(corpus.recovery().is_none());
        corpus.recover();
        assert!(corpus.recovery().is_none());
    }

    #[test]
    fn remove_out_of_range_keeps_recovery() {
        let mut corpus = recovered();
        assert_eq!(corpus.remove(5), None);
        assert!(corpus.recovery().is_some());
        assert_eq!(corpus.remove(1), Some(b"General".to_vec()));
        assert!(corpus.recovery().is_none());
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn extend_behaves_like_add_all() {
        let mut corpus = recovered();
        corpus.extend([vec![1u8, 2, 3]]);
        assert_eq!(corpus.len(), 3);
        assert!(corpus.key().is_none());
    }

    #[test]
    fn recovering_again_replaces_the_result() {
        let mut corpus = recovered();
        corpus.add(b"a much longer cryptogram than before".to_vec());
        corpus.recover();
        assert_eq!(corpus.key().map(<[u8]>::len), Some(corpus.max_len()));
        assert_eq!(corpus.decrypted_messages().map(<[String]>::len), Some(3));
    }
}
