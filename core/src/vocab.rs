//! FST-backed word sets.
//!
//! A `Vocabulary` is an immutable, sorted set of NFC-normalized words held
//! in an `fst::Set`. It is built once while loading tables and then only
//! queried.

use fst::Set;
use tracing::trace;

use crate::error::Result;
use crate::utils::normalize;

/// How lookups treat letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// Keys are lowercased on insert and on lookup.
    Insensitive,
    /// Keys must match exactly.
    Exact,
}

/// Immutable word set.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    set: Set<Vec<u8>>,
    mode: CaseMode,
}

impl Vocabulary {
    /// Build a vocabulary from any list of words. Duplicates and blank
    /// entries are dropped.
    ///
    /// # Example
    /// ```
    /// use libsinhala_core::vocab::{CaseMode, Vocabulary};
    ///
    /// let vocab = Vocabulary::build(["Kandy", "meeting"], CaseMode::Insensitive).unwrap();
    /// assert!(vocab.contains("kandy"));
    /// assert!(vocab.contains("Meeting"));
    /// assert!(!vocab.contains("gedhara"));
    /// ```
    pub fn build<I, S>(words: I, mode: CaseMode) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys: Vec<String> = words
            .into_iter()
            .map(|w| Self::key(w.as_ref(), mode))
            .filter(|w| !w.is_empty())
            .collect();
        keys.sort();
        keys.dedup();

        let set = Set::from_iter(keys.iter())?;
        trace!(keys = set.len(), ?mode, "vocabulary built");
        Ok(Self { set, mode })
    }

    fn key(word: &str, mode: CaseMode) -> String {
        let word = normalize(word);
        match mode {
            CaseMode::Insensitive => word.to_lowercase(),
            CaseMode::Exact => word,
        }
    }

    /// Membership test under this vocabulary's case mode.
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(Self::key(word, self.mode))
    }

    /// Iterate the stored keys in sorted order.
    pub fn words(&self) -> Vec<String> {
        self.set
            .stream()
            .into_strs()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
