//! Vocabulary tables: foreign terms, acronyms, the Singlish dictionary and
//! explicit Sinhala overrides.

use std::collections::BTreeMap;

use libsinhala_core::error::Result;
use libsinhala_core::{CaseMode, TrieNode, Vocabulary};
use serde::Deserialize;
use tracing::debug;

/// The vocabulary table shipped with the crate.
pub const EMBEDDED_VOCABULARY: &str = include_str!("../data/vocabulary.toml");

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VocabularyFile {
    acronyms: Vec<String>,
    foreign_terms: Vec<String>,
    kept_latin: Vec<String>,
    words: Vec<String>,
    overrides: BTreeMap<String, String>,
}

/// What a dictionary entry is, for the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Singlish,
    Foreign,
}

/// Immutable lexicon built once per engine.
#[derive(Debug, Clone)]
pub struct Lexicon {
    foreign: Vocabulary,
    acronyms: Vocabulary,
    overrides: BTreeMap<String, String>,
    /// Lowercased Singlish words, overrides and foreign terms.
    dictionary: TrieNode<Entry>,
}

impl Lexicon {
    pub fn embedded(extra_foreign: &[String]) -> Result<Self> {
        Self::from_toml_str(EMBEDDED_VOCABULARY, extra_foreign)
    }

    pub fn load_toml<P: AsRef<std::path::Path>>(path: P, extra_foreign: &[String]) -> Result<Self> {
        let content = libsinhala_core::error::read_to_string(path)?;
        Self::from_toml_str(&content, extra_foreign)
    }

    /// Parse a vocabulary table. `extra_foreign` terms are added to the
    /// case-insensitive foreign set.
    pub fn from_toml_str(content: &str, extra_foreign: &[String]) -> Result<Self> {
        let file: VocabularyFile = toml::from_str(content)?;

        let foreign = Vocabulary::build(
            file.foreign_terms
                .iter()
                .chain(file.kept_latin.iter())
                .chain(extra_foreign.iter()),
            CaseMode::Insensitive,
        )?;
        let acronyms = Vocabulary::build(&file.acronyms, CaseMode::Exact)?;

        let overrides: BTreeMap<String, String> = file
            .overrides
            .into_iter()
            .map(|(k, v)| (k.trim().to_lowercase(), v))
            .filter(|(k, v)| !k.is_empty() && !v.is_empty())
            .collect();

        let mut dictionary = TrieNode::new();
        let singlish = file.words.iter().chain(overrides.keys());
        for word in singlish {
            let key = word.trim().to_lowercase();
            if !key.is_empty() {
                dictionary.insert(&key, Entry::Singlish);
            }
        }
        // Foreign terms win when a spelling is in both lists.
        for word in foreign.words() {
            dictionary.insert(&word, Entry::Foreign);
        }

        debug!(
            foreign = foreign.len(),
            acronyms = acronyms.len(),
            overrides = overrides.len(),
            "vocabulary loaded"
        );

        Ok(Self {
            foreign,
            acronyms,
            overrides,
            dictionary,
        })
    }

    /// Kept verbatim: a case-insensitive foreign term or an exact acronym.
    pub fn is_foreign(&self, word: &str) -> bool {
        self.acronyms.contains(word) || self.foreign.contains(word)
    }

    /// Explicit Sinhala form for `word`, case-insensitive.
    pub fn override_for(&self, word: &str) -> Option<&str> {
        self.overrides.get(&word.to_lowercase()).map(String::as_str)
    }

    /// Dictionary trie over lowercased keys.
    pub fn dictionary(&self) -> &TrieNode<Entry> {
        &self.dictionary
    }

    pub fn foreign_len(&self) -> usize {
        self.foreign.len()
    }

    pub fn acronym_len(&self) -> usize {
        self.acronyms.len()
    }
}
