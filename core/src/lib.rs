//! libsinhala-core
//!
//! Language-agnostic pieces shared by the Singlish engine: the span
//! tokenizer, a character trie, FST-backed vocabulary sets, the base
//! configuration and the load-time error type.
//!
//! Public API:
//! - `Span`, `SpanKind`, `tokenize` - total partition of input text
//! - `TrieNode` - prefix trie used for maximal munch and word walks
//! - `Vocabulary` - immutable word set backed by `fst`
//! - `Config` - generic gate and segmentation options
//! - `LoadError` - the only failure surface, raised while loading tables
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::LoadError;

pub mod span;
pub use span::{tokenize, Span, SpanKind};

pub mod trie;
pub use trie::TrieNode;

pub mod vocab;
pub use vocab::{CaseMode, Vocabulary};

/// Generic configuration for the engine core.
///
/// Script-specific options (literal formatting, meridiem markers) live in
/// `SinhalaConfig` in the `libsinhala` crate, which flattens this struct.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Minimum phonetic coverage for a word to be treated as transliterable
    /// rather than noise. Must lie in `[0, 1]`.
    pub noise_coverage_threshold: f32,

    /// Minimum length (chars) of a dictionary word accepted while splitting
    /// run-together input.
    pub min_segment_word_length: usize,

    /// Words shorter than this are never segmented.
    pub segmentation_min_span_length: usize,

    /// Let segmentation retry shorter words when the longest dictionary
    /// prefix leaves a remainder that cannot be split.
    pub segmentation_backtracking: bool,

    /// Additional terms kept verbatim, on top of the vocabulary table.
    pub extra_foreign_terms: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            noise_coverage_threshold: 0.8,
            min_segment_word_length: 2,
            segmentation_min_span_length: 10,
            segmentation_backtracking: false,
            extra_foreign_terms: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> error::Result<Self> {
        let content = error::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let content = self
            .to_toml_string()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Load configuration from a TOML string and validate it.
    pub fn from_toml_str(content: &str) -> error::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> error::Result<()> {
        let t = self.noise_coverage_threshold;
        if !(0.0..=1.0).contains(&t) {
            return Err(LoadError::invalid_config(format!(
                "noise_coverage_threshold must be within [0, 1], got {t}"
            )));
        }
        if self.min_segment_word_length == 0 {
            return Err(LoadError::invalid_config(
                "min_segment_word_length must be at least 1",
            ));
        }
        if self.segmentation_min_span_length == 0 {
            return Err(LoadError::invalid_config(
                "segmentation_min_span_length must be at least 1",
            ));
        }
        Ok(())
    }

    /// Set the noise coverage threshold.
    /// Lower values let more malformed input through the gate.
    /// Default: 0.8
    pub fn set_noise_coverage_threshold(&mut self, threshold: f32) {
        self.noise_coverage_threshold = threshold;
    }

    /// Add a term to keep verbatim.
    pub fn add_foreign_term(&mut self, term: &str) {
        let term = term.trim();
        if !term.is_empty() {
            self.extra_foreign_terms.push(term.to_string());
        }
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }

    /// True for code points in the Sinhala block (U+0D80..=U+0DFF).
    pub fn is_sinhala(ch: char) -> bool {
        ('\u{0D80}'..='\u{0DFF}').contains(&ch)
    }

    /// True if any character of `s` is Sinhala.
    pub fn contains_sinhala(s: &str) -> bool {
        s.chars().any(is_sinhala)
    }
}
