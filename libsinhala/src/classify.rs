//! Word classification.
//!
//! Every Word span becomes a [`WordUnit`]. The checks run in a fixed order:
//! already Sinhala, foreign term or acronym, explicit override, then the
//! phonetic rules (with dictionary segmentation for long run-together
//! spans that the rules cannot cover end to end).

use libsinhala_core::utils::contains_sinhala;
use serde::Serialize;
use tracing::trace;

use crate::lexicon::{Entry, Lexicon};
use crate::phonetic::Phonetic;
use crate::rules::RuleTable;
use crate::segment::Segmenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    /// Already written in Sinhala script.
    Native,
    /// English, technical or place-name token kept verbatim.
    ForeignTerm,
    /// Romanized Sinhala, transliterated.
    SinglishCandidate,
    /// Neither; emitted unchanged.
    Noise,
}

/// One dictionary word inside a segmented span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubUnit {
    pub text: String,
    pub foreign: bool,
    /// Sinhala form for Singlish sub-units, the raw text for foreign ones.
    pub rendered: String,
}

/// A classified Word span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordUnit {
    pub text: String,
    pub class: WordClass,
    /// End-to-end phonetic coverage (1.0 for overrides, 0.0 when the rules
    /// were never consulted).
    pub coverage: f32,
    /// Rule-derived or override Sinhala form, if any.
    pub rendered: Option<String>,
    /// Present only when a long span was split into dictionary words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subunits: Option<Vec<SubUnit>>,
}

impl WordUnit {
    fn raw(text: &str, class: WordClass) -> Self {
        Self {
            text: text.to_string(),
            class,
            coverage: 0.0,
            rendered: None,
            subunits: None,
        }
    }
}

/// Settings the classifier reads from the engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierOptions {
    pub noise_coverage_threshold: f32,
    pub min_segment_word_length: usize,
    pub segmentation_min_span_length: usize,
    pub segmentation_backtracking: bool,
}

impl From<&libsinhala_core::Config> for ClassifierOptions {
    fn from(cfg: &libsinhala_core::Config) -> Self {
        Self {
            noise_coverage_threshold: cfg.noise_coverage_threshold,
            min_segment_word_length: cfg.min_segment_word_length,
            segmentation_min_span_length: cfg.segmentation_min_span_length,
            segmentation_backtracking: cfg.segmentation_backtracking,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    rules: &'a RuleTable,
    lexicon: &'a Lexicon,
    options: ClassifierOptions,
}

impl<'a> Classifier<'a> {
    pub fn new(rules: &'a RuleTable, lexicon: &'a Lexicon, options: ClassifierOptions) -> Self {
        Self {
            rules,
            lexicon,
            options,
        }
    }

    pub fn classify(&self, word: &str) -> WordUnit {
        if contains_sinhala(word) {
            return WordUnit::raw(word, WordClass::Native);
        }
        if self.is_foreign(word) {
            return WordUnit::raw(word, WordClass::ForeignTerm);
        }
        if let Some(form) = self.lexicon.override_for(word) {
            return WordUnit {
                text: word.to_string(),
                class: WordClass::SinglishCandidate,
                coverage: 1.0,
                rendered: Some(form.to_string()),
                subunits: None,
            };
        }

        let phonetic = Phonetic::new(self.rules);
        let t = phonetic.transliterate(word);
        let mut unit = WordUnit {
            text: word.to_string(),
            class: WordClass::SinglishCandidate,
            coverage: t.coverage,
            rendered: Some(t.text),
            subunits: None,
        };
        if t.coverage >= 1.0 {
            return unit;
        }

        if word.chars().count() >= self.options.segmentation_min_span_length {
            let segmenter = Segmenter::new(self.lexicon, self.options.min_segment_word_length)
                .with_backtracking(self.options.segmentation_backtracking);
            match segmenter.split(word) {
                Some(pieces) => {
                    let subs = pieces
                        .into_iter()
                        .map(|p| self.sub_unit(&phonetic, p.text, p.entry))
                        .collect();
                    unit.subunits = Some(subs);
                }
                None => unit.class = WordClass::Noise,
            }
            trace!(word, class = ?unit.class, "long span");
            return unit;
        }

        if t.coverage < self.options.noise_coverage_threshold {
            unit.class = WordClass::Noise;
        }
        trace!(word, coverage = unit.coverage, class = ?unit.class, "classified");
        unit
    }

    /// Vocabulary hit, or an all-caps vowelless token of 2 to 5 letters.
    fn is_foreign(&self, word: &str) -> bool {
        self.lexicon.is_foreign(word) || is_acronym_shape(word)
    }

    fn sub_unit(&self, phonetic: &Phonetic<'_>, text: String, entry: Entry) -> SubUnit {
        if entry == Entry::Foreign || self.lexicon.is_foreign(&text) {
            return SubUnit {
                rendered: text.clone(),
                text,
                foreign: true,
            };
        }
        let rendered = match self.lexicon.override_for(&text) {
            Some(form) => form.to_string(),
            None => phonetic.transliterate(&text).text,
        };
        SubUnit {
            text,
            foreign: false,
            rendered,
        }
    }
}

fn is_acronym_shape(word: &str) -> bool {
    let len = word.chars().count();
    (2..=5).contains(&len)
        && word.chars().all(|c| c.is_uppercase())
        && !word.chars().any(|c| "AEIOU".contains(c))
}
