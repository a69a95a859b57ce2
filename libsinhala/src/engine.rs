//! Singlish transliteration engine
//!
//! Combines the tokenizer, classifier, literal formatter, gate and assembler
//! into a simple `translate(text) -> String` API.
//!
//! Tables are parsed once and shared behind an `Arc`, so cloning an engine
//! is cheap and clones can be used from any thread.

use std::path::Path;
use std::sync::Arc;

use libsinhala_core::error::Result;
use libsinhala_core::{tokenize, SpanKind};
use serde::Serialize;
use tracing::{debug, info};

use crate::assemble::{self, Segment};
use crate::classify::{Classifier, ClassifierOptions, WordClass};
use crate::config::SinhalaConfig;
use crate::gate::gate;
use crate::lexicon::Lexicon;
use crate::literal::{LiteralFormatter, LiteralKind};
use crate::rules::RuleTable;

/// File names looked up by [`Engine::from_dir`].
pub const RULES_FILE: &str = "rules.toml";
pub const VOCABULARY_FILE: &str = "vocabulary.toml";

#[derive(Debug)]
struct Tables {
    rules: RuleTable,
    lexicon: Lexicon,
    literals: LiteralFormatter,
    options: ClassifierOptions,
    config: SinhalaConfig,
}

/// Public engine for libsinhala.
#[derive(Debug, Clone)]
pub struct Engine {
    inner: Arc<Tables>,
}

/// How a piece of output was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PieceKind {
    /// Whitespace, punctuation or a plain number, copied verbatim.
    Span(SpanKind),
    Word(WordClass),
    Literal(LiteralKind),
}

/// Diagnostics for one output piece.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieceReport {
    /// Byte range in the input.
    pub start: usize,
    pub end: usize,
    pub source: String,
    pub kind: PieceKind,
    pub output: String,
    /// Phonetic coverage, for words only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f32>,
    /// True when the input text was emitted unchanged.
    pub passed_through: bool,
}

/// Output string plus a per-piece report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    pub output: String,
    pub pieces: Vec<PieceReport>,
}

impl Engine {
    /// Build an engine from the embedded rule and vocabulary tables.
    pub fn new(config: SinhalaConfig) -> Result<Self> {
        Self::from_tables(
            crate::rules::EMBEDDED_RULES,
            crate::lexicon::EMBEDDED_VOCABULARY,
            config,
        )
    }

    /// Build an engine from rule and vocabulary TOML sources.
    pub fn from_tables(rules_toml: &str, vocab_toml: &str, config: SinhalaConfig) -> Result<Self> {
        config.validate()?;
        let rules = RuleTable::from_toml_str(rules_toml)?;
        let lexicon = Lexicon::from_toml_str(vocab_toml, &config.base.extra_foreign_terms)?;
        Ok(Self::assemble_tables(rules, lexicon, config))
    }

    /// Load `rules.toml` and `vocabulary.toml` from a directory.
    ///
    /// Both files must be present.
    pub fn from_dir<P: AsRef<Path>>(dir: P, config: SinhalaConfig) -> Result<Self> {
        config.validate()?;
        let dir = dir.as_ref();
        debug!(dir = %dir.display(), "loading tables");

        let rules = RuleTable::load_toml(dir.join(RULES_FILE))?;
        let lexicon = Lexicon::load_toml(dir.join(VOCABULARY_FILE), &config.base.extra_foreign_terms)?;

        Ok(Self::assemble_tables(rules, lexicon, config))
    }

    /// Build from the embedded tables with additional terms learned at
    /// runtime, kept verbatim like the vocabulary's foreign terms.
    pub fn with_learned_terms<I, S>(mut config: SinhalaConfig, learned: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in learned {
            config.base.add_foreign_term(term.as_ref());
        }
        Self::new(config)
    }

    fn assemble_tables(rules: RuleTable, lexicon: Lexicon, config: SinhalaConfig) -> Self {
        info!(
            rules = rules.len(),
            foreign_terms = lexicon.foreign_len(),
            acronyms = lexicon.acronym_len(),
            currency = ?config.currency_style,
            meridiem = config.meridiem_normalization,
            "engine tables loaded"
        );
        let literals = LiteralFormatter::new(config.currency_style, config.meridiem_normalization);
        let options = ClassifierOptions::from(config.base());
        Self {
            inner: Arc::new(Tables {
                rules,
                lexicon,
                literals,
                options,
                config,
            }),
        }
    }

    pub fn config(&self) -> &SinhalaConfig {
        &self.inner.config
    }

    pub fn rules(&self) -> &RuleTable {
        &self.inner.rules
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.inner.lexicon
    }

    /// Transliterate `text`. Never fails.
    pub fn translate(&self, text: &str) -> String {
        self.analyze(text).output
    }

    /// Transliterate `text` and report how every piece was handled.
    pub fn analyze(&self, text: &str) -> TranslationResult {
        let t = &*self.inner;
        let spans = tokenize(text);
        let literals = t.literals.find(text, &spans);
        let classifier = Classifier::new(&t.rules, &t.lexicon, t.options);

        let pieces: Vec<PieceReport> = assemble::layout(&spans, &literals)
            .into_iter()
            .map(|segment| {
                let source = &text[segment.start()..segment.end()];
                match segment {
                    Segment::Literal(lit) => PieceReport {
                        start: lit.start,
                        end: lit.end,
                        source: source.to_string(),
                        kind: PieceKind::Literal(lit.kind),
                        output: lit.output.clone(),
                        coverage: None,
                        passed_through: lit.output == source,
                    },
                    Segment::Span(span) if span.kind == SpanKind::Word => {
                        let unit = classifier.classify(source);
                        let gated = gate(&unit, t.options.noise_coverage_threshold);
                        PieceReport {
                            start: span.start,
                            end: span.end,
                            source: source.to_string(),
                            kind: PieceKind::Word(unit.class),
                            output: gated.text.into_owned(),
                            coverage: Some(unit.coverage),
                            passed_through: gated.passed_through,
                        }
                    }
                    Segment::Span(span) => PieceReport {
                        start: span.start,
                        end: span.end,
                        source: source.to_string(),
                        kind: PieceKind::Span(span.kind),
                        output: source.to_string(),
                        coverage: None,
                        passed_through: true,
                    },
                }
            })
            .collect();

        let output = assemble::concat(pieces.iter().map(|p| p.output.as_str()));
        debug!(pieces = pieces.len(), literals = literals.len(), "translated");
        TranslationResult { output, pieces }
    }
}
