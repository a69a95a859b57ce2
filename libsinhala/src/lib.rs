//! libsinhala crate root
//!
//! Singlish (romanized Sinhala) to Sinhala script transliteration. Text goes
//! through a fixed pipeline of pure stages over tables loaded once:
//! tokenize, classify, segment, transliterate, format literals, gate and
//! reassemble.
//!
//! Public API exported here:
//! - `translate` over a lazily built default engine
//! - `Engine`, `TranslationResult`, `PieceReport` from `engine`
//! - `SinhalaConfig`, `CurrencyStyle` from `config`
//!
//! # Example
//! ```
//! assert_eq!(
//!     libsinhala::translate("heta mata zoom meeting ekak thiyenavaa."),
//!     "හෙට මට zoom meeting එකක් තියෙනවා."
//! );
//! ```

pub mod assemble;
pub mod classify;
pub mod config;
pub mod engine;
pub mod gate;
pub mod lexicon;
pub mod literal;
pub mod phonetic;
pub mod rules;
pub mod segment;

pub use libsinhala_core::{tokenize, LoadError, Span, SpanKind};

pub use classify::{SubUnit, WordClass, WordUnit};
pub use config::{CurrencyStyle, SinhalaConfig};
pub use engine::{Engine, PieceKind, PieceReport, TranslationResult};
pub use literal::{Literal, LiteralKind};
pub use rules::{MappingRule, RuleKind, RuleTable};

use once_cell::sync::Lazy;

static DEFAULT_ENGINE: Lazy<Result<Engine, LoadError>> =
    Lazy::new(|| Engine::new(SinhalaConfig::default()));

/// The process-wide engine built from the embedded tables and default
/// configuration, or the error that stopped it from loading.
pub fn default_engine() -> Result<&'static Engine, &'static LoadError> {
    DEFAULT_ENGINE.as_ref()
}

/// Transliterate `text` with the default engine.
///
/// # Panics
///
/// Panics if the embedded tables fail to load. That does not depend on
/// `text`; use [`default_engine`] to check it up front.
pub fn translate(text: &str) -> String {
    match default_engine() {
        Ok(engine) => engine.translate(text),
        Err(e) => panic!("embedded tables failed to load: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_loads() {
        assert!(default_engine().is_ok());
    }

    #[test]
    fn test_default_engine_is_shared() {
        let a = default_engine().unwrap();
        let b = default_engine().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate("api iiyee gedhara giyaa."), "අපි ඊයේ ගෙදර ගියා.");
    }
}
