//! Confidence gate: decide between the Sinhala rendering and the raw text.

use std::borrow::Cow;

use crate::classify::{WordClass, WordUnit};

/// What the gate let through for one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gated<'u> {
    pub text: Cow<'u, str>,
    /// True when the raw input was emitted unchanged.
    pub passed_through: bool,
}

impl<'u> Gated<'u> {
    fn raw(unit: &'u WordUnit) -> Self {
        Self {
            text: Cow::Borrowed(&unit.text),
            passed_through: true,
        }
    }
}

/// Gate one classified word.
///
/// Native, foreign and noise words are emitted raw. A segmented span emits
/// its sub-units joined without separators. Anything else emits its
/// rendering only when its coverage reaches `threshold`.
pub fn gate(unit: &WordUnit, threshold: f32) -> Gated<'_> {
    match unit.class {
        WordClass::Native | WordClass::ForeignTerm | WordClass::Noise => Gated::raw(unit),
        WordClass::SinglishCandidate => {
            if let Some(subs) = &unit.subunits {
                let text: String = subs.iter().map(|s| s.rendered.as_str()).collect();
                return Gated {
                    text: Cow::Owned(text),
                    passed_through: false,
                };
            }
            match &unit.rendered {
                Some(rendered) if unit.coverage >= threshold => Gated {
                    text: Cow::Borrowed(rendered),
                    passed_through: false,
                },
                _ => Gated::raw(unit),
            }
        }
    }
}
