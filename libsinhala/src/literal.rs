//! Currency and clock-time literals.
//!
//! Literals are found by regex over the whole input, independently of the
//! words around them. A match is only used when it starts and ends on span
//! boundaries, so a literal always replaces a whole run of spans.
//! Plain numbers are not literals and pass through unchanged.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use libsinhala_core::Span;

use crate::config::CurrencyStyle;

// Marker and amount share a line.
static CURRENCY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bR[sS]\.?[ \t]*[0-9][0-9,]*(?:\.[0-9]+)?").expect("currency pattern")
});

// Hour, minutes, optional meridiem. Trailing context is checked by hand
// since the regex crate has no lookaround.
static TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([0-9]{1,2})([.:])([0-9]{2})(?: ?([AaPp])(?:\.[Mm]\.|[Mm]))?").expect("time pattern")
});

const LOCAL_RUPEE: &str = "රු.";
const MORNING: &str = "පෙ.ව.";
const EVENING: &str = "ප.ව.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    Currency,
    Time,
}

/// A recognised literal and its rewritten form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Literal {
    pub kind: LiteralKind,
    /// Byte range in the source text.
    pub start: usize,
    pub end: usize,
    pub output: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiteralFormatter {
    pub currency: CurrencyStyle,
    pub meridiem_normalization: bool,
}

impl LiteralFormatter {
    pub fn new(currency: CurrencyStyle, meridiem_normalization: bool) -> Self {
        Self {
            currency,
            meridiem_normalization,
        }
    }

    /// All literals in `text`, sorted and non-overlapping. `spans` must be
    /// the tokenization of `text`.
    pub fn find(&self, text: &str, spans: &[Span]) -> Vec<Literal> {
        let bounds = Boundaries::new(spans);
        let mut found: Vec<Literal> = Vec::new();

        for m in CURRENCY.find_iter(text) {
            let matched = m.as_str().trim_end_matches(',');
            let (start, end) = (m.start(), m.start() + matched.len());
            if !bounds.aligned(start, end) {
                continue;
            }
            found.push(Literal {
                kind: LiteralKind::Currency,
                start,
                end,
                output: self.format_currency(matched),
            });
        }

        for caps in TIME.captures_iter(text) {
            if let Some(lit) = self.time_literal(text, &caps, &bounds) {
                if !overlaps(&found, lit.start, lit.end) {
                    found.push(lit);
                }
            }
        }

        found.sort_by_key(|l| l.start);
        found
    }

    fn format_currency(&self, matched: &str) -> String {
        // Marker is always two ASCII letters.
        let amount = matched[2..].trim_start_matches('.').trim_start();
        match self.currency {
            CurrencyStyle::Canonical => format!("Rs.{amount}"),
            CurrencyStyle::Preserve => matched.to_string(),
            CurrencyStyle::Localized => format!("{LOCAL_RUPEE}{amount}"),
        }
    }

    fn time_literal(&self, text: &str, caps: &Captures<'_>, bounds: &Boundaries) -> Option<Literal> {
        let whole = caps.get(0)?;
        let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
        let minutes = caps.get(3)?;
        let minute: u32 = minutes.as_str().parse().ok()?;
        if hour > 23 || minute > 59 {
            return None;
        }
        if next_char(text, minutes.end()).map_or(false, |c| c.is_ascii_digit()) {
            return None;
        }

        let clock_end = minutes.end();
        let meridiem = caps
            .get(4)
            .filter(|_| !next_char(text, whole.end()).map_or(false, char::is_alphabetic))
            .filter(|_| bounds.aligned(whole.start(), whole.end()));

        let start = whole.start();
        let clock = &text[start..clock_end];
        let (end, output) = match meridiem {
            Some(marker) => {
                let output = if self.meridiem_normalization {
                    let prefix = if marker.as_str().eq_ignore_ascii_case("a") {
                        MORNING
                    } else {
                        EVENING
                    };
                    format!("{prefix} {clock}")
                } else {
                    whole.as_str().to_string()
                };
                (whole.end(), output)
            }
            None => (clock_end, clock.to_string()),
        };

        if !bounds.aligned(start, end) {
            return None;
        }
        Some(Literal {
            kind: LiteralKind::Time,
            start,
            end,
            output,
        })
    }
}

fn next_char(text: &str, at: usize) -> Option<char> {
    text.get(at..)?.chars().next()
}

fn overlaps(found: &[Literal], start: usize, end: usize) -> bool {
    found.iter().any(|l| !(end <= l.start || start >= l.end))
}

/// Span start and end offsets, for alignment checks.
struct Boundaries {
    starts: Vec<usize>,
    ends: Vec<usize>,
}

impl Boundaries {
    fn new(spans: &[Span]) -> Self {
        Self {
            starts: spans.iter().map(|s| s.start).collect(),
            ends: spans.iter().map(|s| s.end).collect(),
        }
    }

    fn aligned(&self, start: usize, end: usize) -> bool {
        start < end
            && self.starts.binary_search(&start).is_ok()
            && self.ends.binary_search(&end).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libsinhala_core::tokenize;

    fn find(fmt: LiteralFormatter, text: &str) -> Vec<(LiteralKind, String, String)> {
        fmt.find(text, &tokenize(text))
            .into_iter()
            .map(|l| (l.kind, text[l.start..l.end].to_string(), l.output))
            .collect()
    }

    fn outputs(fmt: LiteralFormatter, text: &str) -> Vec<String> {
        find(fmt, text).into_iter().map(|(_, _, out)| out).collect()
    }

    #[test]
    fn test_currency_styles() {
        let text = "badu tika Rs. 1500kin ganna";
        let canonical = LiteralFormatter::default();
        assert_eq!(
            find(canonical, text),
            vec![(LiteralKind::Currency, "Rs. 1500".to_string(), "Rs.1500".to_string())]
        );

        let preserve = LiteralFormatter::new(CurrencyStyle::Preserve, false);
        assert_eq!(outputs(preserve, text), vec!["Rs. 1500"]);

        let localized = LiteralFormatter::new(CurrencyStyle::Localized, false);
        assert_eq!(outputs(localized, text), vec!["රු.1500"]);
    }

    #[test]
    fn test_currency_marker_variants() {
        let fmt = LiteralFormatter::default();
        assert_eq!(outputs(fmt, "Rs5500"), vec!["Rs.5500"]);
        assert_eq!(outputs(fmt, "RS.  5,500.75"), vec!["Rs.5,500.75"]);
        // Trailing grouping comma is punctuation, not part of the amount.
        assert_eq!(outputs(fmt, "Rs. 500, passe"), vec!["Rs.500"]);
    }

    #[test]
    fn test_currency_needs_marker_boundary() {
        let fmt = LiteralFormatter::default();
        assert!(find(fmt, "HRs 100").is_empty());
        assert!(find(fmt, "Rs.").is_empty());
        assert!(find(fmt, "1500").is_empty());
    }

    #[test]
    fn test_currency_does_not_cross_lines() {
        let fmt = LiteralFormatter::default();
        assert!(find(fmt, "Rs.\n1500").is_empty());
        assert!(find(fmt, "Rs.\n\n1500").is_empty());
        assert!(find(fmt, "Rs \r\n 1500").is_empty());
        assert_eq!(outputs(fmt, "Rs.\t200"), vec!["Rs.200"]);
    }

    #[test]
    fn test_non_ascii_digits_not_amounts() {
        let fmt = LiteralFormatter::default();
        assert!(find(fmt, "Rs. ١٥").is_empty());
    }

    #[test]
    fn test_time_preserved_by_default() {
        let fmt = LiteralFormatter::default();
        assert_eq!(
            find(fmt, "Mata 7.30 AM meeting"),
            vec![(LiteralKind::Time, "7.30 AM".to_string(), "7.30 AM".to_string())]
        );
        assert_eq!(outputs(fmt, "10:15"), vec!["10:15"]);
    }

    #[test]
    fn test_meridiem_normalization() {
        let fmt = LiteralFormatter::new(CurrencyStyle::Canonical, true);
        assert_eq!(outputs(fmt, "7.30 AM"), vec!["පෙ.ව. 7.30"]);
        assert_eq!(outputs(fmt, "10.30 PM"), vec!["ප.ව. 10.30"]);
        assert_eq!(outputs(fmt, "10.30pm."), vec!["ප.ව. 10.30"]);
        assert_eq!(outputs(fmt, "6.05 a.m."), vec!["පෙ.ව. 6.05"]);
        // No marker: clock kept as written.
        assert_eq!(outputs(fmt, "7.30 venakal"), vec!["7.30"]);
    }

    #[test]
    fn test_meridiem_must_end_word() {
        let fmt = LiteralFormatter::new(CurrencyStyle::Canonical, true);
        assert_eq!(
            find(fmt, "7.30 amma"),
            vec![(LiteralKind::Time, "7.30".to_string(), "7.30".to_string())]
        );
    }

    #[test]
    fn test_invalid_clock_values() {
        let fmt = LiteralFormatter::default();
        assert!(find(fmt, "24.00").is_empty());
        assert!(find(fmt, "7.60").is_empty());
        assert!(find(fmt, "7.305").is_empty());
    }

    #[test]
    fn test_currency_wins_over_time() {
        let fmt = LiteralFormatter::default();
        let found = find(fmt, "Rs. 7.30");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, LiteralKind::Currency);
    }

    #[test]
    fn test_literals_sorted() {
        let fmt = LiteralFormatter::default();
        let found = find(fmt, "7.30 AM Rs. 100 10.30 PM");
        let kinds: Vec<LiteralKind> = found.iter().map(|f| f.0).collect();
        assert_eq!(
            kinds,
            vec![LiteralKind::Time, LiteralKind::Currency, LiteralKind::Time]
        );
    }
}
