//! Span tokenizer.
//!
//! Splits raw text into an ordered, gap-free partition of classified spans.
//! Downstream stages only ever read spans; the original text is never
//! rewritten in place, so reassembly is a straight concatenation.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;

use crate::utils::is_sinhala;

/// Class of a tokenizer span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    /// Letters, combining marks and joiners.
    Word,
    /// A run of ASCII digits.
    Number,
    /// Any other visible character.
    Punctuation,
    /// A run of whitespace, newlines included.
    Whitespace,
}

/// A maximal run of one [`SpanKind`] (and, for words, one script), as byte
/// offsets into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(kind: SpanKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// Borrow this span's text from the source it was produced from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Classify a single character.
pub fn char_kind(ch: char) -> SpanKind {
    if ch.is_whitespace() {
        SpanKind::Whitespace
    } else if ch.is_ascii_digit() {
        SpanKind::Number
    } else if is_word_char(ch) {
        SpanKind::Word
    } else {
        SpanKind::Punctuation
    }
}

/// Letters, combining marks (Sinhala vowel signs, Latin diacritics) and the
/// zero-width joiners used inside Sinhala conjuncts.
fn is_word_char(ch: char) -> bool {
    ch.is_alphabetic() || is_combining_mark(ch) || ch == '\u{200D}' || ch == '\u{200C}'
}

/// Writing system of a word character. `None` for marks and joiners, which
/// take the script of the letter before them.
fn word_script(ch: char) -> Option<bool> {
    if is_sinhala(ch) {
        Some(true)
    } else if ch.is_alphabetic() {
        Some(false)
    } else {
        None
    }
}

/// Characters allowed inside a word when surrounded by letters.
fn is_word_joiner(ch: char) -> bool {
    matches!(ch, '\'' | '-' | '\u{2019}')
}

/// Tokenize `text` into spans that cover the input exactly once.
///
/// Never fails; the empty string yields an empty vector.
///
/// # Example
/// ```
/// use libsinhala_core::span::{tokenize, SpanKind};
///
/// let text = "Rs. 1500kin!!";
/// let kinds: Vec<SpanKind> = tokenize(text).iter().map(|s| s.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         SpanKind::Word,
///         SpanKind::Punctuation,
///         SpanKind::Whitespace,
///         SpanKind::Number,
///         SpanKind::Word,
///         SpanKind::Punctuation,
///     ]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut iter = text.char_indices().peekable();

    while let Some((start, ch)) = iter.next() {
        let kind = char_kind(ch);
        let mut end = start + ch.len_utf8();
        // Sinhala and Latin letters never share a Word span.
        let mut script = word_script(ch);

        while let Some(&(idx, next)) = iter.peek() {
            let next_kind = char_kind(next);
            let same_script = |c: char| match (script, word_script(c)) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            };
            let joins_word = kind == SpanKind::Word
                && is_word_joiner(next)
                && text[idx + next.len_utf8()..]
                    .chars()
                    .next()
                    .map_or(false, |after| {
                        char_kind(after) == SpanKind::Word && same_script(after)
                    });
            let continues = next_kind == kind && (kind != SpanKind::Word || same_script(next));

            if continues || joins_word {
                if script.is_none() {
                    script = word_script(next);
                }
                end = idx + next.len_utf8();
                iter.next();
            } else {
                break;
            }
        }

        spans.push(Span::new(kind, start, end));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(text: &'a str) -> Vec<(SpanKind, &'a str)> {
        tokenize(text).iter().map(|s| (s.kind, s.text(text))).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_sentence() {
        assert_eq!(
            texts("mama gedhara yanavaa."),
            vec![
                (SpanKind::Word, "mama"),
                (SpanKind::Whitespace, " "),
                (SpanKind::Word, "gedhara"),
                (SpanKind::Whitespace, " "),
                (SpanKind::Word, "yanavaa"),
                (SpanKind::Punctuation, "."),
            ]
        );
    }

    #[test]
    fn test_whitespace_runs_are_kept_whole() {
        let spans = texts("mata  dhaen\n\nvaedata");
        assert_eq!(spans[1], (SpanKind::Whitespace, "  "));
        assert_eq!(spans[3], (SpanKind::Whitespace, "\n\n"));
    }

    #[test]
    fn test_punctuation_runs() {
        assert_eq!(
            texts("innavadha??!"),
            vec![(SpanKind::Word, "innavadha"), (SpanKind::Punctuation, "??!")]
        );
    }

    #[test]
    fn test_digits_split_from_letters() {
        assert_eq!(
            texts("1500kin"),
            vec![(SpanKind::Number, "1500"), (SpanKind::Word, "kin")]
        );
        assert_eq!(
            texts("7.30"),
            vec![
                (SpanKind::Number, "7"),
                (SpanKind::Punctuation, "."),
                (SpanKind::Number, "30"),
            ]
        );
    }

    #[test]
    fn test_inner_apostrophe_and_hyphen() {
        assert_eq!(texts("don't"), vec![(SpanKind::Word, "don't")]);
        assert_eq!(texts("e-mail"), vec![(SpanKind::Word, "e-mail")]);
        assert_eq!(
            texts("eka-"),
            vec![(SpanKind::Word, "eka"), (SpanKind::Punctuation, "-")]
        );
    }

    #[test]
    fn test_sinhala_conjunct_is_one_word() {
        let text = "චිත්‍රපටයක්";
        assert_eq!(texts(text), vec![(SpanKind::Word, text)]);
    }

    #[test]
    fn test_script_change_splits_word() {
        assert_eq!(
            texts("මමgedhara"),
            vec![(SpanKind::Word, "මම"), (SpanKind::Word, "gedhara")]
        );
        assert_eq!(
            texts("zoomඑක"),
            vec![(SpanKind::Word, "zoom"), (SpanKind::Word, "එක")]
        );
        // A joiner between scripts is punctuation.
        assert_eq!(
            texts("මම-gedhara"),
            vec![
                (SpanKind::Word, "මම"),
                (SpanKind::Punctuation, "-"),
                (SpanKind::Word, "gedhara"),
            ]
        );
    }

    #[test]
    fn test_only_ascii_digits_are_numbers() {
        assert_eq!(char_kind('7'), SpanKind::Number);
        assert_eq!(char_kind('²'), SpanKind::Punctuation);
        assert_eq!(char_kind('½'), SpanKind::Punctuation);
        assert_eq!(
            texts("10½"),
            vec![(SpanKind::Number, "10"), (SpanKind::Punctuation, "½")]
        );
    }

    #[test]
    fn test_latin_diacritic_stays_in_word() {
        assert_eq!(texts("innē"), vec![(SpanKind::Word, "innē")]);
    }

    #[test]
    fn test_spans_cover_input() {
        let text = " School kale, 10.30 AM!!  ";
        let spans = tokenize(text);
        let mut cursor = 0;
        for span in &spans {
            assert_eq!(span.start, cursor);
            assert!(!span.is_empty());
            cursor = span.end;
        }
        assert_eq!(cursor, text.len());
    }
}
