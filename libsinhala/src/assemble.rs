//! Reassembly of processed pieces in source order.

use libsinhala_core::Span;

use crate::literal::Literal;

/// A unit of output: a literal replacing one or more spans, or one span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'l> {
    Literal(&'l Literal),
    Span(Span),
}

impl Segment<'_> {
    pub fn start(&self) -> usize {
        match self {
            Segment::Literal(l) => l.start,
            Segment::Span(s) => s.start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            Segment::Literal(l) => l.end,
            Segment::Span(s) => s.end,
        }
    }
}

/// Merge spans and literals into one ordered, gap-free sequence.
///
/// `literals` must be sorted and aligned to span boundaries, as returned by
/// `LiteralFormatter::find`. Spans inside a literal are dropped.
pub fn layout<'l>(spans: &[Span], literals: &'l [Literal]) -> Vec<Segment<'l>> {
    let mut out = Vec::with_capacity(spans.len());
    let mut lits = literals.iter().peekable();
    let mut i = 0;

    while i < spans.len() {
        let span = spans[i];
        match lits.peek().copied() {
            Some(lit) if lit.start == span.start => {
                out.push(Segment::Literal(lit));
                while i < spans.len() && spans[i].end <= lit.end {
                    i += 1;
                }
                lits.next();
            }
            Some(lit) if lit.start < span.start => {
                // Misaligned literal: skip it and keep the spans.
                lits.next();
            }
            _ => {
                out.push(Segment::Span(span));
                i += 1;
            }
        }
    }
    out
}

/// Concatenate outputs with no separators added.
pub fn concat<I, S>(pieces: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pieces.into_iter().fold(String::new(), |mut acc, p| {
        acc.push_str(p.as_ref());
        acc
    })
}
