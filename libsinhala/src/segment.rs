// libsinhala/src/segment.rs
//
// Dictionary word-break for run-together input.
// - Greedy: repeatedly take the longest dictionary prefix
// - Backtracking (opt-in): backward DP that keeps, at each position, the
//   longest word whose remainder can also be split
// - Both fail closed: either the whole span splits or nothing is returned

use crate::lexicon::{Entry, Lexicon};
use tracing::trace;

/// One dictionary word inside a split span, in its original casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub text: String,
    pub entry: Entry,
}

#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    lexicon: &'a Lexicon,
    min_word_len: usize,
    backtracking: bool,
}

impl<'a> Segmenter<'a> {
    pub fn new(lexicon: &'a Lexicon, min_word_len: usize) -> Self {
        Self {
            lexicon,
            min_word_len: min_word_len.max(1),
            backtracking: false,
        }
    }

    /// Retry shorter words when the longest prefix leaves an unsplittable
    /// remainder. Any split greedy finds is found unchanged.
    pub fn with_backtracking(mut self, enabled: bool) -> Self {
        self.backtracking = enabled;
        self
    }

    /// Split `word` into dictionary words of at least `min_word_len` chars.
    ///
    /// Lookup is case-insensitive; pieces keep the input's casing.
    /// Returns `None` unless the entire word is covered.
    pub fn split(&self, word: &str) -> Option<Vec<Piece>> {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return None;
        }
        let lowered: Vec<char> = chars
            .iter()
            .map(|&c| c.to_lowercase().next().unwrap_or(c))
            .collect();

        let bounds = if self.backtracking {
            self.split_backtracking(&lowered)
        } else {
            self.split_greedy(&lowered)
        };
        let Some(bounds) = bounds else {
            trace!(word, "no dictionary split");
            return None;
        };

        let mut pieces = Vec::with_capacity(bounds.len());
        let mut start = 0;
        for (end, entry) in bounds {
            pieces.push(Piece {
                text: chars[start..end].iter().collect(),
                entry,
            });
            start = end;
        }
        trace!(word, pieces = pieces.len(), "dictionary split");
        Some(pieces)
    }

    /// Longest dictionary word at `pos` satisfying `accept`, longest first.
    fn longest_word<F>(&self, input: &[char], pos: usize, accept: F) -> Option<(usize, Entry)>
    where
        F: Fn(usize) -> bool,
    {
        self.lexicon
            .dictionary()
            .walk_prefixes(input, pos)
            .into_iter()
            .rev()
            .find(|&(end, _)| end - pos >= self.min_word_len && accept(end))
            .map(|(end, &entry)| (end, entry))
    }

    fn split_greedy(&self, input: &[char]) -> Option<Vec<(usize, Entry)>> {
        let mut bounds = Vec::new();
        let mut pos = 0;
        while pos < input.len() {
            let (end, entry) = self.longest_word(input, pos, |_| true)?;
            bounds.push((end, entry));
            pos = end;
        }
        Some(bounds)
    }

    fn split_backtracking(&self, input: &[char]) -> Option<Vec<(usize, Entry)>> {
        let n = input.len();
        // next[i] = (end, entry) of the word chosen at position i.
        let mut next: Vec<Option<(usize, Entry)>> = vec![None; n + 1];
        let mut reachable = vec![false; n + 1];
        reachable[n] = true;

        for i in (0..n).rev() {
            if let Some(choice) = self.longest_word(input, i, |end| reachable[end]) {
                reachable[i] = true;
                next[i] = Some(choice);
            }
        }

        let mut bounds = Vec::new();
        let mut pos = 0;
        while pos < n {
            let (end, entry) = next[pos]?;
            bounds.push((end, entry));
            pos = end;
        }
        Some(bounds)
    }
}
