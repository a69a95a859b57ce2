// libsinhala/src/phonetic.rs
//
// Maximal-munch transliteration over the rule table.
// - `scan` splits a word into rule units (or raw characters)
// - `render` writes the alphasyllabic Sinhala form
// - `coverage` scores how much of the word sits in pronounceable syllables

use crate::rules::{MappingRule, RuleKind, RuleTable, HAL, ZWJ};

/// One scanned unit of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit<'r> {
    /// A matched rule and the number of input characters it consumed.
    Rule { rule: &'r MappingRule, len: usize },
    /// A character no rule matches; written unchanged.
    Raw(char),
}

impl<'r> Unit<'r> {
    pub fn kind(&self) -> Option<RuleKind> {
        match self {
            Unit::Rule { rule, .. } => Some(rule.kind),
            Unit::Raw(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Unit::Rule { len, .. } => *len,
            Unit::Raw(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is(&self, kind: RuleKind) -> bool {
        self.kind() == Some(kind)
    }

    fn pattern(&self) -> Option<&'r str> {
        match self {
            Unit::Rule { rule, .. } => Some(rule.pattern.as_str()),
            Unit::Raw(_) => None,
        }
    }
}

/// Rendered text and its phonetic coverage in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transliteration {
    pub text: String,
    pub coverage: f32,
}

/// Phonetic engine bound to a rule table.
#[derive(Debug, Clone, Copy)]
pub struct Phonetic<'r> {
    rules: &'r RuleTable,
}

impl<'r> Phonetic<'r> {
    pub fn new(rules: &'r RuleTable) -> Self {
        Self { rules }
    }

    /// Transliterate one word.
    pub fn transliterate(&self, word: &str) -> Transliteration {
        let units = self.scan(word);
        let total = word.chars().count();
        Transliteration {
            text: self.render(&units),
            coverage: self.coverage(&units, total),
        }
    }

    /// Left to right, longest rule at each position; unmatched characters
    /// become `Unit::Raw`.
    pub fn scan(&self, word: &str) -> Vec<Unit<'r>> {
        let chars: Vec<char> = word.chars().collect();
        let mut units = Vec::with_capacity(chars.len());
        let mut pos = 0;
        while pos < chars.len() {
            match self.rules.longest_match(&chars, pos) {
                Some((len, rule)) => {
                    units.push(Unit::Rule { rule, len });
                    pos += len;
                }
                None => {
                    units.push(Unit::Raw(chars[pos]));
                    pos += 1;
                }
            }
        }
        units
    }

    /// Write scanned units as Sinhala.
    ///
    /// A consonant absorbs a following vowel as its dependent sign. Without
    /// one it takes the hal kirīma, joined with ZWJ when the next consonant
    /// is a different conjunct follower (`r`, `y`) that carries a vowel.
    pub fn render(&self, units: &[Unit<'r>]) -> String {
        let mut out = String::new();
        let mut i = 0;
        while i < units.len() {
            match units[i] {
                Unit::Rule { rule, .. } if rule.kind == RuleKind::Consonant => {
                    out.push_str(&rule.output);
                    match units.get(i + 1) {
                        Some(Unit::Rule { rule: vowel, .. }) if vowel.kind == RuleKind::Vowel => {
                            out.push_str(vowel.vowel_sign());
                            i += 2;
                            continue;
                        }
                        next => {
                            out.push(HAL);
                            if self.joins_conjunct(rule, next, units.get(i + 2)) {
                                out.push(ZWJ);
                            }
                        }
                    }
                }
                Unit::Rule { rule, .. } => out.push_str(&rule.output),
                Unit::Raw(c) => out.push(c),
            }
            i += 1;
        }
        out
    }

    fn joins_conjunct(
        &self,
        current: &MappingRule,
        next: Option<&Unit<'r>>,
        after: Option<&Unit<'r>>,
    ) -> bool {
        let Some(Unit::Rule { rule: next, .. }) = next else {
            return false;
        };
        next.kind == RuleKind::Consonant
            && next.pattern != current.pattern
            && self.rules.is_conjunct_follower(&next.pattern)
            && after.map_or(false, |u| u.is(RuleKind::Vowel))
    }

    /// Fraction of `total` characters consumed by rules in a pronounceable
    /// context.
    ///
    /// Vowels always count and raw characters never do; a modifier counts
    /// only right after a vowel. A consonant cluster counts when it sits
    /// between vowels and has at most two consonants (three if the last is
    /// a conjunct follower), or touches a vowel on one side and has at most
    /// two. A word without any vowel scores 0.
    pub fn coverage(&self, units: &[Unit<'r>], total: usize) -> f32 {
        if total == 0 || !units.iter().any(|u| u.is(RuleKind::Vowel)) {
            return 0.0;
        }

        let mut supported = 0usize;
        let mut i = 0;
        while i < units.len() {
            let unit = &units[i];
            match unit.kind() {
                None => i += 1,
                Some(RuleKind::Vowel) => {
                    supported += unit.len();
                    i += 1;
                }
                Some(RuleKind::Modifier) => {
                    if i > 0 && units[i - 1].is(RuleKind::Vowel) {
                        supported += unit.len();
                    }
                    i += 1;
                }
                Some(RuleKind::Consonant) => {
                    let mut j = i;
                    while j < units.len() && units[j].is(RuleKind::Consonant) {
                        j += 1;
                    }
                    let cluster = &units[i..j];
                    let before = i > 0 && units[i - 1].is(RuleKind::Vowel);
                    let after = units.get(j).map_or(false, |u| u.is(RuleKind::Vowel));

                    let pronounceable = match (before, after) {
                        (true, true) => {
                            cluster.len() <= 2
                                || (cluster.len() == 3
                                    && cluster[2]
                                        .pattern()
                                        .map_or(false, |p| self.rules.is_conjunct_follower(p)))
                        }
                        (true, false) | (false, true) => cluster.len() <= 2,
                        (false, false) => false,
                    };
                    if pronounceable {
                        supported += cluster.iter().map(Unit::len).sum::<usize>();
                    }
                    i = j;
                }
            }
        }

        supported as f32 / total as f32
    }
}
