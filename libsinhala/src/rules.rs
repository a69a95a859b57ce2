// libsinhala/src/rules.rs
//
// Phonetic rule table.
// - Loaded from TOML (embedded `data/rules.toml` or an external file)
// - Stored in a `TrieNode` so lookups always return the longest pattern
// - Uppercase letters without a rule of their own match through lowercase

use libsinhala_core::error::{LoadError, Result};
use libsinhala_core::TrieNode;
use serde::{Deserialize, Serialize};

/// The rule table shipped with the crate.
pub const EMBEDDED_RULES: &str = include_str!("../data/rules.toml");

/// Hal kirīma, the Sinhala vowel killer.
pub const HAL: char = '\u{0DCA}';

/// Zero width joiner used for rakāransaya and yansaya.
pub const ZWJ: char = '\u{200D}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Consonant,
    Vowel,
    Modifier,
}

/// One Latin pattern and the Sinhala it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRule {
    pub pattern: String,
    pub kind: RuleKind,
    /// Bare consonant, independent vowel letter, or modifier sign.
    pub output: String,
    /// Dependent vowel sign. Only vowels carry one; the inherent `a` has an
    /// empty sign.
    pub sign: Option<String>,
}

impl MappingRule {
    /// Pattern length in characters.
    pub fn len(&self) -> usize {
        self.pattern.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Text written after a consonant when this rule is the following vowel.
    pub fn vowel_sign(&self) -> &str {
        self.sign.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    #[serde(default)]
    conjunct_followers: Vec<String>,
    consonants: Vec<LetterEntry>,
    vowels: Vec<VowelEntry>,
    #[serde(default)]
    modifiers: Vec<LetterEntry>,
}

#[derive(Debug, Deserialize)]
struct LetterEntry {
    pattern: String,
    output: String,
}

#[derive(Debug, Deserialize)]
struct VowelEntry {
    pattern: String,
    letter: String,
    sign: String,
}

/// Immutable rule table.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<MappingRule>,
    trie: TrieNode<usize>,
    followers: Vec<String>,
}

impl RuleTable {
    /// Parse the crate's embedded rule table.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_RULES)
    }

    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = libsinhala_core::error::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RuleFile = toml::from_str(content)?;

        let consonants = file.consonants.into_iter().map(|e| MappingRule {
            pattern: e.pattern,
            kind: RuleKind::Consonant,
            output: e.output,
            sign: None,
        });
        let vowels = file.vowels.into_iter().map(|e| MappingRule {
            pattern: e.pattern,
            kind: RuleKind::Vowel,
            output: e.letter,
            sign: Some(e.sign),
        });
        let modifiers = file.modifiers.into_iter().map(|e| MappingRule {
            pattern: e.pattern,
            kind: RuleKind::Modifier,
            output: e.output,
            sign: None,
        });

        Self::from_rules(consonants.chain(vowels).chain(modifiers).collect(), file.conjunct_followers)
    }

    /// Build a table from already-parsed rules.
    ///
    /// Every pattern must be non-empty ASCII letters and unique, every rule
    /// must produce output, and the table needs at least one consonant and
    /// one vowel. Conjunct followers must name consonant patterns.
    pub fn from_rules(rules: Vec<MappingRule>, followers: Vec<String>) -> Result<Self> {
        let mut trie = TrieNode::new();

        for (idx, rule) in rules.iter().enumerate() {
            if rule.pattern.is_empty() {
                return Err(LoadError::invalid_rule(format!(
                    "empty pattern for output '{}'",
                    rule.output
                )));
            }
            if !rule.pattern.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(LoadError::invalid_rule(format!(
                    "pattern '{}' must be ASCII letters",
                    rule.pattern
                )));
            }
            if rule.output.is_empty() {
                return Err(LoadError::invalid_rule(format!(
                    "pattern '{}' has empty output",
                    rule.pattern
                )));
            }
            if trie.insert(&rule.pattern, idx).is_some() {
                return Err(LoadError::invalid_rule(format!(
                    "duplicate pattern '{}'",
                    rule.pattern
                )));
            }
        }

        if !rules.iter().any(|r| r.kind == RuleKind::Consonant) {
            return Err(LoadError::invalid_rule("table has no consonant rules"));
        }
        if !rules.iter().any(|r| r.kind == RuleKind::Vowel) {
            return Err(LoadError::invalid_rule("table has no vowel rules"));
        }

        for f in &followers {
            let is_consonant = trie
                .get(f)
                .map_or(false, |&i| rules[i].kind == RuleKind::Consonant);
            if !is_consonant {
                return Err(LoadError::invalid_rule(format!(
                    "conjunct follower '{f}' is not a consonant pattern"
                )));
            }
        }

        Ok(Self {
            rules,
            trie,
            followers,
        })
    }

    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Exact pattern lookup (case-sensitive).
    pub fn get(&self, pattern: &str) -> Option<&MappingRule> {
        self.trie.get(pattern).map(|&i| &self.rules[i])
    }

    /// True if `pattern` joins the preceding consonant as a conjunct.
    pub fn is_conjunct_follower(&self, pattern: &str) -> bool {
        self.followers.iter().any(|f| f == pattern)
    }

    /// Longest rule matching `input` at `pos`, as `(matched_len, rule)`.
    ///
    /// If `input[pos]` is an uppercase ASCII letter, the lowercased letter is
    /// tried too and wins when it matches strictly longer. `Mama` therefore
    /// reads as `mama`, while `Th` keeps its own rule.
    pub fn longest_match(&self, input: &[char], pos: usize) -> Option<(usize, &MappingRule)> {
        let first = *input.get(pos)?;
        let direct = self
            .trie
            .longest_match(input, pos)
            .map(|(end, &i)| (end - pos, i));

        let folded = if first.is_ascii_uppercase() {
            let rest = input[pos + 1..].iter().copied();
            self.trie
                .longest_match_iter(std::iter::once(first.to_ascii_lowercase()).chain(rest))
                .map(|(len, &i)| (len, i))
        } else {
            None
        };

        let best = match (direct, folded) {
            (Some(d), Some(f)) if f.0 > d.0 => Some(f),
            (None, f) => f,
            (d, _) => d,
        };
        best.map(|(len, i)| (len, &self.rules[i]))
    }
}
