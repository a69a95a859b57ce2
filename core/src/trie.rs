/// Prefix trie for rule matching and dictionary segmentation.
use ahash::AHashMap;

/// A character trie mapping keys to values.
///
/// Used by the phonetic rule table for maximal-munch matching and by the
/// segmenter for dictionary prefix walks.
///
/// # Example
/// ```
/// use libsinhala_core::trie::TrieNode;
///
/// let mut trie = TrieNode::new();
/// trie.insert("th", 1);
/// trie.insert("t", 2);
///
/// assert_eq!(trie.get("th"), Some(&1));
/// assert_eq!(trie.get("h"), None);
///
/// let input: Vec<char> = "tha".chars().collect();
/// assert_eq!(trie.longest_match(&input, 0), Some((2, &1)));
/// ```
#[derive(Debug, Clone)]
pub struct TrieNode<V> {
    children: AHashMap<char, Box<TrieNode<V>>>,
    value: Option<V>,
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TrieNode<V> {
    /// Create a new empty trie root.
    pub fn new() -> Self {
        Self {
            children: AHashMap::new(),
            value: None,
        }
    }

    /// Insert a key, returning the value previously stored under it.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let mut node = self;
        for ch in key.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(TrieNode::new()));
        }
        node.value.replace(value)
    }

    /// Exact lookup.
    ///
    /// Returns `None` for keys that only exist as a prefix.
    ///
    /// # Example
    /// ```
    /// use libsinhala_core::trie::TrieNode;
    ///
    /// let mut trie = TrieNode::new();
    /// trie.insert("gedhara", ());
    ///
    /// assert!(trie.contains_key("gedhara"));
    /// assert!(!trie.contains_key("ged"));  // prefix, not a complete key
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut node = self;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        node.value.as_ref()
    }

    /// Check whether the trie contains exactly the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Walk the trie starting at a position in `input` and return all matched
    /// prefixes.
    ///
    /// Returns `(end_index, value)` pairs where `end_index` is the exclusive
    /// character index after the match, in order of increasing length.
    ///
    /// # Example
    /// ```
    /// use libsinhala_core::trie::TrieNode;
    ///
    /// let mut trie = TrieNode::new();
    /// trie.insert("ma", "ma");
    /// trie.insert("mama", "mama");
    ///
    /// let input: Vec<char> = "mamagedhara".chars().collect();
    /// let prefixes = trie.walk_prefixes(&input, 0);
    /// assert_eq!(prefixes, vec![(2, &"ma"), (4, &"mama")]);
    /// ```
    pub fn walk_prefixes(&self, input: &[char], start: usize) -> Vec<(usize, &V)> {
        let mut res = Vec::new();
        let mut node = self;
        let mut idx = start;
        while idx < input.len() {
            match node.children.get(&input[idx]) {
                Some(child) => {
                    node = child;
                    idx += 1;
                    if let Some(v) = &node.value {
                        res.push((idx, v));
                    }
                }
                None => break,
            }
        }
        res
    }

    /// Longest key matching at `start`, as `(end_index, value)`.
    pub fn longest_match(&self, input: &[char], start: usize) -> Option<(usize, &V)> {
        let rest = input.get(start..)?;
        self.longest_match_iter(rest.iter().copied())
            .map(|(len, v)| (start + len, v))
    }

    /// Longest key that is a prefix of `chars`, as `(matched_len, value)`.
    ///
    /// Lets callers substitute characters on the fly (for example a
    /// lowercased first letter) without building a new buffer.
    pub fn longest_match_iter<I>(&self, chars: I) -> Option<(usize, &V)>
    where
        I: IntoIterator<Item = char>,
    {
        let mut best = None;
        let mut node = self;
        for (i, ch) in chars.into_iter().enumerate() {
            match node.children.get(&ch) {
                Some(child) => {
                    node = child;
                    if let Some(v) = &node.value {
                        best = Some((i + 1, v));
                    }
                }
                None => break,
            }
        }
        best
    }
}
