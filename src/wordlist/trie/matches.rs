use std::collections::HashSet;

use serde::{Serialize, Serializer};

use crate::wordlist::trie::node::TrieNode;

/// Words found by a search.
///
/// Each terminal trie node stands for exactly one distinct word, so
/// "already reported" is tracked by node id and the trie itself is never
/// touched.
#[derive(Debug, Default, Clone)]
pub struct Matches<'t> {
    reported: HashSet<usize>,
    words: HashSet<&'t str>,
    found: Vec<&'t TrieNode>,
}

impl<'t> Matches<'t> {
    pub fn new() -> Matches<'t> {
        Default::default()
    }

    /// Records the word ending at `node`. Returns true only the first time a
    /// given word is seen; prefix-only nodes are ignored.
    pub fn report(&mut self, node: &'t TrieNode) -> bool {
        match node.word() {
            Some(word) if self.reported.insert(node.id()) => {
                self.words.insert(word);
                self.found.push(node);
                true
            }
            _ => false,
        }
    }

    pub fn is_reported(&self, node: &TrieNode) -> bool {
        self.reported.contains(&node.id())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// Words in the order they were first found.
    pub fn iter(&self) -> impl Iterator<Item = &'t str> + '_ {
        self.found.iter().filter_map(|&node| node.word())
    }

    pub fn sorted(&self) -> Vec<&'t str> {
        let mut words = self.iter().collect::<Vec<_>>();
        words.sort_unstable();
        words
    }

    pub fn into_set(self) -> HashSet<String> {
        self.iter().map(str::to_string).collect()
    }

    /// Folds in matches from another search over the same trie.
    pub fn merge(&mut self, other: Matches<'t>) {
        for node in other.found {
            self.report(node);
        }
    }
}

impl Serialize for Matches<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.collect_seq(self.sorted())
    }
}

#[cfg(test)]
mod tests {
    use maplit::hashset;

    use crate::wordlist::trie::matches::Matches;
    use crate::wordlist::trie::trie::Trie;

    #[test]
    fn reports_each_word_once() {
        let trie = ["eat", "ea", "tea"].iter().collect::<Trie>();
        let eat = trie.get_node("eat").unwrap();
        let mut matches = Matches::new();

        assert!(matches.report(eat));
        assert!(!matches.report(eat));
        assert!(!matches.report(trie.get_node("e").unwrap()));
        assert!(matches.report(trie.get_node("ea").unwrap()));

        assert_eq!(matches.len(), 2);
        assert!(matches.is_reported(eat));
        assert!(matches.contains("ea"));
        assert!(!matches.contains("tea"));
        assert_eq!(matches.iter().collect::<Vec<_>>(), vec!["eat", "ea"]);
        assert_eq!(matches.sorted(), vec!["ea", "eat"]);
    }

    #[test]
    fn merge_is_a_union() {
        let trie = ["a", "b", "c"].iter().collect::<Trie>();
        let node = |w: &str| trie.get_node(w).unwrap();

        let mut left = Matches::new();
        left.report(node("a"));
        left.report(node("b"));
        let mut right = Matches::new();
        right.report(node("c"));
        right.report(node("a"));

        left.merge(right);
        assert_eq!(left.len(), 3);
        assert!(left.contains("c"));
        assert_eq!(left.into_set(), hashset! {"a".to_string(), "b".to_string(), "c".to_string()});
    }

    #[test]
    fn contains_matches_whole_words_only() {
        let trie = ["tea", "team", "teammate"].iter().collect::<Trie>();
        let mut matches = Matches::new();
        assert!(!matches.contains("team"));

        matches.report(trie.get_node("team").unwrap());
        matches.report(trie.get_node("teamm").unwrap());
        assert!(matches.contains("team"));
        assert!(!matches.contains("tea"));
        assert!(!matches.contains("teamm"));
        assert!(!matches.contains("teammate"));
        assert!(!matches.contains(""));
    }

    #[test]
    fn serializes_sorted() {
        let trie = ["pea", "eat", "oath"].iter().collect::<Trie>();
        let mut matches = Matches::new();
        matches.report(trie.get_node("pea").unwrap());
        matches.report(trie.get_node("eat").unwrap());
        assert_eq!(serde_json::to_string(&matches).unwrap(), r#"["eat","pea"]"#);
    }
}
