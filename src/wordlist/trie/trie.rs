use std::fmt::{Debug, Formatter};

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::wordlist::trie::node::TrieNode;

/// Prefix tree over a dictionary.
///
/// Nodes are immutable once inserted apart from growing new children, so a
/// built trie can be shared by any number of searches at once.
pub struct Trie {
    root: TrieNode,
    node_count: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            root: TrieNode::new(0, 0),
            node_count: 1,
        }
    }

    /// Inserts `word`. Returns false for the empty word and for words that
    /// are already present.
    pub fn add(&mut self, word: &str) -> bool {
        if word.is_empty() || self.contains(word) {
            return false;
        }

        let mut next_id = self.node_count;
        let mut current = &mut self.root;
        current.weight += 1;
        for c in word.chars() {
            current = current.get_or_create_child(c, &mut next_id);
            current.weight += 1;
        }
        current.word = Some(word.to_string());
        self.node_count = next_id;
        true
    }

    /// Inserts every item, returning how many were new.
    pub fn add_all<I, S>(&mut self, items: I) -> usize
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        items.into_iter()
            .filter(|word| self.add(word.as_ref()))
            .count()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get_node(word).map_or(false, TrieNode::is_terminal)
    }

    /// The node reached by spelling `prefix` from the root.
    pub fn get_node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix.chars().try_fold(&self.root, |node, c| node.child(c))
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.root.weight
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes including the root; every node id is below this.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Every stored word, parents before children.
    pub fn words(&self) -> Vec<&str> {
        let mut words = Vec::with_capacity(self.len());
        self.root.traverse_prefix(&mut |node| {
            if let Some(word) = node.word() {
                words.push(word);
            }
        });
        words
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item=S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.add_all(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item=S>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl Serialize for Trie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for word in self.words() {
            seq.serialize_element(word)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Trie {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        deserializer.deserialize_seq(DeserializeTrieVisitor {})
    }
}

struct DeserializeTrieVisitor {}

impl<'de> Visitor<'de> for DeserializeTrieVisitor {
    type Value = Trie;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "a sequence of words")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error> where A: SeqAccess<'de> {
        let mut trie = Trie::new();
        while let Some(word) = seq.next_element::<String>()? {
            trie.add(&word);
        }
        Ok(trie)
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.words()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::trie::Trie;

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD"];
        let trie = words.iter().collect::<Trie>();
        words.iter().for_each(|word| assert!(trie.contains(word)));
    }

    #[test]
    fn doesnt_finds_words_not_in_trie() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD"];
        let bad_words = vec!["HE", "H", "LOL", "BANANA", "", "help"];
        let trie = words.iter().collect::<Trie>();
        bad_words.iter().for_each(|word| assert!(!trie.contains(word)));
    }

    #[test]
    fn child_is_absent_off_every_prefix() {
        let trie = ["oath", "oat"].iter().collect::<Trie>();
        let o = trie.root().child('o').unwrap();
        assert!(o.child('a').is_some());
        assert!(o.child('x').is_none());
        assert!(trie.root().child('a').is_none());
        assert_eq!(trie.get_node("oat").and_then(|n| n.word()), Some("oat"));
        assert_eq!(trie.get_node("oa").and_then(|n| n.word()), None);
    }

    #[test]
    fn duplicates_and_empty_words_collapse() {
        let mut trie = Trie::new();
        assert_eq!(trie.add_all(["eat", "eat", "", "ea", "eat"]), 2);
        assert_eq!(trie.len(), 2);
        assert!(!trie.add("ea"));
        assert!(!trie.add(""));
        assert!(!trie.contains(""));
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn weights_count_words_below() {
        let trie = ["a", "ab", "abc", "abd", "b"].iter().collect::<Trie>();
        assert_eq!(trie.root().weight(), 5);
        assert_eq!(trie.get_node("a").unwrap().weight(), 4);
        assert_eq!(trie.get_node("ab").unwrap().weight(), 3);
        assert_eq!(trie.get_node("abc").unwrap().weight(), 1);
        assert_eq!(trie.get_node("ab").unwrap().depth(), 2);
    }

    #[test]
    fn ids_are_dense_and_unique() {
        let trie = ["tea", "ten", "inn"].iter().collect::<Trie>();
        let mut ids = vec![];
        trie.root().traverse_prefix(&mut |node| ids.push(node.id()));
        ids.sort();
        assert_eq!(ids, (0..trie.node_count()).collect::<Vec<_>>());
    }

    #[test]
    fn test_serialize_deserialize() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD"];
        let trie = words.iter().collect::<Trie>();

        let serialized = serde_json::to_string(&trie).unwrap();
        let new_trie = serde_json::from_str::<Trie>(&serialized).unwrap();

        assert_eq!(new_trie.len(), words.len());
        words.iter().for_each(|word| assert!(new_trie.contains(word)));
    }
}
