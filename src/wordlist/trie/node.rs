use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use derive_new::new;

#[derive(new, Default, PartialEq, Eq)]
pub struct TrieNode {
    #[new(default)]
    pub(crate) children: HashMap<char, TrieNode>,
    #[new(default)]
    pub(crate) word: Option<String>,
    pub(crate) id: usize,
    pub(crate) depth: usize,
    #[new(default)]
    pub(crate) weight: usize,
}

impl TrieNode {
    /// The node one character further down, or `None` when no stored word
    /// continues with `c`.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&c, node)| (c, node))
    }

    /// The stored word ending exactly here, if any.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    /// Unique within one trie; the root is 0 and ids are dense.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// How many stored words end at or below this node.
    pub fn weight(&self) -> usize {
        self.weight
    }

    pub(crate) fn get_or_create_child(&mut self, c: char, next_id: &mut usize) -> &mut TrieNode {
        let depth = self.depth + 1;
        self.children.entry(c).or_insert_with(|| {
            let node = TrieNode::new(*next_id, depth);
            *next_id += 1;
            node
        })
    }

    pub(crate) fn traverse_prefix<'f, F>(&'f self, f: &mut F)
        where F: FnMut(&'f TrieNode) {
        f(self);
        self.children.values().for_each(|child| child.traverse_prefix(f));
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("id", &self.id)
            .field("depth", &self.depth)
            .field("weight", &self.weight)
            .field("word", &self.word)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
