pub mod trie;
pub mod node;
pub mod matches;
pub mod search;
pub mod multithreaded_search;
pub mod searchconfig;

mod walker;

pub use matches::Matches;
pub use node::TrieNode;
pub use searchconfig::{SearchConfig, Strategy};
pub use trie::Trie;
