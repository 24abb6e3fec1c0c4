//! Finds every dictionary word hidden in a character grid.
//!
//! A word is hidden if some path of orthogonally adjacent cells, each used at
//! most once, spells it. The dictionary is held in a [`Trie`]; a depth-first
//! walk from every cell descends the trie one character per step and abandons
//! a branch as soon as no stored word continues along it.
//!
//! ```
//! use word_search_tools::{search, Grid, Trie};
//!
//! let mut grid = Grid::from_strs(["oaan", "etae", "ihkr", "iflv"]).unwrap();
//! let trie = ["oath", "pea", "eat", "rain"].iter().collect::<Trie>();
//!
//! let mut found = search(&mut grid, &trie).into_iter().collect::<Vec<_>>();
//! found.sort();
//! assert_eq!(found, vec!["eat", "oath"]);
//! ```

pub mod error;
pub mod grid;
pub mod wordlist;

use std::collections::HashSet;

pub use error::{Error, Result};
pub use grid::{Grid, Position};
pub use wordlist::trie::{Matches, SearchConfig, Strategy, Trie, TrieNode};
pub use wordlist::wordlist::{FileFormat, Wordlist};

/// The words of `trie` present in `grid`. The grid is restored before this
/// returns.
pub fn search(grid: &mut Grid, trie: &Trie) -> HashSet<String> {
    trie.search_grid(grid).into_set()
}

/// Builds a trie from `words` and searches `grid` for them.
pub fn find_words<I, S>(grid: &mut Grid, words: I) -> HashSet<String>
    where I: IntoIterator<Item=S>, S: AsRef<str> {
    search(grid, &words.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use maplit::hashset;

    use super::*;

    #[test]
    fn find_words_collapses_duplicate_input() {
        let mut grid = Grid::from_strs(["ab", "cd"]).unwrap();
        let found = find_words(&mut grid, vec!["ab", "ab", "ca", "db", "x"]);
        assert_eq!(found, hashset! {"ab".to_string(), "ca".to_string(), "db".to_string()});
    }

    #[test]
    fn search_leaves_grid_untouched() {
        let mut grid = Grid::from_strs(["aa", "aa"]).unwrap();
        let before = grid.clone();
        let trie = ["a", "aa", "aaa", "aaaa", "aaaaa"].iter().collect::<Trie>();
        assert_eq!(search(&mut grid, &trie).len(), 4);
        assert_eq!(grid, before);
    }
}
