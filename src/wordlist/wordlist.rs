use std::fs;
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::wordlist::trie::{Matches, SearchConfig, Trie};

/// A dictionary loaded into a [`Trie`], ready to be searched for in grids.
#[derive(Debug, Default)]
pub struct Wordlist {
    trie: Trie,
}

/// Layout of a word-list file. With neither option each line is one word.
/// Otherwise the word is taken from `word_column` (0 by default), splitting
/// on `delimiter`, or on whitespace when only a column is given.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line_no: usize, line: &'a str) -> Result<&'a str> {
        let column = self.word_column.unwrap_or(0);
        let word = match (self.delimiter, self.word_column) {
            (None, None) => return Ok(line.trim()),
            (Some(delimiter), _) => line.split(delimiter).nth(column).map(str::trim),
            (None, Some(_)) if line.trim().is_empty() => return Ok(""),
            (None, Some(_)) => line.split_whitespace().nth(column),
        };
        word.ok_or(Error::MissingColumn { line: line_no, column })
    }
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Default::default()
    }

    pub fn from_words<I, S>(words: I) -> Wordlist
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        Wordlist { trie: words.into_iter().collect() }
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Wordlist> {
        let mut wordlist = Wordlist::new();
        wordlist.load_file(path, format)?;
        Ok(wordlist)
    }

    /// Adds every word in the file, returning how many were new.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, format: &FileFormat) -> Result<usize> {
        info!("Reading words from {}", path.as_ref().display());
        let text = fs::read_to_string(path)?;
        self.load_text(&text, format)
    }

    /// Adds every word in `text`, one per line. Blank lines are skipped.
    /// Nothing is added unless every line parses.
    pub fn load_text(&mut self, text: &str, format: &FileFormat) -> Result<usize> {
        let start = Instant::now();
        let words = text.lines()
            .enumerate()
            .map(|(idx, line)| format.parse_line(idx + 1, line).map(|word| (idx + 1, word)))
            .collect::<Result<Vec<_>>>()?;

        let mut lines = 0;
        let mut added = 0;
        for (line, word) in words.into_iter().filter(|(_, word)| !word.is_empty()) {
            lines += 1;
            if self.trie.add(word) {
                added += 1;
            } else {
                debug!(line, word, "duplicate word skipped");
            }
        }

        info!(added, duplicates = lines - added, nodes = self.trie.node_count(),
              elapsed_ms = start.elapsed().as_millis() as u64, "word list loaded");
        Ok(added)
    }

    delegate! {
        to self.trie {
            pub fn contains(&self, word: &str) -> bool;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn add(&mut self, word: &str) -> bool;
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Every word from the list hidden in `grid`.
    pub fn search(&self, grid: &mut Grid) -> Matches<'_> {
        self.trie.search_grid(grid)
    }

    pub fn search_with(&self, grid: &mut Grid, config: &SearchConfig) -> Result<Matches<'_>> {
        self.trie.search_grid_with(grid, config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_one_word_per_line() {
        let mut wl = Wordlist::new();
        let added = wl.load_text("oath\n\n  pea \neat\nrain\neat\n", &FileFormat::default()).unwrap();
        assert_eq!(added, 4);
        assert_eq!(wl.len(), 4);
        assert!(wl.contains("pea"));
        assert!(!wl.contains(" pea "));
    }

    #[test]
    fn reads_a_delimited_column() {
        let format = FileFormat::builder().delimiter('\t').word_column(1).build();
        let mut wl = Wordlist::new();
        wl.load_text("1\toath\n2\teat\n", &format).unwrap();
        assert!(wl.contains("oath"));
        assert!(wl.contains("eat"));
        assert!(!wl.contains("1"));

        let err = wl.load_text("3\n", &format).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { line: 1, column: 1 }));
    }

    #[test]
    fn failed_load_adds_nothing() {
        let format = FileFormat::builder().delimiter('\t').word_column(1).build();
        let mut wl = Wordlist::from_words(["pea"]);

        let err = wl.load_text("1\toath\n2\n3\teat\n", &format).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { line: 2, column: 1 }));
        assert_eq!(wl.len(), 1);
        assert!(!wl.contains("oath"));
        assert!(!wl.contains("eat"));
    }

    #[test]
    fn column_without_delimiter_splits_on_whitespace() {
        let format = FileFormat::builder().word_column(1).build();
        let mut wl = Wordlist::new();
        assert_eq!(wl.load_text("12  oath\n\n7\teat extra\n", &format).unwrap(), 2);
        assert!(wl.contains("oath"));
        assert!(wl.contains("eat"));
        assert!(!wl.contains("12"));

        let err = wl.load_text("99\n", &format).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { line: 1, column: 1 }));
    }

    #[test]
    fn loads_from_file_and_searches() {
        let path = std::env::temp_dir().join(format!("word-search-tools-{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "oath\npea\neat\nrain").unwrap();
        drop(file);

        let wl = Wordlist::from_file(&path, &FileFormat::default()).unwrap();
        fs::remove_file(&path).unwrap();

        let mut grid = Grid::from_strs(["oaan", "etae", "ihkr", "iflv"]).unwrap();
        assert_eq!(wl.search(&mut grid).sorted(), vec!["eat", "oath"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Wordlist::from_file("/definitely/not/here.txt", &FileFormat::default()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
