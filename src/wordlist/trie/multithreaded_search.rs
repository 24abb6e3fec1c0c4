use std::cell::RefCell;
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use thread_local::ThreadLocal;
use tracing::debug;

use crate::error::Result;
use crate::grid::Grid;
use crate::wordlist::trie::matches::Matches;
use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::trie::trie::Trie;
use crate::wordlist::trie::walker::{SearchStats, Walker};

/// What one pool thread owns: a private copy of the grid to mark in, and
/// its own walk state.
struct Worker<'t> {
    grid: Grid,
    walker: Walker<'t>,
}

impl Trie {
    /// Start cells are spread over rayon; concurrent walks never share a
    /// grid, so the caller's grid is only read.
    pub(crate) fn search_parallel(&self, grid: &Grid, config: &SearchConfig) -> Result<Matches<'_>> {
        match config.threads {
            Some(threads) => {
                let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
                Ok(pool.install(|| self.fan_out(grid, config)))
            }
            None => Ok(self.fan_out(grid, config)),
        }
    }

    fn fan_out(&self, grid: &Grid, config: &SearchConfig) -> Matches<'_> {
        let start = Instant::now();
        let workers: ThreadLocal<RefCell<Worker>> = ThreadLocal::new();

        (0..grid.len()).into_par_iter().for_each(|index| {
            let worker = workers.get_or(|| RefCell::new(Worker {
                grid: grid.clone(),
                walker: Walker::new(self, config.prune_exhausted),
            }));
            let mut worker = worker.borrow_mut();
            let Worker { grid, walker } = &mut *worker;
            let pos = grid.position_of(index);
            walker.search_from(grid, pos, config.strategy);
        });

        let mut matches = Matches::new();
        let mut stats = SearchStats::default();
        let mut threads = 0;
        for worker in workers {
            let (found, worker_stats) = worker.into_inner().walker.finish();
            matches.merge(found);
            stats += worker_stats;
            threads += 1;
        }

        stats.record(matches.len());
        debug!(rows = grid.rows(), cols = grid.cols(), words = self.len(), found = matches.len(),
               visits = stats.visits, pruned = stats.pruned, threads, strategy = %config.strategy,
               elapsed_us = start.elapsed().as_micros() as u64, "parallel grid search finished");
        matches
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Grid;
    use crate::wordlist::trie::searchconfig::SearchConfig;
    use crate::wordlist::trie::trie::Trie;

    #[test]
    fn parallel_matches_sequential_on_a_larger_grid() {
        let rows = ["catsdogs", "aretheyx", "tdogcats", "sheepram", "owlbatsx", "ratmouse"];
        let words = ["cat", "cats", "dog", "dogs", "sheep", "ram", "owl", "bat", "bats",
                     "rat", "mouse", "they", "are", "tac", "god", "zebra", "ewe"];
        let trie = words.iter().collect::<Trie>();
        let mut grid = Grid::from_strs(rows).unwrap();

        let sequential = trie.search_grid(&mut grid).into_set();
        let config = SearchConfig::builder().parallel(true).threads(3).build();
        let parallel = trie.search_grid_with(&mut grid, &config).unwrap().into_set();

        assert_eq!(parallel, sequential);
        assert!(parallel.contains("mouse"));
        assert!(!parallel.contains("zebra"));
    }

    #[test]
    fn zero_threads_uses_rayon_default() {
        let trie = ["ab"].iter().collect::<Trie>();
        let mut grid = Grid::from_strs(["ab"]).unwrap();
        let config = SearchConfig::builder().parallel(true).threads(0).build();
        let found = trie.search_grid_with(&mut grid, &config).unwrap();
        assert_eq!(found.sorted(), vec!["ab"]);
    }
}
