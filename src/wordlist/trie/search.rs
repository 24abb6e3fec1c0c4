use std::time::Instant;

use tracing::debug;

use crate::error::Result;
use crate::grid::Grid;
use crate::wordlist::trie::matches::Matches;
use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::trie::trie::Trie;
use crate::wordlist::trie::walker::Walker;

impl Trie {
    /// Every stored word that some path of orthogonally adjacent, distinct
    /// cells in `grid` spells out. Uses the default [`SearchConfig`].
    ///
    /// Cells are marked in place while the walk runs; `grid` reads exactly as
    /// before once this returns.
    pub fn search_grid(&self, grid: &mut Grid) -> Matches<'_> {
        self.search_sequential(grid, &SearchConfig::default())
    }

    /// Like [`Trie::search_grid`] with an explicit configuration. Only a
    /// parallel search with a dedicated pool can fail, if the pool cannot be
    /// built.
    pub fn search_grid_with(&self, grid: &mut Grid, config: &SearchConfig) -> Result<Matches<'_>> {
        if config.parallel {
            self.search_parallel(grid, config)
        } else {
            Ok(self.search_sequential(grid, config))
        }
    }

    fn search_sequential(&self, grid: &mut Grid, config: &SearchConfig) -> Matches<'_> {
        let start = Instant::now();
        let mut walker = Walker::new(self, config.prune_exhausted);

        for index in 0..grid.len() {
            if walker.is_done() {
                break;
            }
            let pos = grid.position_of(index);
            walker.search_from(grid, pos, config.strategy);
        }

        let (matches, stats) = walker.finish();
        stats.record(matches.len());
        debug!(rows = grid.rows(), cols = grid.cols(), words = self.len(), found = matches.len(),
               visits = stats.visits, pruned = stats.pruned, strategy = %config.strategy,
               elapsed_us = start.elapsed().as_micros() as u64, "grid search finished");
        matches
    }
}
