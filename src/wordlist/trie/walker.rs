use std::ops::AddAssign;

use metrics::counter;

use crate::grid::{Grid, MarkStack, Position, DIRECTIONS, SENTINEL};
use crate::wordlist::trie::matches::Matches;
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::searchconfig::Strategy;
use crate::wordlist::trie::trie::Trie;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchStats {
    /// Cells a path tried to step onto, including off-grid and in-path ones.
    pub(crate) visits: u64,
    /// In-grid, free cells whose character no live trie branch accepts.
    pub(crate) pruned: u64,
}

impl SearchStats {
    pub(crate) fn record(&self, matches: usize) {
        counter!("word_search.cells_visited", self.visits);
        counter!("word_search.branches_pruned", self.pruned);
        counter!("word_search.matches", matches as u64);
    }
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: SearchStats) {
        self.visits += other.visits;
        self.pruned += other.pruned;
    }
}

struct Frame<'t> {
    pos: Position,
    node: &'t TrieNode,
    direction: usize,
}

/// Per-search state for the grid walk. The trie is only read; everything
/// that changes while searching lives here.
pub(crate) struct Walker<'t> {
    root: &'t TrieNode,
    total: usize,
    matches: Matches<'t>,
    /// Unreported words at or below each node, indexed by node id.
    remaining: Option<Vec<usize>>,
    /// Ids of the trie nodes on the active path, root first.
    path: Vec<usize>,
    stats: SearchStats,
}

impl<'t> Walker<'t> {
    pub(crate) fn new(trie: &'t Trie, prune_exhausted: bool) -> Walker<'t> {
        let remaining = prune_exhausted.then(|| {
            let mut counts = vec![0; trie.node_count()];
            trie.root().traverse_prefix(&mut |node| counts[node.id()] = node.weight());
            counts
        });

        Walker {
            root: trie.root(),
            total: trie.len(),
            matches: Matches::new(),
            remaining,
            path: vec![trie.root().id()],
            stats: SearchStats::default(),
        }
    }

    /// True once every word in the trie has been found.
    pub(crate) fn is_done(&self) -> bool {
        self.matches.len() == self.total
    }

    pub(crate) fn search_from(&mut self, grid: &mut Grid, start: Position, strategy: Strategy) {
        if self.is_done() {
            return;
        }
        let root = self.root;
        match strategy {
            Strategy::Recursive => self.walk(grid, start, root),
            Strategy::Iterative => self.walk_iterative(grid, start),
        }
    }

    pub(crate) fn finish(self) -> (Matches<'t>, SearchStats) {
        (self.matches, self.stats)
    }

    /// Steps onto `pos` from `node`. Returns the trie node the path continues
    /// with, after reporting its word if it completes one. The caller marks
    /// the cell and must call [`Walker::leave`] once it is released.
    fn enter(&mut self, grid: &Grid, pos: Position, node: &'t TrieNode) -> Option<&'t TrieNode> {
        self.stats.visits += 1;
        let ch = grid.get(pos).filter(|&ch| ch != SENTINEL)?;
        let next = match node.child(ch) {
            Some(next) if self.is_live(next) => next,
            _ => {
                self.stats.pruned += 1;
                return None;
            }
        };

        self.path.push(next.id());
        if self.matches.report(next) {
            self.consume_path();
        }
        Some(next)
    }

    fn leave(&mut self) {
        self.path.pop();
    }

    fn is_live(&self, node: &TrieNode) -> bool {
        self.remaining.as_ref().map_or(true, |remaining| remaining[node.id()] > 0)
    }

    /// The word just reported ends at the top of the path, so it is one of
    /// the unreported words under every node on the path.
    fn consume_path(&mut self) {
        if let Some(remaining) = self.remaining.as_mut() {
            for &id in &self.path {
                remaining[id] -= 1;
            }
        }
    }

    fn walk(&mut self, grid: &mut Grid, pos: Position, node: &'t TrieNode) {
        let Some(next) = self.enter(grid, pos, node) else {
            return;
        };
        if let Some(mut marked) = grid.mark(pos) {
            for neighbor in pos.neighbors() {
                self.walk(&mut marked, neighbor, next);
            }
        }
        self.leave();
    }

    fn walk_iterative(&mut self, grid: &mut Grid, start: Position) {
        let mut marks = MarkStack::new(grid);
        let mut stack = Vec::new();

        let root = self.root;
        if let Some(next) = self.enter(marks.grid(), start, root) {
            marks.acquire(start);
            stack.push(Frame { pos: start, node: next, direction: 0 });
        }

        while let Some(frame) = stack.last_mut() {
            if frame.direction == DIRECTIONS {
                stack.pop();
                marks.release();
                self.leave();
                continue;
            }

            let (pos, node) = (frame.pos, frame.node);
            let direction = frame.direction;
            frame.direction += 1;

            let Some(neighbor) = pos.step(direction) else {
                continue;
            };
            if let Some(next) = self.enter(marks.grid(), neighbor, node) {
                marks.acquire(neighbor);
                stack.push(Frame { pos: neighbor, node: next, direction: 0 });
            }
        }
    }
}
