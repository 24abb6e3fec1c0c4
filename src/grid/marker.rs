use std::ops::{Deref, DerefMut};

use crate::grid::{Grid, Position, SENTINEL};

/// Keeps one cell on the active path. The original character goes back in
/// when the guard drops, whichever way the scope is left.
///
/// Derefs to the grid so the walk can keep marking further cells through it.
pub struct PathMark<'g> {
    grid: &'g mut Grid,
    index: usize,
    saved: char,
}

impl<'g> PathMark<'g> {
    pub(crate) fn acquire(grid: &'g mut Grid, pos: Position) -> Option<PathMark<'g>> {
        let index = grid.index(pos)?;
        if grid.cells[index] == SENTINEL {
            return None;
        }
        let saved = grid.replace(index, SENTINEL);
        Some(PathMark { grid, index, saved })
    }

    /// The character hidden under the marker.
    pub fn saved(&self) -> char {
        self.saved
    }
}

impl Deref for PathMark<'_> {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        &*self.grid
    }
}

impl DerefMut for PathMark<'_> {
    fn deref_mut(&mut self) -> &mut Grid {
        &mut *self.grid
    }
}

impl Drop for PathMark<'_> {
    fn drop(&mut self) {
        self.grid.replace(self.index, self.saved);
    }
}

/// The explicit-stack counterpart of [`PathMark`]: marks are pushed and
/// popped in LIFO order, and whatever is still marked when the stack drops
/// is restored newest first.
pub struct MarkStack<'g> {
    grid: &'g mut Grid,
    saved: Vec<(usize, char)>,
}

impl<'g> MarkStack<'g> {
    pub fn new(grid: &'g mut Grid) -> MarkStack<'g> {
        MarkStack { grid, saved: Vec::new() }
    }

    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Marks `pos`. Returns false if it is off the grid or already marked.
    pub fn acquire(&mut self, pos: Position) -> bool {
        match self.grid.index(pos) {
            Some(index) if self.grid.cells[index] != SENTINEL => {
                let saved = self.grid.replace(index, SENTINEL);
                self.saved.push((index, saved));
                true
            }
            _ => false,
        }
    }

    /// Unmarks the most recently marked cell.
    pub fn release(&mut self) -> Option<Position> {
        let (index, saved) = self.saved.pop()?;
        self.grid.replace(index, saved);
        Some(self.grid.position_of(index))
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

impl Drop for MarkStack<'_> {
    fn drop(&mut self) {
        while self.release().is_some() {}
    }
}
