//! Grid module - manages the locked-cell playfield
//!
//! The grid is a 10x20 field where each cell is empty or holds the kind of the
//! piece locked into it. Uses a flat array, row-major order.
//! Coordinates: (x, y) with x in 0..10 (left to right), y in 0..20 (top to bottom).

use crate::core::pieces::Shape;
use crate::types::{Cell, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Write a piece's kind into every grid cell covered by an occupied
    /// shape cell.
    ///
    /// Callers must already have determined the piece cannot move down
    /// further; the last successful collision check guarantees the cells are
    /// in bounds. Rows above the grid are skipped by the bounds-checked write.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) {
        for (dx, dy) in shape.cells() {
            self.set(x + dx, y + dy, Some(kind));
        }
    }

    /// Clear every full row and return how many were cleared.
    ///
    /// Scans bottom to top with a write pointer: surviving rows compact
    /// downward in relative order and the vacated rows at the top become
    /// empty, which is exactly the classic "remove row, insert empty row at
    /// the top" semantics.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = GRID_WIDTH as usize;
        let mut cleared = 0;
        let mut write_y = GRID_HEIGHT as usize;

        for read_y in (0..GRID_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
