//! Pieces module - canonical shape templates and rotation
//!
//! Each piece kind has an immutable template matrix; the active piece carries
//! a mutable copy of it as its current orientation. Rotation is a 90-degree
//! clockwise turn of that matrix (transpose, then reverse each row). There is
//! no wall-kick correction: a rotation that would collide is simply discarded.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, GRID_WIDTH};

/// Maximum shape extent in either dimension
pub const MAX_SHAPE_DIM: usize = 4;

type ShapeRow = ArrayVec<bool, MAX_SHAPE_DIM>;

/// A piece orientation: a small row-major boolean occupancy matrix.
///
/// Rows and columns stay within `MAX_SHAPE_DIM`, so the matrix lives inline
/// with no heap allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl Shape {
    /// The canonical spawn orientation for a piece kind
    pub fn template(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Bar => Self::from_rows(&[&[true, true, true, true]]),
            PieceKind::L => Self::from_rows(&[&[true, false], &[true, false], &[true, true]]),
            PieceKind::J => Self::from_rows(&[&[false, true], &[false, true], &[true, true]]),
            PieceKind::O => Self::from_rows(&[&[true, true], &[true, true]]),
            PieceKind::T => Self::from_rows(&[&[false, true, false], &[true, true, true]]),
        }
    }

    fn from_rows(rows: &[&[bool]]) -> Self {
        let mut shape = Self {
            rows: ArrayVec::new(),
        };
        for row in rows {
            let mut r = ShapeRow::new();
            r.extend(row.iter().copied());
            shape.rows.push(r);
        }
        shape
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the cell at (col, row) is occupied
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Iterate the occupied cells as (col, row) offsets
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled)
                .map(move |(x, _)| (x as i8, y as i8))
        })
    }

    /// The shape turned 90 degrees clockwise.
    ///
    /// Row `i` of the result is column `i` of the input read bottom-to-top,
    /// i.e. transpose then reverse each row. Applying this four times yields
    /// the original orientation for any rectangular matrix.
    pub fn rotated_cw(&self) -> Self {
        let mut rows = ArrayVec::new();
        for x in 0..self.width() {
            let mut row = ShapeRow::new();
            for y in (0..self.height()).rev() {
                row.push(self.rows[y][x]);
            }
            rows.push(row);
        }
        Self { rows }
    }
}

/// Spawn column for a shape: horizontally centered on the grid
pub fn spawn_x(shape: &Shape) -> i8 {
    (GRID_WIDTH as i8) / 2 - (shape.width() as i8) / 2
}
