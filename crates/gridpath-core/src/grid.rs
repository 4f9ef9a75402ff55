//! Rectangular boolean occupancy grid.
//!
//! [`Grid`] stores one "blocked" flag per cell, row-major in a flat buffer.
//! `true` means blocked, `false` means passable.

use thiserror::Error;

use crate::geom::Point;

/// Errors for occupancy-grid construction and mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Construction from rows where not every row has the same length.
    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// Construction from zero rows or zero columns.
    #[error("occupancy grid must have at least one row and one column")]
    Empty,
    /// A mutation addressed a cell outside `[0, width) x [0, height)`.
    #[error("{pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        pos: Point,
        width: i32,
        height: i32,
    },
}

/// A rectangular occupancy grid with fixed width and height.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<bool>,
    width: i32,
    height: i32,
}

impl Default for Grid {
    /// A fully passable 10x10 grid.
    fn default() -> Self {
        Self {
            cells: vec![false; 100],
            width: 10,
            height: 10,
        }
    }
}

impl Grid {
    /// Create a fully passable grid of the given dimensions.
    ///
    /// Returns [`GridError::Empty`] if either dimension is not positive.
    pub fn open(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            cells: vec![false; (width * height) as usize],
            width,
            height,
        })
    }

    /// Build a grid from rows of blocked flags (`rows[y][x]`, row-major).
    ///
    /// Width is the length of the first row; every other row must match it
    /// ([`GridError::RaggedRow`] otherwise). An empty grid or empty first
    /// row is [`GridError::Empty`].
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        let height = rows.len();
        if height == 0 || rows[0].is_empty() {
            return Err(GridError::Empty);
        }
        let width = rows[0].len();
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    len: row.len(),
                    expected: width,
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            width: width as i32,
            height: height as i32,
        })
    }

    /// Width in columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: constructors reject empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies within `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Flat row-major index of an in-bounds point.
    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Whether the cell at `p` is blocked.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds; querying outside the grid is a
    /// contract violation, not a recoverable condition.
    #[inline]
    pub fn blocked(&self, p: Point) -> bool {
        assert!(self.contains(p), "blocked({p}): out of bounds");
        self.cells[self.index(p)]
    }

    /// Set the blocked flag of a single cell in place.
    pub fn set_blocked(&mut self, x: i32, y: i32, flag: bool) -> Result<(), GridError> {
        let p = Point::new(x, y);
        if !self.contains(p) {
            return Err(GridError::OutOfBounds {
                pos: p,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.index(p);
        self.cells[i] = flag;
        Ok(())
    }
}
