//! Movement cost configuration.

use gridpath_core::Point;

/// Cost of a single grid step, split by direction.
///
/// The defaults are the classic integer approximation `orthogonal = 10`,
/// `diagonal = 14` (14 ≈ 10·√2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Costs {
    /// Cost of a horizontal or vertical step.
    pub orthogonal: i32,
    /// Cost of a diagonal step.
    pub diagonal: i32,
}

impl Default for Costs {
    fn default() -> Self {
        Self {
            orthogonal: 10,
            diagonal: 14,
        }
    }
}

impl Costs {
    /// Create a cost configuration with explicit step costs.
    pub const fn new(orthogonal: i32, diagonal: i32) -> Self {
        Self {
            orthogonal,
            diagonal,
        }
    }

    /// Cost of moving from `from` to the neighboring cell `to`.
    ///
    /// Returns `None` when the two cells are more than one step apart on
    /// either axis; the caller treats that as an invariant violation, since
    /// neighbor generation only ever produces adjacent cells.
    pub fn step(&self, from: Point, to: Point) -> Option<i32> {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        if dx > 1 || dy > 1 {
            return None;
        }
        if dx == 1 && dy == 1 {
            Some(self.diagonal)
        } else {
            Some(self.orthogonal)
        }
    }
}
