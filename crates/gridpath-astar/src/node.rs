//! Search-internal node storage.
//!
//! All nodes discovered during one `find_path` call live in a single arena
//! (`Vec<Node>`) that is dropped when the call returns. Parent links and
//! registry entries are arena indices, never owning references.

use gridpath_core::Point;

/// One discovered grid cell during a single search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub(crate) pos: Point,
    /// Arena index of the node that discovered this one; `None` for start.
    pub(crate) parent: Option<usize>,
    /// Accumulated movement cost from the start.
    pub(crate) g: i32,
    /// Heuristic estimate of the remaining cost to the target.
    pub(crate) h: i32,
    /// Total priority, `g + h`.
    pub(crate) f: i32,
}

/// Frontier entry referencing a node in the arena.
///
/// Ordered by ascending `f`, ties broken by ascending insertion sequence
/// number, so expansion order is deterministic.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct FrontierEntry {
    pub(crate) f: i32,
    pub(crate) seq: u32,
    pub(crate) idx: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops lowest f first, and among
        // equal f the earliest-inserted entry.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
