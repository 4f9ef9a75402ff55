//! The [`Pathfinder`]: A* search over an occupancy grid.

use std::collections::BinaryHeap;

use log::{debug, trace};

use gridpath_core::{Grid, GridError, Point};

use crate::costs::Costs;
use crate::distance::manhattan;
use crate::node::{FrontierEntry, Node};

/// How a search terminates once the target is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMode {
    /// Return as soon as a neighbor expansion touches the target.
    ///
    /// This is the historical behavior. It is fast but does not guarantee
    /// a lowest-cost path: the target is accepted the moment it is
    /// discovered, not when it would be popped as the cheapest frontier
    /// node.
    #[default]
    EarlyExit,
    /// Canonical A* termination: the target is only accepted when it is
    /// removed from the frontier as the minimum-`f` node.
    Strict,
}

/// Grid-based A* shortest-path search.
///
/// A `Pathfinder` owns a boolean occupancy [`Grid`] (`true` = blocked) and a
/// [`Costs`] configuration, and answers [`find_path`](Self::find_path)
/// queries against them. All per-search state is local to one call: nodes
/// are allocated in an arena, referenced by index from a coordinate-keyed
/// registry and an `(f, seq)`-ordered frontier, and dropped when the call
/// returns.
///
/// The heuristic is the unscaled Manhattan distance, which underestimates
/// relative to the default 10/14 step costs. That mirrors the original
/// design and is kept as-is; see [`SearchMode`] for the termination
/// variants.
#[derive(Debug, Clone)]
pub struct Pathfinder {
    grid: Grid,
    costs: Costs,
    mode: SearchMode,
}

impl Default for Pathfinder {
    /// A pathfinder over a fully passable 10x10 grid with default costs.
    fn default() -> Self {
        Self::new(Grid::default())
    }
}

impl Pathfinder {
    /// Create a pathfinder over `grid` with default costs and mode.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            costs: Costs::default(),
            mode: SearchMode::default(),
        }
    }

    /// Create a pathfinder with explicit movement costs.
    pub fn with_costs(grid: Grid, costs: Costs) -> Self {
        Self {
            grid,
            costs,
            mode: SearchMode::default(),
        }
    }

    /// The current occupancy grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current cost configuration.
    pub fn costs(&self) -> Costs {
        self.costs
    }

    /// The current termination mode.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Replace the movement costs used by subsequent searches.
    pub fn set_costs(&mut self, costs: Costs) {
        self.costs = costs;
    }

    /// Replace the termination mode used by subsequent searches.
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    /// Replace the occupancy grid; width and height follow the new grid.
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Set the blocked flag of a single cell of the current grid.
    pub fn set_blocked(&mut self, x: i32, y: i32, flag: bool) -> Result<(), GridError> {
        self.grid.set_blocked(x, y, flag)
    }

    /// Flat registry index of an in-bounds point (`y * width + x`).
    #[inline]
    fn cell_index(&self, p: Point) -> usize {
        (p.y * self.grid.width() + p.x) as usize
    }

    /// Search for a path from `start` to `target`.
    ///
    /// Returns the full ordered path including both endpoints, or `None`
    /// when no path exists. `None` is also returned when the target cell is
    /// blocked, and when `start == target` (the degenerate query is by
    /// design not a zero-length success). Neither of those early returns
    /// allocates any search state.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `target` lies outside the grid; out-of-bounds
    /// endpoints are a contract violation, not a "no path" outcome.
    pub fn find_path(&self, start: Point, target: Point) -> Option<Vec<Point>> {
        assert!(
            self.grid.contains(start),
            "find_path: start {start} out of bounds"
        );
        assert!(
            self.grid.contains(target),
            "find_path: target {target} out of bounds"
        );

        if start == target {
            return None;
        }
        if self.grid.blocked(target) {
            return None;
        }

        // Per-call search state. The arena owns every node; the registry
        // maps each coordinate to the arena index of its best-known node.
        let mut arena: Vec<Node> = Vec::new();
        let mut registry: Vec<Option<usize>> = vec![None; self.grid.len()];
        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut seq: u32 = 0;

        let h = manhattan(start, target);
        arena.push(Node {
            pos: start,
            parent: None,
            g: 0,
            h,
            f: h,
        });
        registry[self.cell_index(start)] = Some(0);
        frontier.push(FrontierEntry { f: h, seq, idx: 0 });
        seq += 1;

        while let Some(entry) = frontier.pop() {
            let ci = entry.idx;
            let cpos = arena[ci].pos;

            // Stale entry: the registry moved on to a better node for this
            // coordinate since the entry was queued.
            if registry[self.cell_index(cpos)] != Some(ci) {
                continue;
            }

            if self.mode == SearchMode::Strict && cpos == target {
                let path = self.reconstruct(&arena, &registry, start, ci);
                debug!("path found from {start} to {target}: {} cells", path.len());
                return Some(path);
            }

            let cg = arena[ci].g;

            for dy in -1..=1 {
                for dx in -1..=1 {
                    let search = cpos.shift(dx, dy);
                    if !self.grid.contains(search) {
                        continue;
                    }
                    if search == cpos {
                        continue;
                    }
                    if self.grid.blocked(search) {
                        continue;
                    }

                    let Some(step) = self.costs.step(cpos, search) else {
                        unreachable!("non-adjacent candidate {search} from {cpos}");
                    };
                    let g = cg + step;
                    let h = manhattan(search, target);
                    let f = g + h;
                    let si = self.cell_index(search);

                    match registry[si] {
                        Some(existing) if f < arena[existing].f => {
                            // Strictly better route to a known cell: the new
                            // node supersedes it and the old frontier entry
                            // goes stale.
                            trace!(
                                "better route to {search}: f {} -> {f} (g {g}, h {h})",
                                arena[existing].f
                            );
                            let idx = arena.len();
                            arena.push(Node {
                                pos: search,
                                parent: Some(ci),
                                g,
                                h,
                                f,
                            });
                            registry[si] = Some(idx);
                            frontier.push(FrontierEntry { f, seq, idx });
                            seq += 1;
                        }
                        Some(_) => {}
                        None => {
                            let idx = arena.len();
                            arena.push(Node {
                                pos: search,
                                parent: Some(ci),
                                g,
                                h,
                                f,
                            });
                            registry[si] = Some(idx);
                            frontier.push(FrontierEntry { f, seq, idx });
                            seq += 1;
                        }
                    }

                    if self.mode == SearchMode::EarlyExit && search == target {
                        // The registry holds a node for the target by now,
                        // either the one just inserted or an earlier one.
                        if let Some(ti) = registry[si] {
                            let path = self.reconstruct(&arena, &registry, start, ti);
                            debug!(
                                "path found from {start} to {target}: {} cells",
                                path.len()
                            );
                            return Some(path);
                        }
                    }
                }
            }
        }

        debug!("no path from {start} to {target}");
        None
    }

    /// Walk parent links from the target's node back to the start.
    ///
    /// Each step resolves the parent through the registry's current node at
    /// the parent's coordinate rather than the recorded link itself, and the
    /// start coordinate is appended explicitly once a parentless node is
    /// reached.
    fn reconstruct(
        &self,
        arena: &[Node],
        registry: &[Option<usize>],
        start: Point,
        target_idx: usize,
    ) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = target_idx;
        while let Some(pi) = arena[ci].parent {
            path.push(arena[ci].pos);
            let Some(next) = registry[self.cell_index(arena[pi].pos)] else {
                break;
            };
            ci = next;
        }
        path.push(start);
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::chebyshev;

    fn open(w: i32, h: i32) -> Grid {
        Grid::open(w, h).unwrap()
    }

    fn assert_valid_path(path: &[Point], grid: &Grid, start: Point, target: Point) {
        assert_eq!(path.first(), Some(&start), "path must begin at start");
        assert_eq!(path.last(), Some(&target), "path must end at target");
        for w in path.windows(2) {
            assert!(w[0].adjacent(w[1]), "{} -> {} is not a grid step", w[0], w[1]);
        }
        for &p in path {
            assert!(!grid.blocked(p), "path passes through blocked {p}");
        }
    }

    #[test]
    fn same_cell_is_no_path() {
        let pf = Pathfinder::default();
        assert_eq!(pf.find_path(Point::new(4, 4), Point::new(4, 4)), None);
    }

    #[test]
    fn blocked_target_is_no_path() {
        let mut pf = Pathfinder::default();
        pf.set_blocked(3, 3, true).unwrap();
        assert_eq!(pf.find_path(Point::ZERO, Point::new(3, 3)), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_bounds_target_panics() {
        let pf = Pathfinder::default();
        pf.find_path(Point::ZERO, Point::new(10, 10));
    }

    #[test]
    fn diagonal_path_on_open_grid() {
        let pf = Pathfinder::default();
        let path = pf.find_path(Point::ZERO, Point::new(3, 3)).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(3, 3)
            ]
        );
    }

    #[test]
    fn open_grid_path_length_is_chebyshev() {
        let pf = Pathfinder::new(open(10, 10));
        let cases = [
            (Point::new(0, 0), Point::new(7, 2)),
            (Point::new(2, 3), Point::new(8, 8)),
            (Point::new(5, 5), Point::new(0, 9)),
            (Point::new(9, 0), Point::new(0, 0)),
        ];
        for (start, target) in cases {
            let path = pf.find_path(start, target).unwrap();
            assert_valid_path(&path, pf.grid(), start, target);
            assert_eq!(
                path.len() as i32 - 1,
                chebyshev(start, target),
                "{start} -> {target}"
            );
        }
    }

    #[test]
    fn wall_gap_forces_detour() {
        let mut grid = open(10, 10);
        for x in 0..9 {
            grid.set_blocked(x, 5, true).unwrap();
        }
        let pf = Pathfinder::new(grid);
        let (start, target) = (Point::ZERO, Point::new(9, 9));
        let path = pf.find_path(start, target).unwrap();
        assert_valid_path(&path, pf.grid(), start, target);
        assert!(
            path.contains(&Point::new(9, 5)),
            "path must use the only gap in the wall: {path:?}"
        );
    }

    #[test]
    fn walled_off_start_is_no_path() {
        let mut grid = open(10, 10);
        grid.set_blocked(1, 0, true).unwrap();
        grid.set_blocked(0, 1, true).unwrap();
        grid.set_blocked(1, 1, true).unwrap();
        let pf = Pathfinder::new(grid);
        assert_eq!(pf.find_path(Point::ZERO, Point::new(5, 5)), None);
    }

    #[test]
    fn identical_queries_are_deterministic() {
        let mut grid = open(12, 12);
        for (x, y) in [(4, 2), (4, 3), (4, 4), (5, 4), (6, 4), (2, 7), (3, 7)] {
            grid.set_blocked(x, y, true).unwrap();
        }
        let pf = Pathfinder::new(grid);
        let (start, target) = (Point::new(1, 1), Point::new(10, 9));
        let first = pf.find_path(start, target).unwrap();
        let second = pf.find_path(start, target).unwrap();
        assert_valid_path(&first, pf.grid(), start, target);
        assert_eq!(first, second);
    }

    #[test]
    fn strict_mode_agrees_on_open_diagonal() {
        let mut pf = Pathfinder::default();
        pf.set_mode(SearchMode::Strict);
        let path = pf.find_path(Point::ZERO, Point::new(3, 3)).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(3, 3)
            ]
        );
    }

    #[test]
    fn early_exit_may_keep_an_expensive_last_step() {
        // With diagonals priced far above orthogonal steps, the cheapest
        // (0,0) -> (3,3) route is six orthogonal steps. Early exit accepts
        // the target on first contact, which arrives via a diagonal.
        let costs = Costs::new(10, 100);
        let mut pf = Pathfinder::with_costs(open(10, 10), costs);
        let (start, target) = (Point::ZERO, Point::new(3, 3));

        let early = pf.find_path(start, target).unwrap();
        assert_valid_path(&early, pf.grid(), start, target);
        assert_eq!(early.len(), 6);

        pf.set_mode(SearchMode::Strict);
        let strict = pf.find_path(start, target).unwrap();
        assert_valid_path(&strict, pf.grid(), start, target);
        assert_eq!(strict.len(), 7);
        for w in strict.windows(2) {
            let d = w[1] - w[0];
            assert!(
                d.x == 0 || d.y == 0,
                "strict path should avoid expensive diagonals: {strict:?}"
            );
        }
    }

    #[test]
    fn set_grid_replaces_dimensions() {
        let mut pf = Pathfinder::default();
        pf.set_grid(open(5, 3));
        assert_eq!(pf.grid().width(), 5);
        assert_eq!(pf.grid().height(), 3);
        let path = pf.find_path(Point::ZERO, Point::new(4, 2)).unwrap();
        assert_valid_path(&path, pf.grid(), Point::ZERO, Point::new(4, 2));
    }

    #[test]
    fn set_blocked_out_of_bounds_is_an_error() {
        let mut pf = Pathfinder::default();
        assert!(pf.set_blocked(10, 0, true).is_err());
        assert!(pf.set_blocked(0, -1, true).is_err());
    }

    #[test]
    fn toggling_a_cell_reroutes() {
        let mut pf = Pathfinder::new(open(5, 5));
        let (start, target) = (Point::ZERO, Point::new(4, 0));
        let direct = pf.find_path(start, target).unwrap();
        assert_eq!(direct.len(), 5);

        pf.set_blocked(2, 0, true).unwrap();
        let detour = pf.find_path(start, target).unwrap();
        assert_valid_path(&detour, pf.grid(), start, target);
        assert!(!detour.contains(&Point::new(2, 0)));

        pf.set_blocked(2, 0, false).unwrap();
        let again = pf.find_path(start, target).unwrap();
        assert_eq!(again.len(), 5);
    }
}
