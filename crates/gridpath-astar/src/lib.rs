//! **gridpath-astar** — A* shortest-path search over boolean occupancy grids.
//!
//! The central type is [`Pathfinder`], which owns an occupancy
//! [`Grid`](gridpath_core::Grid) and a [`Costs`] configuration and answers
//! path queries between two [`Point`](gridpath_core::Point)s:
//!
//! ```
//! use gridpath_astar::Pathfinder;
//! use gridpath_core::{Grid, Point};
//!
//! let mut grid = Grid::open(10, 10)?;
//! grid.set_blocked(1, 0, true)?;
//! let pf = Pathfinder::new(grid);
//! let path = pf.find_path(Point::new(0, 0), Point::new(5, 0));
//! assert!(path.is_some());
//! # Ok::<(), gridpath_core::GridError>(())
//! ```
//!
//! Searches are synchronous and single-threaded; all per-search state lives
//! in a call-local arena and is dropped when `find_path` returns. Two
//! termination variants are available via [`SearchMode`]: the historical
//! early-exit behavior (default) and canonical A* termination.

mod costs;
mod distance;
mod node;
mod pathfinder;

pub use costs::Costs;
pub use distance::{chebyshev, manhattan};
pub use pathfinder::{Pathfinder, SearchMode};
