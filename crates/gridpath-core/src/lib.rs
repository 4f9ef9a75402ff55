//! **gridpath-core** — foundational types for grid-based pathfinding.
//!
//! This crate provides the value types shared across the *gridpath*
//! workspace: the [`Point`] coordinate and the boolean occupancy [`Grid`].

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{Grid, GridError};
