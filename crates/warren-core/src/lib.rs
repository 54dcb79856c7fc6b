//! Grid and cell model for maze generation and pathfinding.
//!
//! The [`Maze`] is a rectangular, row-major grid of [`Cell`] values. Each
//! cell carries its wall/start/end role flags plus the mutable search state
//! (costs, distance, parent back-reference) that the solver crates write
//! during a run. Cells never own each other: adjacency is computed from
//! coordinates, and the `parent` link used for path reconstruction is a
//! plain coordinate, so the maze remains the sole owner of its cells.

mod cell;
mod config;
mod geom;
mod maze;

pub use cell::{Cell, UNREACHABLE};
pub use config::MazeConfig;
pub use geom::Point;
pub use maze::Maze;
