//! Pathfinding algorithms over a [`warren_core::Maze`].
//!
//! Five searches sharing one neighbor/heuristic/reconstruction substrate,
//! each with its own frontier discipline:
//!
//! | Algorithm | Frontier | Tie-break | Optimal |
//! |---|---|---|---|
//! | [`Solver::astar`] | binary heap by `f` | lower `h` | yes |
//! | [`Solver::dijkstra`] | unsettled scan by `distance` | scan order | yes |
//! | [`Solver::bfs`] | FIFO queue | enqueue order | yes (unweighted) |
//! | [`Solver::dfs`] | LIFO stack | shuffled neighbors | no |
//! | [`Solver::bidirectional`] | two FIFO queues | alternation | yes (unweighted) |
//!
//! All searches run through [`Solver`], which owns reusable scratch
//! buffers so repeated queries allocate little after warm-up. A run never
//! panics and never returns `Err`: exhausting the frontier, or detecting a
//! broken parent chain during reconstruction, yields a [`SearchResult`]
//! with `success = false`.
//!
//! Progress reporting is a synchronous callback per processed cell (the
//! [`Progress`] trait); pacing between callbacks is the host's concern,
//! so batch runs simply pass [`discard`].

mod astar;
mod bfs;
mod bidirectional;
mod dfs;
mod dijkstra;
mod distance;
mod neighbors;
mod path;
mod report;
mod solver;

pub use distance::manhattan;
pub use neighbors::neighbors;
pub use report::{Progress, SearchResult, discard};
pub use solver::Solver;
