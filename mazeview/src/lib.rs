//! Mazeview — terminal maze pathfinding visualizer built on warren.
//!
//! The library half holds everything the binary drives: the dispatch
//! boundary (kind enums with parsing), the session flow (generate,
//! repair, solve, compare), and ASCII rendering of grid state.

pub mod kind;
pub mod render;
pub mod session;

pub use kind::{AlgorithmInfo, AlgorithmKind, GeneratorKind, ParseKindError};
pub use session::{SolveError, compare_all, generate, solve};
