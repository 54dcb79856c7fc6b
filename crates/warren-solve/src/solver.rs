use warren_core::{Maze, Point};

use crate::report::Progress;

/// Central coordinator for pathfinding runs.
///
/// Owns the scratch buffers the algorithms need (neighbor buffer,
/// closed/open flags, the bidirectional seen-sets and backward-parent
/// map), resized per run and reused across runs. Per-cell search state
/// (costs, distance, forward parents) lives in the [`Maze`] itself and
/// must be cleared with [`Maze::reset_search_state`] before every run.
///
/// A `Solver` assumes exclusive ownership of the maze for the duration of
/// a run; the `&mut` receivers enforce the single-writer rule.
#[derive(Default)]
pub struct Solver {
    /// Shared scratch buffer for neighbor queries.
    pub(crate) nbuf: Vec<Point>,
    /// Settled/visited flags (A* closed set, Dijkstra settled set, DFS
    /// visited set).
    pub(crate) closed: Vec<bool>,
    /// Membership flags for the pending frontier (A* open set, BFS
    /// enqueued set).
    pub(crate) open: Vec<bool>,
    /// Cells seen by the forward bidirectional frontier.
    pub(crate) seen_fwd: Vec<bool>,
    /// Cells seen by the backward bidirectional frontier.
    pub(crate) seen_bwd: Vec<bool>,
    /// Backward-adoption parents, stored unconditionally at enqueue so the
    /// backward path leg reconstructs exactly.
    pub(crate) parent_bwd: Vec<Option<Point>>,
}

impl Solver {
    /// Create a solver with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear and resize every scratch buffer for a grid of `len` cells.
    pub(crate) fn reset_scratch(&mut self, len: usize) {
        self.nbuf.clear();
        self.closed.clear();
        self.closed.resize(len, false);
        self.open.clear();
        self.open.resize(len, false);
        self.seen_fwd.clear();
        self.seen_fwd.resize(len, false);
        self.seen_bwd.clear();
        self.seen_bwd.resize(len, false);
        self.parent_bwd.clear();
        self.parent_bwd.resize(len, None);
    }
}

/// Mark `p` as processed: set its visualization flags, record it in the
/// visited list, and emit it to the progress sink.
pub(crate) fn process(
    maze: &mut Maze,
    p: Point,
    visited: &mut Vec<Point>,
    progress: &mut impl Progress,
) {
    {
        let cell = &mut maze[p];
        cell.exploring = true;
        cell.visited = true;
    }
    visited.push(p);
    progress.visit(&maze[p]);
}
