//! Result aggregation and the progress callback contract.

use std::time::{Duration, Instant};

use warren_core::{Cell, Point};

/// Outcome of one pathfinding run. Created fresh per run, owned by the
/// caller, never mutated afterward.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Start-to-end cell sequence, both endpoints included. Empty when no
    /// solution was found.
    pub path: Vec<Point>,
    /// Cells dequeued and processed during the run, in processing order.
    pub visited: Vec<Point>,
    /// Wall-clock span of the whole call, including any time spent inside
    /// progress callbacks. Batch runs therefore time pure algorithmic
    /// cost; paced runs include the host's delays.
    pub execution_time: Duration,
    /// Edge count of the path (`path.len() - 1`), 0 on failure.
    pub path_length: usize,
    /// Number of cells dequeued and processed.
    pub nodes_explored: usize,
    pub success: bool,
}

impl SearchResult {
    pub(crate) fn solved(path: Vec<Point>, visited: Vec<Point>, started: Instant) -> Self {
        Self {
            path_length: path.len().saturating_sub(1),
            nodes_explored: visited.len(),
            execution_time: started.elapsed(),
            path,
            visited,
            success: true,
        }
    }

    pub(crate) fn unsolved(visited: Vec<Point>, started: Instant) -> Self {
        Self {
            path: Vec::new(),
            path_length: 0,
            nodes_explored: visited.len(),
            execution_time: started.elapsed(),
            visited,
            success: false,
        }
    }
}

/// Per-step progress sink: called once with each processed cell, in
/// processing order. The engine ignores any state the sink keeps; a host
/// that wants paced animation sleeps inside its sink.
pub trait Progress {
    fn visit(&mut self, cell: &Cell);
}

impl<F: FnMut(&Cell)> Progress for F {
    fn visit(&mut self, cell: &Cell) {
        self(cell)
    }
}

/// A sink that ignores all progress events (batch mode). Pass as
/// `&mut discard`.
pub fn discard(_: &Cell) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_counts_edges() {
        let path = vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        let visited = vec![Point::new(0, 0), Point::new(1, 0)];
        let r = SearchResult::solved(path, visited, Instant::now());
        assert!(r.success);
        assert_eq!(r.path_length, 2);
        assert_eq!(r.nodes_explored, 2);
    }

    #[test]
    fn unsolved_is_empty() {
        let r = SearchResult::unsolved(vec![Point::new(0, 0)], Instant::now());
        assert!(!r.success);
        assert!(r.path.is_empty());
        assert_eq!(r.path_length, 0);
        assert_eq!(r.nodes_explored, 1);
    }

    #[test]
    fn closures_are_progress_sinks() {
        let mut seen = 0;
        let mut sink = |_: &Cell| seen += 1;
        sink.visit(&Cell::new(Point::ZERO));
        sink.visit(&Cell::new(Point::ZERO));
        drop(sink);
        assert_eq!(seen, 2);
    }

    #[test]
    fn discard_is_a_progress_sink() {
        let mut sink = discard;
        sink.visit(&Cell::new(Point::ZERO));
    }
}
