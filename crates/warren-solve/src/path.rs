//! Path reconstruction from parent back-references.

use std::time::Instant;

use warren_core::{Maze, Point};

use crate::report::SearchResult;

/// Walk `parent` links from `end` back to `start`, returning the sequence
/// in start-to-end order.
///
/// The chain must terminate, within the cell count, at a parent-less cell
/// that is `start` itself. Anything else (premature termination, a cycle,
/// a link leaving the grid) is a broken chain and yields `None` — an
/// internal invariant violation, not a recoverable condition.
pub(crate) fn reconstruct_path(maze: &Maze, start: Point, end: Point) -> Option<Vec<Point>> {
    let mut path = Vec::new();
    let mut current = end;
    for _ in 0..=maze.len() {
        let cell = maze.get(current)?;
        path.push(current);
        match cell.parent {
            Some(prev) => current = prev,
            None => {
                if current != start {
                    return None;
                }
                path.reverse();
                return Some(path);
            }
        }
    }
    // Exceeded the cell count without reaching a parent-less cell: cycle.
    None
}

/// Set the path visualization flag on every cell of `path`.
pub(crate) fn mark_path(maze: &mut Maze, path: &[Point]) {
    for &p in path {
        maze[p].on_path = true;
    }
}

/// Wrap up a run whose frontier reached `end`: reconstruct, flag the path
/// cells, and build the result. A broken parent chain fails the run
/// rather than crashing or returning a wrong path.
pub(crate) fn finish(
    maze: &mut Maze,
    start: Point,
    end: Point,
    visited: Vec<Point>,
    started: Instant,
) -> SearchResult {
    match reconstruct_path(maze, start, end) {
        Some(path) => {
            mark_path(maze, &path);
            SearchResult::solved(path, visited, started)
        }
        None => {
            log::error!("broken parent chain reconstructing {start} -> {end}");
            SearchResult::unsolved(visited, started)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_chain_back_to_start() {
        let mut maze = Maze::new(4, 1);
        maze[Point::new(1, 0)].parent = Some(Point::new(0, 0));
        maze[Point::new(2, 0)].parent = Some(Point::new(1, 0));
        maze[Point::new(3, 0)].parent = Some(Point::new(2, 0));
        let path = reconstruct_path(&maze, Point::new(0, 0), Point::new(3, 0)).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
            ]
        );
    }

    #[test]
    fn start_equals_end_is_trivial() {
        let maze = Maze::new(3, 3);
        let p = Point::new(1, 1);
        assert_eq!(reconstruct_path(&maze, p, p), Some(vec![p]));
    }

    #[test]
    fn chain_not_reaching_start_is_broken() {
        let mut maze = Maze::new(4, 1);
        // Chain ends at (1, 0), which is not the start.
        maze[Point::new(2, 0)].parent = Some(Point::new(1, 0));
        assert_eq!(
            reconstruct_path(&maze, Point::new(0, 0), Point::new(2, 0)),
            None
        );
    }

    #[test]
    fn cyclic_chain_is_broken() {
        let mut maze = Maze::new(3, 1);
        maze[Point::new(1, 0)].parent = Some(Point::new(2, 0));
        maze[Point::new(2, 0)].parent = Some(Point::new(1, 0));
        assert_eq!(
            reconstruct_path(&maze, Point::new(0, 0), Point::new(2, 0)),
            None
        );
    }
}
