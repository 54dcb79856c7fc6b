use std::collections::VecDeque;
use std::time::Instant;

use warren_core::{Maze, Point};

use crate::neighbors::neighbors;
use crate::path::finish;
use crate::report::{Progress, SearchResult};
use crate::solver::{Solver, process};

impl Solver {
    /// Breadth-first search from `start` to `end`.
    ///
    /// First-enqueued-first-expanded; each cell is enqueued at most once.
    /// Optimal on the unweighted grid and complete. Assumes
    /// [`Maze::reset_search_state`] ran beforehand.
    pub fn bfs(
        &mut self,
        maze: &mut Maze,
        start: Point,
        end: Point,
        progress: &mut impl Progress,
    ) -> SearchResult {
        let started = Instant::now();
        self.reset_scratch(maze.len());
        let mut visited: Vec<Point> = Vec::new();

        let (Some(si), Some(_)) = (maze.idx(start), maze.idx(end)) else {
            return SearchResult::unsolved(visited, started);
        };
        self.open[si] = true;
        let mut queue: VecDeque<Point> = VecDeque::new();
        queue.push_back(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(cp) = queue.pop_front() else {
                break false;
            };
            if cp == end {
                break true;
            }
            process(maze, cp, &mut visited, progress);

            nbuf.clear();
            neighbors(maze, cp, &mut nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = maze.idx(np) else {
                    continue;
                };
                if self.open[ni] {
                    continue;
                }
                self.open[ni] = true;
                maze[np].parent = Some(cp);
                queue.push_back(np);
            }
        };

        self.nbuf = nbuf;
        if !found {
            return SearchResult::unsolved(visited, started);
        }
        finish(maze, start, end, visited, started)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::discard;

    #[test]
    fn open_grid_path_is_manhattan_optimal() {
        let mut maze = Maze::new(5, 5);
        let mut solver = Solver::new();
        let r = solver.bfs(&mut maze, Point::new(1, 1), Point::new(3, 3), &mut discard);
        assert!(r.success);
        assert_eq!(r.path_length, 4);
        assert!(r.visited.len() >= r.path_length + 1);
    }

    #[test]
    fn walled_row_is_unsolvable() {
        let mut maze = Maze::new(5, 1);
        maze.toggle_wall(Point::new(2, 0));
        let mut solver = Solver::new();
        let r = solver.bfs(&mut maze, Point::new(0, 0), Point::new(4, 0), &mut discard);
        assert!(!r.success);
        assert!(r.path.is_empty());
    }

    #[test]
    fn start_equals_end() {
        let mut maze = Maze::new(3, 3);
        let p = Point::new(1, 1);
        let mut solver = Solver::new();
        let r = solver.bfs(&mut maze, p, p, &mut discard);
        assert!(r.success);
        assert_eq!(r.path, vec![p]);
        assert_eq!(r.path_length, 0);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let mut maze = Maze::new(8, 8);
        maze.toggle_wall(Point::new(4, 1));
        maze.toggle_wall(Point::new(4, 2));
        let mut solver = Solver::new();
        let a = solver.bfs(&mut maze, Point::new(1, 1), Point::new(6, 2), &mut discard);
        maze.reset_search_state();
        let b = solver.bfs(&mut maze, Point::new(1, 1), Point::new(6, 2), &mut discard);
        assert_eq!(a.path, b.path);
        assert_eq!(a.visited, b.visited);
        assert_eq!(a.nodes_explored, b.nodes_explored);
    }

    #[test]
    fn detour_around_wall_block() {
        let mut maze = Maze::new(5, 3);
        // Vertical wall at x=2 with a gap at the bottom row.
        maze.toggle_wall(Point::new(2, 0));
        maze.toggle_wall(Point::new(2, 1));
        let mut solver = Solver::new();
        let r = solver.bfs(&mut maze, Point::new(0, 0), Point::new(4, 0), &mut discard);
        assert!(r.success);
        // Down to the gap and back up: 4 + 2 * 2.
        assert_eq!(r.path_length, 8);
    }
}
