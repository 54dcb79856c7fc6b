use std::time::Instant;

use warren_core::{Maze, Point, UNREACHABLE};

use crate::neighbors::neighbors;
use crate::path::finish;
use crate::report::{Progress, SearchResult};
use crate::solver::{Solver, process};

impl Solver {
    /// Dijkstra's algorithm from `start` to `end`.
    ///
    /// Keeps the unsettled passage cells implicit and picks the minimum
    /// `distance` by a row-major linear scan each iteration, so ties
    /// settle in scan order. A settled cell is never revisited. Optimal
    /// and complete. Assumes [`Maze::reset_search_state`] ran beforehand.
    pub fn dijkstra(
        &mut self,
        maze: &mut Maze,
        start: Point,
        end: Point,
        progress: &mut impl Progress,
    ) -> SearchResult {
        let started = Instant::now();
        self.reset_scratch(maze.len());
        let mut visited: Vec<Point> = Vec::new();

        if maze.idx(start).is_none() || maze.idx(end).is_none() {
            return SearchResult::unsolved(visited, started);
        }
        maze[start].distance = 0;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            // Linear scan for the closest unsettled passage cell.
            let mut best: Option<(usize, Point, i32)> = None;
            for (i, cell) in maze.iter().enumerate() {
                if self.closed[i] || cell.wall {
                    continue;
                }
                if best.is_none_or(|(_, _, d)| cell.distance < d) {
                    best = Some((i, cell.pos, cell.distance));
                }
            }
            let Some((ci, cp, dist)) = best else {
                break false;
            };
            if dist == UNREACHABLE {
                // Remaining cells are cut off from the start.
                break false;
            }
            self.closed[ci] = true;
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
                if self.closed[ni] {
                    continue;
                }
                let alt = dist + 1;
                let cell = &mut maze[np];
                if alt < cell.distance {
                    cell.distance = alt;
                    cell.parent = Some(cp);
                }
            }
        };

        self.nbuf = nbuf;
        if !found {
            return SearchResult::unsolved(visited, started);
        }
        finish(maze, start, end, visited, started)
    }
}
