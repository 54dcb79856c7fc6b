use std::collections::BinaryHeap;
use std::time::Instant;

use warren_core::{Maze, Point};

use crate::distance::manhattan;
use crate::neighbors::neighbors;
use crate::path::finish;
use crate::report::{Progress, SearchResult};
use crate::solver::{Solver, process};

/// Open-list entry, ordered so the heap pops the lowest `f` first, ties
/// broken by lower `h`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenRef {
    pos: Point,
    f: i32,
    h: i32,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then smallest h.
        other.f.cmp(&self.f).then(other.h.cmp(&self.h))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Solver {
    /// A* search from `start` to `end` with the Manhattan heuristic.
    ///
    /// Optimal and complete on the 4-connected unweighted grid. Stale heap
    /// entries are skipped lazily via the closed flags. Assumes
    /// [`Maze::reset_search_state`] ran beforehand.
    pub fn astar(
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

        {
            let h = manhattan(start, end);
            let cell = &mut maze[start];
            cell.g = 0;
            cell.h = h;
            cell.f = h;
        }
        let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
        open.push(OpenRef {
            pos: start,
            f: maze[start].f,
            h: maze[start].h,
        });
        self.open[si] = true;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(current) = open.pop() else {
                break false;
            };
            let Some(ci) = maze.idx(current.pos) else {
                continue;
            };
            if self.closed[ci] {
                continue;
            }
            if current.pos == end {
                break true;
            }
            self.closed[ci] = true;
            process(maze, current.pos, &mut visited, progress);

            let current_g = maze[current.pos].g;
            nbuf.clear();
            neighbors(maze, current.pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = maze.idx(np) else {
                    continue;
                };
                if self.closed[ni] {
                    continue;
                }
                let tentative = current_g + 1;
                if self.open[ni] && tentative >= maze[np].g {
                    continue;
                }
                self.open[ni] = true;

                let h = manhattan(np, end);
                let cell = &mut maze[np];
                cell.parent = Some(current.pos);
                cell.g = tentative;
                cell.h = h;
                cell.f = tentative + h;
                open.push(OpenRef {
                    pos: np,
                    f: tentative + h,
                    h,
                });
            }
        };

        self.nbuf = nbuf;
        if !found {
            return SearchResult::unsolved(visited, started);
        }
        finish(maze, start, end, visited, started)
    }
}
