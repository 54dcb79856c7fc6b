use std::collections::VecDeque;
use std::time::Instant;

use warren_core::{Maze, Point, UNREACHABLE};

use crate::neighbors::neighbors;
use crate::path::{mark_path, reconstruct_path};
use crate::report::{Progress, SearchResult};
use crate::solver::{Solver, process};

impl Solver {
    /// Bidirectional breadth-first search between `start` and `end`.
    ///
    /// One forward step then one backward step per outer iteration. The
    /// forward side writes `parent` links pointing toward the start; the
    /// backward side records its adoption parents unconditionally in the
    /// solver's own map, so the backward leg of the path reconstructs
    /// exactly instead of best-effort. The run ends the instant either
    /// side dequeues a cell the other side has already seen (the meeting
    /// cell). Optimal on the unweighted grid and complete. Assumes
    /// [`Maze::reset_search_state`] ran beforehand.
    pub fn bidirectional(
        &mut self,
        maze: &mut Maze,
        start: Point,
        end: Point,
        progress: &mut impl Progress,
    ) -> SearchResult {
        let started = Instant::now();
        self.reset_scratch(maze.len());
        let mut visited: Vec<Point> = Vec::new();

        let (Some(si), Some(ei)) = (maze.idx(start), maze.idx(end)) else {
            return SearchResult::unsolved(visited, started);
        };
        self.seen_fwd[si] = true;
        self.seen_bwd[ei] = true;
        maze[start].distance = 0;
        maze[end].distance = 0;

        let mut fwd: VecDeque<Point> = VecDeque::from([start]);
        let mut bwd: VecDeque<Point> = VecDeque::from([end]);
        let mut meeting: Option<Point> = None;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        'search: while !fwd.is_empty() || !bwd.is_empty() {
            // Forward step.
            if let Some(cp) = fwd.pop_front() {
                let Some(ci) = maze.idx(cp) else {
                    break 'search;
                };
                if self.seen_bwd[ci] {
                    meeting = Some(cp);
                    break 'search;
                }
                process(maze, cp, &mut visited, progress);

                let dist = maze[cp].distance;
                nbuf.clear();
                neighbors(maze, cp, &mut nbuf);
                for &np in nbuf.iter() {
                    let Some(ni) = maze.idx(np) else {
                        continue;
                    };
                    if self.seen_fwd[ni] {
                        continue;
                    }
                    self.seen_fwd[ni] = true;
                    let cell = &mut maze[np];
                    cell.parent = Some(cp);
                    if cell.distance == UNREACHABLE {
                        cell.distance = dist + 1;
                    }
                    fwd.push_back(np);
                }
            }

            // Backward step.
            if let Some(cp) = bwd.pop_front() {
                let Some(ci) = maze.idx(cp) else {
                    break 'search;
                };
                if self.seen_fwd[ci] {
                    meeting = Some(cp);
                    break 'search;
                }
                process(maze, cp, &mut visited, progress);

                let dist = maze[cp].distance;
                nbuf.clear();
                neighbors(maze, cp, &mut nbuf);
                for &np in nbuf.iter() {
                    let Some(ni) = maze.idx(np) else {
                        continue;
                    };
                    if self.seen_bwd[ni] {
                        continue;
                    }
                    self.seen_bwd[ni] = true;
                    self.parent_bwd[ni] = Some(cp);
                    let cell = &mut maze[np];
                    if cell.distance == UNREACHABLE {
                        cell.distance = dist + 1;
                    }
                    bwd.push_back(np);
                }
            }
        }

        self.nbuf = nbuf;
        let Some(m) = meeting else {
            return SearchResult::unsolved(visited, started);
        };

        // Forward leg: start ..= meeting, via the maze's parent links.
        let Some(mut path) = reconstruct_path(maze, start, m) else {
            log::error!("broken forward parent chain reconstructing {start} -> {m}");
            return SearchResult::unsolved(visited, started);
        };

        // Backward leg: follow the adoption chain from the meeting cell to
        // the end. Every backward-seen cell except `end` has an entry, so a
        // missing link is an invariant violation, not a truncation.
        let mut cur = m;
        let mut steps = 0;
        while cur != end {
            let link = maze.idx(cur).and_then(|i| self.parent_bwd[i]);
            let Some(next) = link else {
                log::error!("broken backward parent chain reconstructing {m} -> {end}");
                return SearchResult::unsolved(visited, started);
            };
            path.push(next);
            cur = next;
            steps += 1;
            if steps > maze.len() {
                log::error!("backward parent chain cycled reconstructing {m} -> {end}");
                return SearchResult::unsolved(visited, started);
            }
        }

        mark_path(maze, &path);
        SearchResult::solved(path, visited, started)
    }
}
