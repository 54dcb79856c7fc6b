use std::time::Instant;

use rand::Rng;
use rand::seq::SliceRandom;
use warren_core::{Maze, Point};

use crate::neighbors::neighbors;
use crate::path::finish;
use crate::report::{Progress, SearchResult};
use crate::solver::{Solver, process};

impl Solver {
    /// Depth-first search from `start` to `end`.
    ///
    /// Neighbors are pushed in freshly shuffled order on every expansion
    /// (intentional non-determinism, which is why the caller supplies the
    /// RNG). A cell may sit on the stack several times; duplicates are
    /// skipped at pop. Complete but not optimal. Assumes
    /// [`Maze::reset_search_state`] ran beforehand.
    pub fn dfs(
        &mut self,
        maze: &mut Maze,
        start: Point,
        end: Point,
        rng: &mut impl Rng,
        progress: &mut impl Progress,
    ) -> SearchResult {
        let started = Instant::now();
        self.reset_scratch(maze.len());
        let mut visited: Vec<Point> = Vec::new();

        if maze.idx(start).is_none() || maze.idx(end).is_none() {
            return SearchResult::unsolved(visited, started);
        }
        let mut stack = vec![start];

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(cp) = stack.pop() else {
                break false;
            };
            let Some(ci) = maze.idx(cp) else {
                continue;
            };
            if self.closed[ci] {
                continue;
            }
            self.closed[ci] = true;
            if cp == end {
                break true;
            }
            process(maze, cp, &mut visited, progress);

            nbuf.clear();
            neighbors(maze, cp, &mut nbuf);
            nbuf.shuffle(rng);
            for &np in nbuf.iter() {
                let Some(ni) = maze.idx(np) else {
                    continue;
                };
                if !self.closed[ni] {
                    maze[np].parent = Some(cp);
                    stack.push(np);
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
