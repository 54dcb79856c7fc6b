use rand::{Rng, RngExt};
use warren_core::{Maze, Point};

use crate::{LATTICE_DIRS, MazeGen, interior};

impl<R: Rng> MazeGen<R> {
    /// Carve a maze by randomized Prim-style frontier growth.
    ///
    /// Growth starts from the grid center. The frontier holds wall cells
    /// two steps away from the carved region; one is removed uniformly at
    /// random per step and carved, together with the wall between, only if
    /// exactly one carved passage lies two cells away. Cells popped with
    /// more than one carved neighbor are discarded, which keeps the carved
    /// region loop-free but may leave parts of the lattice unreached.
    pub fn prim(&mut self, width: i32, height: i32) -> Maze {
        let mut maze = Maze::new(width, height);
        maze.fill_walls();

        let seed = Point::new(width / 2, height / 2);
        maze[seed].wall = false;
        let mut frontier: Vec<Point> = Vec::new();
        push_frontier(&maze, seed, &mut frontier);

        while !frontier.is_empty() {
            let i = self.rng.random_range(0..frontier.len());
            let cell = frontier.swap_remove(i);

            let mut passages = 0;
            let mut attach = None;
            for d in LATTICE_DIRS {
                if maze.get(cell + d).is_some_and(|c| c.passage()) {
                    passages += 1;
                    attach = Some(cell + d);
                }
            }
            if let (1, Some(n)) = (passages, attach) {
                let between = Point::new((cell.x + n.x) / 2, (cell.y + n.y) / 2);
                maze[cell].wall = false;
                maze[between].wall = false;
                push_frontier(&maze, cell, &mut frontier);
            }
        }

        log::debug!(
            "prim: {}x{} maze, {} passages",
            width,
            height,
            maze.passage_count()
        );
        maze
    }
}

/// Add the still-walled interior lattice neighbors of `cell` to the
/// frontier, without duplicates.
fn push_frontier(maze: &Maze, cell: Point, frontier: &mut Vec<Point>) {
    for d in LATTICE_DIRS {
        let next = cell + d;
        if interior(maze, next)
            && maze.get(next).is_some_and(|c| c.wall)
            && !frontier.contains(&next)
        {
            frontier.push(next);
        }
    }
}
