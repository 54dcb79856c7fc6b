//! Maze generation over a [`Maze`] grid.
//!
//! Three spanning-tree carvers plus a random-wall fallback:
//!
//! - **Recursive backtracking** ([`MazeGen::recursive_backtracker`]) —
//!   randomized depth-first carving, perfect maze.
//! - **Prim** ([`MazeGen::prim`]) — randomized frontier growth from the
//!   grid center.
//! - **Kruskal** ([`MazeGen::kruskal`]) — shuffled edge list over a
//!   union-find arena, perfect maze.
//! - **Random walls** ([`MazeGen::random_walls`]) — independent Bernoulli
//!   walls, no connectivity guarantee.
//!
//! All randomness flows through the generator's own [`Rng`], so seeded
//! runs are reproducible. Generators assume dimensions of at least 3;
//! smaller grids are not guarded. [`ensure_accessible`] is the
//! post-generation repair step that clears the start/end neighborhoods
//! regardless of what the carver produced.

mod backtracker;
mod kruskal;
mod prim;
mod unionfind;

pub use unionfind::UnionFind;

use rand::{Rng, RngExt};
use warren_core::{Maze, Point};

/// Maze generator: owns the RNG that drives every random choice.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator around the given RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Independently turn each non-start/non-end cell into a wall with
    /// probability `density`. Used for the "empty" generation mode; makes
    /// no connectivity promise.
    pub fn random_walls(&mut self, maze: &mut Maze, density: f64) {
        let mut placed = 0usize;
        for p in maze.points() {
            if maze[p].start || maze[p].end {
                continue;
            }
            let r: f64 = self.rng.random();
            if r < density {
                maze[p].wall = true;
                placed += 1;
            }
        }
        log::debug!("random_walls: placed {placed} walls at density {density}");
    }
}

/// Force the start/end cells and their full 3×3 neighborhoods open, so a
/// solve has a chance to connect them regardless of generator output.
pub fn ensure_accessible(maze: &mut Maze, start: Point, end: Point) {
    clear_around(maze, start);
    clear_around(maze, end);
}

fn clear_around(maze: &mut Maze, center: Point) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if let Some(cell) = maze.get_mut(center.shift(dx, dy)) {
                cell.wall = false;
            }
        }
    }
}

/// Offsets to the four passage cells two steps away (down, right, up, left).
pub(crate) const LATTICE_DIRS: [Point; 4] = [
    Point::new(0, 2),
    Point::new(2, 0),
    Point::new(0, -2),
    Point::new(-2, 0),
];

/// Coerce a dimension to odd by decrementing an even value, preserving the
/// cell-and-wall lattice the carvers rely on.
pub(crate) fn coerce_odd(n: i32) -> i32 {
    if n % 2 == 0 { n - 1 } else { n }
}

/// Whether `p` lies strictly inside the border ring. Carvers never touch
/// the outermost row/column, which stays wall.
pub(crate) fn interior(maze: &Maze, p: Point) -> bool {
    p.x > 0 && p.x < maze.width() - 1 && p.y > 0 && p.y < maze.height() - 1
}
