use rand::Rng;
use rand::seq::SliceRandom;
use warren_core::{Maze, Point};

use crate::{MazeGen, UnionFind};

impl<R: Rng> MazeGen<R> {
    /// Carve a perfect maze with randomized Kruskal over a union-find.
    ///
    /// The odd-coordinate sublattice inside the border forms the initial
    /// passage cells, each its own set. Every right/down pair of lattice
    /// cells two apart contributes a candidate edge tagged with the wall
    /// cell between them. Edges are processed in a uniformly shuffled
    /// order; an edge whose endpoints were still disjoint opens its wall,
    /// one joining already-connected sets is skipped. Union-find
    /// correctness makes the result a spanning tree.
    pub fn kruskal(&mut self, width: i32, height: i32) -> Maze {
        let mut maze = Maze::new(width, height);
        maze.fill_walls();

        let cols = ((width - 1) / 2) as usize;
        let rows = ((height - 1) / 2) as usize;
        for iy in 0..rows {
            for ix in 0..cols {
                maze[lattice_point(ix, iy)].wall = false;
            }
        }

        let mut edges: Vec<(usize, usize, Point)> = Vec::new();
        for iy in 0..rows {
            for ix in 0..cols {
                let idx = iy * cols + ix;
                let p = lattice_point(ix, iy);
                if ix + 1 < cols {
                    edges.push((idx, idx + 1, p.shift(1, 0)));
                }
                if iy + 1 < rows {
                    edges.push((idx, idx + cols, p.shift(0, 1)));
                }
            }
        }
        edges.shuffle(&mut self.rng);

        let mut uf = UnionFind::new(cols * rows);
        for (a, b, wall) in edges {
            if uf.union(a, b) {
                maze[wall].wall = false;
            }
        }

        log::debug!(
            "kruskal: {}x{} maze, {} lattice cells, {} passages",
            width,
            height,
            cols * rows,
            maze.passage_count()
        );
        maze
    }
}

/// Grid position of the lattice cell with arena coordinates (ix, iy).
#[inline]
fn lattice_point(ix: usize, iy: usize) -> Point {
    Point::new(2 * ix as i32 + 1, 2 * iy as i32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{first_passage, flood_count, passage_edges};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_passage_is_reachable() {
        let mut carver = MazeGen::new(StdRng::seed_from_u64(1));
        let maze = carver.kruskal(21, 21);
        let total = maze.passage_count();
        assert!(total > 0);
        assert_eq!(flood_count(&maze, first_passage(&maze)), total);
    }

    #[test]
    fn carving_is_a_spanning_tree() {
        for seed in [2, 3, 4] {
            let mut carver = MazeGen::new(StdRng::seed_from_u64(seed));
            let maze = carver.kruskal(19, 15);
            assert_eq!(passage_edges(&maze), maze.passage_count() - 1);
        }
    }

    #[test]
    fn lattice_cells_are_open() {
        let mut carver = MazeGen::new(StdRng::seed_from_u64(5));
        let maze = carver.kruskal(11, 11);
        for iy in 0..5 {
            for ix in 0..5 {
                assert!(maze[lattice_point(ix, iy)].passage());
            }
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = MazeGen::new(StdRng::seed_from_u64(7)).kruskal(17, 17);
        let b = MazeGen::new(StdRng::seed_from_u64(7)).kruskal(17, 17);
        assert_eq!(a, b);
    }
}
