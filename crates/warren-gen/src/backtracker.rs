use rand::{Rng, RngExt};
use warren_core::{Maze, Point};

use crate::{LATTICE_DIRS, MazeGen, coerce_odd, interior};

impl<R: Rng> MazeGen<R> {
    /// Carve a perfect maze by randomized depth-first backtracking.
    ///
    /// Dimensions are coerced to odd so passages live on odd coordinates
    /// with walls between them. From the top of the carved stack, pick an
    /// uncarved lattice neighbor two cells away uniformly at random, open
    /// the wall between, and descend; backtrack when none remain. The
    /// result is a spanning tree: exactly one path between any two
    /// passages.
    pub fn recursive_backtracker(&mut self, width: i32, height: i32) -> Maze {
        let width = coerce_odd(width);
        let height = coerce_odd(height);
        let mut maze = Maze::new(width, height);
        maze.fill_walls();

        let origin = Point::new(1, 1);
        maze[origin].wall = false;
        let mut stack = vec![origin];
        let mut nbuf: Vec<Point> = Vec::with_capacity(4);

        while let Some(&current) = stack.last() {
            nbuf.clear();
            for d in LATTICE_DIRS {
                let next = current + d;
                if interior(&maze, next) && maze[next].wall {
                    nbuf.push(next);
                }
            }
            if nbuf.is_empty() {
                stack.pop();
                continue;
            }
            let next = nbuf[self.rng.random_range(0..nbuf.len())];
            let between = Point::new(
                current.x + (next.x - current.x) / 2,
                current.y + (next.y - current.y) / 2,
            );
            maze[between].wall = false;
            maze[next].wall = false;
            stack.push(next);
        }

        log::debug!(
            "recursive_backtracker: {}x{} maze, {} passages",
            width,
            height,
            maze.passage_count()
        );
        maze
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{first_passage, flood_count, passage_edges};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn even_dimensions_are_coerced_odd() {
        let mut carver = MazeGen::new(StdRng::seed_from_u64(1));
        let maze = carver.recursive_backtracker(20, 16);
        assert_eq!(maze.width(), 19);
        assert_eq!(maze.height(), 15);
    }

    #[test]
    fn every_passage_is_reachable() {
        let mut carver = MazeGen::new(StdRng::seed_from_u64(2));
        let maze = carver.recursive_backtracker(21, 21);
        let total = maze.passage_count();
        assert!(total > 0);
        assert_eq!(flood_count(&maze, first_passage(&maze)), total);
    }

    #[test]
    fn carving_is_a_spanning_tree() {
        for seed in [3, 4, 5] {
            let mut carver = MazeGen::new(StdRng::seed_from_u64(seed));
            let maze = carver.recursive_backtracker(17, 13);
            // Tree property on the passage graph: edges == nodes - 1.
            assert_eq!(passage_edges(&maze), maze.passage_count() - 1);
        }
    }

    #[test]
    fn border_stays_walled() {
        let mut carver = MazeGen::new(StdRng::seed_from_u64(6));
        let maze = carver.recursive_backtracker(15, 15);
        for x in 0..15 {
            assert!(maze[Point::new(x, 0)].wall);
            assert!(maze[Point::new(x, 14)].wall);
        }
        for y in 0..15 {
            assert!(maze[Point::new(0, y)].wall);
            assert!(maze[Point::new(14, y)].wall);
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = MazeGen::new(StdRng::seed_from_u64(9)).recursive_backtracker(21, 21);
        let b = MazeGen::new(StdRng::seed_from_u64(9)).recursive_backtracker(21, 21);
        assert_eq!(a, b);
    }
}
