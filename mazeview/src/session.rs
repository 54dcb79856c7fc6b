//! Session flow: generate a maze, repair accessibility, run solves.

use std::error::Error;
use std::fmt;

use rand::Rng;
use warren_core::{Maze, MazeConfig, Point};
use warren_gen::{MazeGen, ensure_accessible};
use warren_solve::{Progress, SearchResult, Solver, discard};

use crate::kind::{AlgorithmKind, GeneratorKind};

/// Wall probability for the "empty" generation mode.
const RANDOM_WALL_DENSITY: f64 = 0.3;

/// A solve request rejected before the engine was invoked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The maze has no start marker.
    MissingStart,
    /// The maze has no end marker.
    MissingEnd,
    /// The maze has no cells at all.
    EmptyMaze,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "no start cell set"),
            Self::MissingEnd => write!(f, "no end cell set"),
            Self::EmptyMaze => write!(f, "maze has no cells"),
        }
    }
}

impl Error for SolveError {}

/// Generate a maze of the requested kind and prepare it for solving:
/// repair accessibility around the configured start/end, then place the
/// markers.
pub fn generate(kind: GeneratorKind, cfg: &MazeConfig, rng: &mut impl Rng) -> Maze {
    let mut carver = MazeGen::new(rng);
    let mut maze = match kind {
        GeneratorKind::Recursive => carver.recursive_backtracker(cfg.width, cfg.height),
        GeneratorKind::Prim => carver.prim(cfg.width, cfg.height),
        GeneratorKind::Kruskal => carver.kruskal(cfg.width, cfg.height),
        GeneratorKind::Empty => {
            let mut maze = Maze::new(cfg.width, cfg.height);
            carver.random_walls(&mut maze, RANDOM_WALL_DENSITY);
            maze
        }
    };

    // Odd-coercing generators may shrink the grid; clamp the markers in.
    let start = clamp(cfg.start, &maze);
    let end = clamp(cfg.end, &maze);
    ensure_accessible(&mut maze, start, end);
    maze.set_start(start);
    maze.set_end(end);
    maze
}

fn clamp(p: Point, maze: &Maze) -> Point {
    Point::new(
        p.x.clamp(0, maze.width() - 1),
        p.y.clamp(0, maze.height() - 1),
    )
}

/// Run one algorithm against the maze.
///
/// Checks the preconditions the engine itself does not (markers present,
/// non-empty grid), clears stale search state, then dispatches. The RNG
/// only drives DFS's neighbor shuffling.
pub fn solve(
    kind: AlgorithmKind,
    solver: &mut Solver,
    maze: &mut Maze,
    rng: &mut impl Rng,
    progress: &mut impl Progress,
) -> Result<SearchResult, SolveError> {
    if maze.is_empty() {
        return Err(SolveError::EmptyMaze);
    }
    let start = maze.start().ok_or(SolveError::MissingStart)?;
    let end = maze.end().ok_or(SolveError::MissingEnd)?;

    maze.reset_search_state();
    let result = match kind {
        AlgorithmKind::AStar => solver.astar(maze, start, end, progress),
        AlgorithmKind::Dijkstra => solver.dijkstra(maze, start, end, progress),
        AlgorithmKind::Bfs => solver.bfs(maze, start, end, progress),
        AlgorithmKind::Dfs => solver.dfs(maze, start, end, rng, progress),
        AlgorithmKind::Bidirectional => solver.bidirectional(maze, start, end, progress),
    };
    log::debug!(
        "{kind}: success={} path_length={} nodes_explored={}",
        result.success,
        result.path_length,
        result.nodes_explored
    );
    Ok(result)
}

/// Run all five algorithms sequentially on the same wall layout, in batch
/// mode, resetting search state between runs so results are comparable.
pub fn compare_all(
    solver: &mut Solver,
    maze: &mut Maze,
    rng: &mut impl Rng,
) -> Result<Vec<(AlgorithmKind, SearchResult)>, SolveError> {
    let mut results = Vec::with_capacity(AlgorithmKind::ALL.len());
    for kind in AlgorithmKind::ALL {
        let result = solve(kind, solver, maze, rng, &mut discard)?;
        results.push((kind, result));
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use warren_core::Point;

    #[test]
    fn generate_places_markers() {
        let mut rng = StdRng::seed_from_u64(1);
        let cfg = MazeConfig::square(21);
        for kind in GeneratorKind::ALL {
            let maze = generate(kind, &cfg, &mut rng);
            assert_eq!(maze.start(), Some(Point::new(1, 1)));
            assert_eq!(maze.end(), Some(Point::new(19, 19)));
        }
    }

    #[test]
    fn generate_clamps_markers_after_odd_coercion() {
        let mut rng = StdRng::seed_from_u64(2);
        // 20 coerces to 19, so the configured end (18, 18) stays inside.
        let cfg = MazeConfig::square(20);
        let maze = generate(GeneratorKind::Recursive, &cfg, &mut rng);
        assert_eq!(maze.width(), 19);
        assert_eq!(maze.end(), Some(Point::new(18, 18)));
    }

    #[test]
    fn solve_requires_markers() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut solver = Solver::new();
        let mut maze = Maze::new(5, 5);
        let err = solve(
            AlgorithmKind::Bfs,
            &mut solver,
            &mut maze,
            &mut rng,
            &mut discard,
        )
        .unwrap_err();
        assert_eq!(err, SolveError::MissingStart);

        maze.set_start(Point::new(0, 0));
        let err = solve(
            AlgorithmKind::Bfs,
            &mut solver,
            &mut maze,
            &mut rng,
            &mut discard,
        )
        .unwrap_err();
        assert_eq!(err, SolveError::MissingEnd);
    }

    #[test]
    fn solve_clears_stale_state() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut solver = Solver::new();
        let mut maze = Maze::new(5, 5);
        maze.set_start(Point::new(0, 0));
        maze.set_end(Point::new(4, 4));
        // Poison a cell with stale state from a "previous run".
        maze[Point::new(2, 2)].distance = 0;
        maze[Point::new(2, 2)].parent = Some(Point::new(4, 4));
        let r = solve(
            AlgorithmKind::Dijkstra,
            &mut solver,
            &mut maze,
            &mut rng,
            &mut discard,
        )
        .unwrap();
        assert!(r.success);
        assert_eq!(r.path_length, 8);
    }
}
