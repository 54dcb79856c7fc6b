use warren_core::{Maze, Point};

/// Neighbor emission order: down, right, up, left. Every algorithm
/// consumes neighbors in this order, so it is the shared tie-break rule.
pub(crate) const DIRS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
];

/// Append the up-to-4 axis-adjacent passage cells of `p` into `buf`.
/// The caller clears `buf` before calling. No diagonals.
pub fn neighbors(maze: &Maze, p: Point, buf: &mut Vec<Point>) {
    for d in DIRS {
        let n = p + d;
        if maze.get(n).is_some_and(|c| c.passage()) {
            buf.push(n);
        }
    }
}
