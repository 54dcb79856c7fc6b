//! The [`Maze`] grid container and its edit operations.

use std::ops::{Index, IndexMut};

use crate::cell::Cell;
use crate::geom::Point;

/// A rectangular, row-major grid of [`Cell`] values.
///
/// Coordinates lie in `[0, width) × [0, height)`. At most one cell carries
/// the start marker and at most one the end marker; a wall cell is never
/// simultaneously start or end. The edit operations below preserve both
/// invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Maze {
    /// Create a new maze with every cell open.
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0);
        let mut cells = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(Point::new(x, y)));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies within the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Convert a point to a flat row-major index. `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.idx(p).map(move |i| &mut self.cells[i])
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Row-major iterator over all points.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }

    /// Turn every cell into a wall. Clears start/end markers as well,
    /// since a wall cell cannot carry them.
    pub fn fill_walls(&mut self) {
        for cell in &mut self.cells {
            cell.wall = true;
            cell.start = false;
            cell.end = false;
        }
    }

    /// Number of passage (non-wall) cells.
    pub fn passage_count(&self) -> usize {
        self.cells.iter().filter(|c| c.passage()).count()
    }

    // -----------------------------------------------------------------------
    // Edit operations
    // -----------------------------------------------------------------------

    /// The start cell's position, if one is set.
    pub fn start(&self) -> Option<Point> {
        self.cells.iter().find(|c| c.start).map(|c| c.pos)
    }

    /// The end cell's position, if one is set.
    pub fn end(&self) -> Option<Point> {
        self.cells.iter().find(|c| c.end).map(|c| c.pos)
    }

    /// Move the start marker to `p`, clearing any previous one and forcing
    /// the cell open. Returns `false` if `p` is out of bounds or already
    /// holds the end marker.
    pub fn set_start(&mut self, p: Point) -> bool {
        let Some(i) = self.idx(p) else {
            return false;
        };
        if self.cells[i].end {
            return false;
        }
        for cell in &mut self.cells {
            cell.start = false;
        }
        self.cells[i].start = true;
        self.cells[i].wall = false;
        true
    }

    /// Move the end marker to `p`. Same rules as [`Maze::set_start`].
    pub fn set_end(&mut self, p: Point) -> bool {
        let Some(i) = self.idx(p) else {
            return false;
        };
        if self.cells[i].start {
            return false;
        }
        for cell in &mut self.cells {
            cell.end = false;
        }
        self.cells[i].end = true;
        self.cells[i].wall = false;
        true
    }

    /// Toggle the wall flag at `p`. Refused (returns `false`) on the start
    /// or end cell, or out of bounds.
    pub fn toggle_wall(&mut self, p: Point) -> bool {
        let Some(i) = self.idx(p) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if cell.start || cell.end {
            return false;
        }
        cell.wall = !cell.wall;
        true
    }

    /// Clear all search state on every cell. Must run before each solve so
    /// stale costs or parents from a prior algorithm never leak into the
    /// next. Idempotent.
    pub fn reset_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.clear_search_state();
        }
    }
}

impl Index<Point> for Maze {
    type Output = Cell;

    /// Panics if `p` is out of bounds, like slice indexing. Use
    /// [`Maze::get`] for a checked lookup.
    #[inline]
    fn index(&self, p: Point) -> &Cell {
        match self.idx(p) {
            Some(i) => &self.cells[i],
            None => panic!("point {p} out of maze bounds"),
        }
    }
}

impl IndexMut<Point> for Maze {
    #[inline]
    fn index_mut(&mut self, p: Point) -> &mut Cell {
        match self.idx(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("point {p} out of maze bounds"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::UNREACHABLE;

    #[test]
    fn new_maze_is_open() {
        let m = Maze::new(4, 3);
        assert_eq!(m.len(), 12);
        assert_eq!(m.passage_count(), 12);
        assert!(m.contains(Point::new(3, 2)));
        assert!(!m.contains(Point::new(4, 0)));
        assert!(m.get(Point::new(0, 3)).is_none());
    }

    #[test]
    fn idx_is_row_major() {
        let m = Maze::new(5, 4);
        assert_eq!(m.idx(Point::new(0, 0)), Some(0));
        assert_eq!(m.idx(Point::new(3, 2)), Some(13));
        assert_eq!(m.idx(Point::new(-1, 0)), None);
    }

    #[test]
    fn start_marker_is_unique() {
        let mut m = Maze::new(5, 5);
        assert!(m.set_start(Point::new(1, 1)));
        assert!(m.set_start(Point::new(3, 3)));
        assert_eq!(m.start(), Some(Point::new(3, 3)));
        assert_eq!(m.iter().filter(|c| c.start).count(), 1);
    }

    #[test]
    fn set_start_clears_wall() {
        let mut m = Maze::new(5, 5);
        m.toggle_wall(Point::new(2, 2));
        assert!(m.get(Point::new(2, 2)).unwrap().wall);
        assert!(m.set_start(Point::new(2, 2)));
        assert!(!m.get(Point::new(2, 2)).unwrap().wall);
    }

    #[test]
    fn start_and_end_never_coincide() {
        let mut m = Maze::new(5, 5);
        assert!(m.set_end(Point::new(2, 2)));
        assert!(!m.set_start(Point::new(2, 2)));
        assert_eq!(m.start(), None);
    }

    #[test]
    fn toggle_wall_refused_on_markers() {
        let mut m = Maze::new(5, 5);
        m.set_start(Point::new(1, 1));
        assert!(!m.toggle_wall(Point::new(1, 1)));
        assert!(!m.get(Point::new(1, 1)).unwrap().wall);
        assert!(m.toggle_wall(Point::new(2, 1)));
        assert!(m.toggle_wall(Point::new(2, 1)));
        assert!(!m.get(Point::new(2, 1)).unwrap().wall);
    }

    #[test]
    fn reset_search_state_is_idempotent() {
        let mut m = Maze::new(3, 3);
        m.set_start(Point::new(0, 0));
        {
            let c = m.get_mut(Point::new(1, 1)).unwrap();
            c.g = 7;
            c.distance = 2;
            c.parent = Some(Point::new(0, 1));
            c.on_path = true;
        }
        m.reset_search_state();
        let once = m.clone();
        m.reset_search_state();
        assert_eq!(m, once);
        let c = m.get(Point::new(1, 1)).unwrap();
        assert_eq!(c.distance, UNREACHABLE);
        assert_eq!(c.parent, None);
        assert!(!c.on_path);
        assert_eq!(m.start(), Some(Point::new(0, 0)));
    }

    #[test]
    fn fill_walls_drops_markers() {
        let mut m = Maze::new(3, 3);
        m.set_start(Point::new(1, 1));
        m.fill_walls();
        assert_eq!(m.passage_count(), 0);
        assert_eq!(m.start(), None);
    }
}
