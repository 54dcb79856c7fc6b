use crate::geom::Point;

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

/// A single grid cell: fixed coordinates, role flags, and the mutable
/// search state written by pathfinding runs.
///
/// The role flags (`wall`, `start`, `end`) outlive search runs; everything
/// else is cleared by [`Cell::clear_search_state`] before each run. The
/// cost accumulators `g`/`h`/`f` are meaningful only during an A*-family
/// run and `distance` only during a Dijkstra or bidirectional run.
/// `on_path`, `visited` and `exploring` are visualization hints with no
/// algorithmic meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub wall: bool,
    pub start: bool,
    pub end: bool,
    pub on_path: bool,
    pub visited: bool,
    pub exploring: bool,
    pub g: i32,
    pub h: i32,
    pub f: i32,
    pub distance: i32,
    /// Back-reference toward the search origin, as a coordinate into the
    /// owning maze. Never a structural pointer.
    pub parent: Option<Point>,
}

impl Cell {
    /// A fresh open cell at `pos`.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            wall: false,
            start: false,
            end: false,
            on_path: false,
            visited: false,
            exploring: false,
            g: 0,
            h: 0,
            f: 0,
            distance: UNREACHABLE,
            parent: None,
        }
    }

    /// Whether the cell can be traversed.
    #[inline]
    pub fn passage(&self) -> bool {
        !self.wall
    }

    /// Clear all search-only state, leaving wall/start/end untouched.
    pub fn clear_search_state(&mut self) {
        self.on_path = false;
        self.visited = false;
        self.exploring = false;
        self.g = 0;
        self.h = 0;
        self.f = 0;
        self.distance = UNREACHABLE;
        self.parent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_search_state_keeps_role_flags() {
        let mut c = Cell::new(Point::new(2, 3));
        c.wall = true;
        c.g = 5;
        c.f = 9;
        c.distance = 4;
        c.parent = Some(Point::new(1, 3));
        c.visited = true;
        c.clear_search_state();
        assert!(c.wall);
        assert_eq!(c.g, 0);
        assert_eq!(c.f, 0);
        assert_eq!(c.distance, UNREACHABLE);
        assert_eq!(c.parent, None);
        assert!(!c.visited);
    }
}
