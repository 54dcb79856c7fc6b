use warren_core::Point;

/// Manhattan (L1) distance — admissible and consistent on a 4-connected
/// unweighted grid, which is what makes A* optimal here.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(1, 1), Point::new(3, 3)), 4);
        assert_eq!(manhattan(Point::new(3, 3), Point::new(1, 1)), 4);
        assert_eq!(manhattan(Point::new(2, 2), Point::new(2, 2)), 0);
    }
}
