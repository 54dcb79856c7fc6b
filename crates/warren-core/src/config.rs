use crate::geom::Point;

/// Dimensions and start/end placement for a maze session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub end: Point,
}

impl MazeConfig {
    /// A square config with start near the top-left corner and end near
    /// the bottom-right one.
    pub fn square(size: i32) -> Self {
        Self::sized(size, size)
    }

    /// Config for a `width × height` maze, start at (1, 1), end at
    /// (width − 2, height − 2).
    pub fn sized(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            start: Point::new(1, 1),
            end: Point::new(width - 2, height - 2),
        }
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::square(25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_corners() {
        let cfg = MazeConfig::default();
        assert_eq!(cfg.width, 25);
        assert_eq!(cfg.start, Point::new(1, 1));
        assert_eq!(cfg.end, Point::new(23, 23));
    }
}
