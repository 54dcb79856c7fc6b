//! ASCII rendering of grid state.

use warren_core::{Cell, Maze};

/// One character per cell: `S`/`E` markers, `#` wall, `*` solution path,
/// `.` visited during the search, space for untouched passage.
pub fn glyph(cell: &Cell) -> char {
    if cell.start {
        'S'
    } else if cell.end {
        'E'
    } else if cell.wall {
        '#'
    } else if cell.on_path {
        '*'
    } else if cell.visited || cell.exploring {
        '.'
    } else {
        ' '
    }
}

/// Render the whole maze, one text row per grid row.
pub fn render(maze: &Maze) -> String {
    let mut out = String::with_capacity(maze.len() + maze.height() as usize);
    for cell in maze.iter() {
        out.push(glyph(cell));
        if cell.pos.x == maze.width() - 1 {
            out.push('\n');
        }
    }
    out
}
