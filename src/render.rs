//! Text rendering of grids.
//!
//! Two-dimensional grids render as rows of square glyphs. Any other
//! dimensionality falls back to a nested-bracket dump, one bracket level per axis.

use std::fmt;

use crate::automaton::Grid;

pub const ALIVE_GLYPH: char = '\u{2b1b}';
pub const DEAD_GLYPH: char = '\u{2b1c}';

fn write_rows(f: &mut fmt::Formatter<'_>, cells: &[bool], width: usize) -> fmt::Result {
    for row in cells.chunks(width) {
        for (x, &alive) in row.iter().enumerate() {
            if x > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", if alive { ALIVE_GLYPH } else { DEAD_GLYPH })?;
        }
        f.write_str("\n")?;
    }
    Ok(())
}

fn write_nested(
    f: &mut fmt::Formatter<'_>,
    cells: &[bool],
    shape: &[usize],
    depth: usize,
) -> fmt::Result {
    f.write_str("[")?;
    if shape.len() == 1 {
        for (i, &alive) in cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:>5}", if alive { "True" } else { "False" })?;
        }
    } else {
        // Blank lines between sub-blocks grow with the number of axes below
        let separator = format!(
            "{}{}",
            "\n".repeat(shape.len() - 1),
            " ".repeat(depth + 1)
        );
        for (i, block) in cells.chunks(cells.len() / shape[0]).enumerate() {
            if i > 0 {
                f.write_str(&separator)?;
            }
            write_nested(f, block, &shape[1..], depth + 1)?;
        }
    }
    f.write_str("]")
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape() {
            [_, width] => write_rows(f, self.cells(), *width),
            shape => write_nested(f, self.cells(), shape, 0),
        }
    }
}
