//! Plain-text surface: draws the face with box-drawing characters.
//!
//! Each cell becomes one character, recovered from its hand angles, so the
//! output shows exactly what the hands would draw. Used by `hand-clock
//! preview` and by tests.

use crate::glyph::{CELLS_PER_DIGIT, GRID_COLUMNS, GRID_ROWS, HandAngles, Symbol};
use crate::surface::{ClockSurface, DigitPosition, Field};
use std::fmt;

/// Shown for a hand pair that matches no symbol
const UNKNOWN_CELL: char = '?';

type DigitCells = [char; CELLS_PER_DIGIT];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSurface {
    cells: [[DigitCells; 2]; 3],
    built: bool,
}

impl Default for TextSurface {
    fn default() -> Self {
        Self {
            cells: [[[Symbol::Blank.box_char(); CELLS_PER_DIGIT]; 2]; 3],
            built: false,
        }
    }
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Character drawn in one cell; blank for an out-of-range cell.
    pub fn cell(&self, field: Field, position: DigitPosition, cell: usize) -> char {
        self.cells[field.index()][position.index()]
            .get(cell)
            .copied()
            .unwrap_or(Symbol::Blank.box_char())
    }

    /// One string per grid row; digits separated by a space, fields by
    /// a colon column on the middle rows.
    pub fn lines(&self) -> Vec<String> {
        (0..GRID_ROWS)
            .map(|row| {
                let mut line = String::new();
                for field in Field::ALL {
                    if field != Field::Hours {
                        line.push_str(if row == 2 || row == 3 { " : " } else { "   " });
                    }
                    for position in DigitPosition::ALL {
                        if position == DigitPosition::Units {
                            line.push(' ');
                        }
                        for column in 0..GRID_COLUMNS {
                            line.push(self.cell(field, position, row * GRID_COLUMNS + column));
                        }
                    }
                }
                line.trim_end().to_string()
            })
            .collect()
    }
}

impl ClockSurface for TextSurface {
    fn build(&mut self) {
        *self = Self {
            built: true,
            ..Self::default()
        };
    }

    fn set_cell(&mut self, field: Field, position: DigitPosition, cell: usize, angles: HandAngles) {
        let Some(slot) = self.cells[field.index()][position.index()].get_mut(cell) else {
            log::warn!("Ignoring out-of-range cell {} of {}", cell, field.name());
            return;
        };
        *slot = Symbol::from_angles(angles).map_or(UNKNOWN_CELL, Symbol::box_char);
    }
}

impl fmt::Display for TextSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::render_time;
    use crate::time_source::ClockTime;

    #[test]
    fn test_renders_zeroes() {
        let mut surface = TextSurface::new();
        surface.build();
        render_time(&mut surface, &ClockTime::from_hms(0, 0, 0));
        let lines = surface.lines();
        assert_eq!(lines.len(), GRID_ROWS);
        assert_eq!(lines[0], "┌──┐ ┌──┐   ┌──┐ ┌──┐   ┌──┐ ┌──┐");
        assert_eq!(lines[2], "││││ ││││ : ││││ ││││ : ││││ ││││");
        assert_eq!(lines[5], "└──┘ └──┘   └──┘ └──┘   └──┘ └──┘");
    }

    #[test]
    fn test_unknown_angles_show_marker() {
        let mut surface = TextSurface::new();
        surface.set_cell(Field::Minutes, DigitPosition::Tens, 0, HandAngles::new(45, 45));
        assert_eq!(surface.cell(Field::Minutes, DigitPosition::Tens, 0), UNKNOWN_CELL);
    }

    #[test]
    fn test_out_of_range_cell_is_ignored() {
        let mut surface = TextSurface::new();
        let before = surface.clone();
        surface.set_cell(Field::Hours, DigitPosition::Tens, CELLS_PER_DIGIT, HandAngles::new(0, 90));
        assert_eq!(surface, before);
    }

    #[test]
    fn test_out_of_range_cell_reads_blank() {
        let mut surface = TextSurface::new();
        render_time(&mut surface, &ClockTime::from_hms(8, 8, 8));
        assert_eq!(
            surface.cell(Field::Seconds, DigitPosition::Units, CELLS_PER_DIGIT),
            Symbol::Blank.box_char()
        );
    }

    #[test]
    fn test_build_clears_previous_render() {
        let mut surface = TextSurface::new();
        render_time(&mut surface, &ClockTime::from_hms(8, 8, 8));
        surface.build();
        assert!(surface.is_built());
        assert!(surface.lines().iter().all(|line| line.trim().chars().all(|c| c == ':' || c == ' ')));
    }
}
