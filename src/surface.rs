//! The visual surface the clock renders onto, and the projection from a
//! `ClockTime` to per-cell hand angles.
//!
//! A surface is addressed by field (hours, minutes, seconds), digit position
//! (tens, units) and cell index. It keeps whatever per-hand state it needs
//! to animate between renders; the projection itself is stateless.

use crate::glyph::{CELLS_PER_DIGIT, HandAngles, resolve_angles};
use crate::time_source::ClockTime;

/// One of the three two-digit groups on the face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    /// Left-to-right display order
    pub const ALL: [Field; 3] = [Field::Hours, Field::Minutes, Field::Seconds];

    pub fn name(self) -> &'static str {
        match self {
            Field::Hours => "hours",
            Field::Minutes => "minutes",
            Field::Seconds => "seconds",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Field::Hours => 0,
            Field::Minutes => 1,
            Field::Seconds => 2,
        }
    }
}

/// Digit slot within a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitPosition {
    Tens,
    Units,
}

impl DigitPosition {
    pub const ALL: [DigitPosition; 2] = [DigitPosition::Tens, DigitPosition::Units];

    pub fn index(self) -> usize {
        match self {
            DigitPosition::Tens => 0,
            DigitPosition::Units => 1,
        }
    }
}

/// Something that can show the two-hand cell grid
pub trait ClockSurface {
    /// Create the structure: three fields, two digits each, 24 cells per digit.
    ///
    /// Called once before the first render.
    fn build(&mut self);

    /// Point the two hands of one cell at `angles`.
    fn set_cell(&mut self, field: Field, position: DigitPosition, cell: usize, angles: HandAngles);
}

/// Draw `digit` into one digit slot of `surface`.
pub fn render_digit<S: ClockSurface + ?Sized>(
    surface: &mut S,
    field: Field,
    position: DigitPosition,
    digit: char,
) {
    for cell in 0..CELLS_PER_DIGIT {
        surface.set_cell(field, position, cell, resolve_angles(digit, cell));
    }
}

/// Project every digit of `time` onto `surface`.
///
/// A field string shorter than two characters leaves the missing slot blank.
pub fn render_time<S: ClockSurface + ?Sized>(surface: &mut S, time: &ClockTime) {
    for field in Field::ALL {
        for position in DigitPosition::ALL {
            let digit = time.digit(field, position).unwrap_or(' ');
            render_digit(surface, field, position, digit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{BLANK_ANGLES, Symbol};

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<(Field, DigitPosition, usize, HandAngles)>,
    }

    impl ClockSurface for RecordingSurface {
        fn build(&mut self) {}

        fn set_cell(
            &mut self,
            field: Field,
            position: DigitPosition,
            cell: usize,
            angles: HandAngles,
        ) {
            self.calls.push((field, position, cell, angles));
        }
    }

    #[test]
    fn test_render_time_touches_every_cell_once() {
        let mut surface = RecordingSurface::default();
        render_time(&mut surface, &ClockTime::from_hms(12, 34, 56));
        assert_eq!(surface.calls.len(), 3 * 2 * CELLS_PER_DIGIT);

        let mut seen = std::collections::HashSet::new();
        for (field, position, cell, _) in &surface.calls {
            assert!(seen.insert((*field, *position, *cell)));
        }
    }

    #[test]
    fn test_render_time_uses_each_digit() {
        let mut surface = RecordingSurface::default();
        render_time(&mut surface, &ClockTime::from_hms(10, 0, 0));
        let first_of = |field, position| {
            surface
                .calls
                .iter()
                .find(|(f, p, c, _)| *f == field && *p == position && *c == 3)
                .map(|(_, _, _, angles)| *angles)
        };
        // Cell 3 is blank for '1' and a top-right corner for '0'
        assert_eq!(first_of(Field::Hours, DigitPosition::Tens), Some(BLANK_ANGLES));
        assert_eq!(
            first_of(Field::Hours, DigitPosition::Units),
            Some(Symbol::TopRight.angles())
        );
    }

    #[test]
    fn test_short_field_renders_blank() {
        let mut surface = RecordingSurface::default();
        render_time(&mut surface, &ClockTime::new("9", "00", "00"));
        assert!(
            surface
                .calls
                .iter()
                .filter(|(f, p, _, _)| *f == Field::Hours && *p == DigitPosition::Units)
                .all(|(_, _, _, angles)| *angles == BLANK_ANGLES)
        );
    }

    #[test]
    fn test_field_order_and_names() {
        let names: Vec<_> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["hours", "minutes", "seconds"]);
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }
}
