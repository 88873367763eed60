//! Digit glyph model: which way every hand of every cell points for each digit.
//!
//! A digit is drawn on a 4-column by 6-row grid of cells (row-major, so cell
//! `i` sits at row `i / 4`, column `i % 4`). Each cell shows one [`Symbol`],
//! and each symbol is drawn by two hands at fixed angles. Angles are in
//! degrees, 0 pointing right and growing clockwise on screen.

use std::fmt;

/// Number of cells in one digit grid
pub const CELLS_PER_DIGIT: usize = 24;

/// Columns in one digit grid
pub const GRID_COLUMNS: usize = 4;

/// Rows in one digit grid
pub const GRID_ROWS: usize = 6;

/// The two hand angles of one cell, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandAngles {
    pub first: u16,
    pub second: u16,
}

impl HandAngles {
    pub const fn new(first: u16, second: u16) -> Self {
        Self { first, second }
    }

    pub fn as_tuple(self) -> (u16, u16) {
        (self.first, self.second)
    }
}

impl fmt::Display for HandAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}°, {}°)", self.first, self.second)
    }
}

/// Both hands parked on the same diagonal so the cell reads as empty
pub const BLANK_ANGLES: HandAngles = HandAngles::new(135, 135);

/// Cell appearance codes used by the digit shape table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// ` `
    Blank,
    /// `┘`
    BottomRight,
    /// `└`
    BottomLeft,
    /// `┐`
    TopRight,
    /// `┌`
    TopLeft,
    /// `-`
    Horizontal,
    /// `|`
    Vertical,
}

impl Symbol {
    pub const ALL: [Symbol; 7] = [
        Symbol::Blank,
        Symbol::BottomRight,
        Symbol::BottomLeft,
        Symbol::TopRight,
        Symbol::TopLeft,
        Symbol::Horizontal,
        Symbol::Vertical,
    ];

    /// Hand angles drawing this symbol
    pub const fn angles(self) -> HandAngles {
        match self {
            Symbol::Blank => BLANK_ANGLES,
            Symbol::BottomRight => HandAngles::new(180, 270),
            Symbol::BottomLeft => HandAngles::new(0, 270),
            Symbol::TopRight => HandAngles::new(90, 180),
            Symbol::TopLeft => HandAngles::new(0, 90),
            Symbol::Horizontal => HandAngles::new(0, 180),
            Symbol::Vertical => HandAngles::new(90, 270),
        }
    }

    /// Shape-table code of this symbol
    pub const fn as_char(self) -> char {
        match self {
            Symbol::Blank => ' ',
            Symbol::BottomRight => '┘',
            Symbol::BottomLeft => '└',
            Symbol::TopRight => '┐',
            Symbol::TopLeft => '┌',
            Symbol::Horizontal => '-',
            Symbol::Vertical => '|',
        }
    }

    /// Box-drawing character that joins up with its neighbours in a terminal
    pub const fn box_char(self) -> char {
        match self {
            Symbol::Horizontal => '─',
            Symbol::Vertical => '│',
            other => other.as_char(),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|symbol| symbol.as_char() == c)
    }

    /// Inverse of [`Symbol::angles`]; the pair must match exactly, in order.
    pub fn from_angles(angles: HandAngles) -> Option<Self> {
        Self::ALL.into_iter().find(|symbol| symbol.angles() == angles)
    }
}

/// One digit glyph: a symbol per cell, row-major
pub type DigitShape = [Symbol; CELLS_PER_DIGIT];

const SP: Symbol = Symbol::Blank;
const BR: Symbol = Symbol::BottomRight;
const BL: Symbol = Symbol::BottomLeft;
const TR: Symbol = Symbol::TopRight;
const TL: Symbol = Symbol::TopLeft;
const H: Symbol = Symbol::Horizontal;
const V: Symbol = Symbol::Vertical;

/// Glyphs for '0' through '9', indexed by digit value
#[rustfmt::skip]
pub static DIGIT_SHAPES: [DigitShape; 10] = [
    // 0
    [
        TL, H, H, TR,
        V, TL, TR, V,
        V, V, V, V,
        V, V, V, V,
        V, BL, BR, V,
        BL, H, H, BR,
    ],
    // 1
    [
        TL, H, TR, SP,
        BL, TR, V, SP,
        SP, V, V, SP,
        SP, V, V, SP,
        TL, BR, BL, TR,
        BL, H, H, BR,
    ],
    // 2
    [
        TL, H, H, TR,
        BL, H, TR, V,
        TL, H, BR, V,
        V, TL, H, BR,
        V, BL, H, TR,
        BL, H, H, BR,
    ],
    // 3
    [
        TL, H, H, TR,
        BL, H, TR, V,
        SP, TL, BR, V,
        SP, BL, TR, V,
        TL, H, BR, V,
        BL, H, H, BR,
    ],
    // 4
    [
        TL, TR, TL, TR,
        V, V, V, V,
        V, BL, BR, V,
        BL, H, TR, V,
        SP, SP, V, V,
        SP, SP, BL, BR,
    ],
    // 5
    [
        TL, H, H, TR,
        V, TL, H, BR,
        V, BL, H, TR,
        BL, H, TR, V,
        TL, H, BR, V,
        BL, H, H, BR,
    ],
    // 6
    [
        TL, H, H, TR,
        V, TL, H, BR,
        V, BL, H, TR,
        V, TL, TR, V,
        V, BL, BR, V,
        BL, H, H, BR,
    ],
    // 7
    [
        TL, H, H, TR,
        BL, H, TR, V,
        SP, SP, V, V,
        SP, SP, V, V,
        SP, SP, V, V,
        SP, SP, BL, BR,
    ],
    // 8
    [
        TL, H, H, TR,
        V, TL, TR, V,
        V, BL, BR, V,
        V, TL, TR, V,
        V, BL, BR, V,
        BL, H, H, BR,
    ],
    // 9
    [
        TL, H, H, TR,
        V, TL, TR, V,
        V, BL, BR, V,
        BL, H, TR, V,
        TL, H, BR, V,
        BL, H, H, BR,
    ],
];

/// Shape for a decimal digit character, `None` for anything else.
pub fn digit_shape(digit: char) -> Option<&'static DigitShape> {
    digit
        .to_digit(10)
        .map(|value| &DIGIT_SHAPES[value as usize])
}

/// Hand angles for one cell of one digit.
///
/// Total: an unknown digit or an out-of-range cell resolves to
/// [`BLANK_ANGLES`], so malformed input renders as empty cells.
pub fn resolve_angles(digit: char, cell_index: usize) -> HandAngles {
    digit_shape(digit)
        .and_then(|shape| shape.get(cell_index))
        .map_or(BLANK_ANGLES, |symbol| symbol.angles())
}

/// Grid position `(row, column)` of a cell index.
pub const fn cell_position(cell_index: usize) -> (usize, usize) {
    (cell_index / GRID_COLUMNS, cell_index % GRID_COLUMNS)
}
