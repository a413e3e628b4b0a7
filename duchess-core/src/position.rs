//! Human-readable board positions
//!
//! A position is written `<flap><row><col>`, e.g. `3c4`, with the two
//! sentinels `OB` (off-board) and `V` (vortex).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::geometry::{
    next_flap, rotate_flap, FIRST_OWNED_HEX_ROW, MAX_INDEXED_COL, NUM_COLS_IN_FLAP, NUM_FLAPS,
    NUM_ROWS,
};

/// Row letters, nearest the vortex first
pub const ROW_CHARS: [char; NUM_ROWS as usize] = ['a', 'b', 'c', 'd', 'e'];

/// Row ordinal (1-5) to its letter
pub const fn row_to_char(row: u8) -> char {
    ROW_CHARS[(row - 1) as usize]
}

/// Row letter to its ordinal (1-5)
pub const fn char_to_row(c: char) -> Option<u8> {
    match c {
        'a' => Some(1),
        'b' => Some(2),
        'c' => Some(3),
        'd' => Some(4),
        'e' => Some(5),
        _ => None,
    }
}

/// Which part of a flap a column falls in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// Columns 1-4, owned by the flap alone
    Discrete,
    /// Columns 5-6, part of the central hexagon
    Hexagon,
}

/// A square addressed from one flap's point of view.
///
/// Hexagon squares in rows a-b are "borrowed": they are the same physical
/// squares as rows d-e of the next flap. Both forms are valid `Square`s;
/// [`Square::canonical`] converts to the owning flap's coordinates.
///
/// Equality and hashing go through the canonical form, so a borrowed
/// square equals its owner.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    flap: u8,
    row: u8,
    col: u8,
}

/// Unvalidated wire form of [`Square`]
#[derive(Deserialize)]
struct RawSquare {
    flap: u8,
    row: u8,
    col: u8,
}

impl TryFrom<RawSquare> for Square {
    type Error = BoardError;

    fn try_from(raw: RawSquare) -> Result<Self> {
        Square::new(raw.flap, raw.row, raw.col)
    }
}

impl Square {
    /// Build a square, rejecting anything outside flap 1-6, row 1-5, column 1-6
    pub fn new(flap: u8, row: u8, col: u8) -> Result<Self> {
        let in_range = (1..=NUM_FLAPS).contains(&flap)
            && (1..=NUM_ROWS).contains(&row)
            && (1..=MAX_INDEXED_COL).contains(&col);

        if in_range {
            Ok(Self { flap, row, col })
        } else {
            Err(BoardError::InvalidCoordinate { flap, row, col })
        }
    }

    /// Caller guarantees the coordinates are in range
    pub(crate) const fn new_unchecked(flap: u8, row: u8, col: u8) -> Self {
        Self { flap, row, col }
    }

    pub const fn flap(&self) -> u8 {
        self.flap
    }

    /// Row ordinal, 1 (a) to 5 (e)
    pub const fn row(&self) -> u8 {
        self.row
    }

    pub const fn row_char(&self) -> char {
        row_to_char(self.row)
    }

    pub const fn col(&self) -> u8 {
        self.col
    }

    pub const fn region(&self) -> Region {
        if self.col <= NUM_COLS_IN_FLAP {
            Region::Discrete
        } else {
            Region::Hexagon
        }
    }

    /// True for hexagon squares seen from the neighbouring flap
    pub const fn is_borrowed(&self) -> bool {
        self.col > NUM_COLS_IN_FLAP && self.row < FIRST_OWNED_HEX_ROW
    }

    /// Coordinates of the same square in its owning flap's frame
    pub const fn canonical(&self) -> Self {
        if !self.is_borrowed() {
            return *self;
        }

        let local_col = self.col - NUM_COLS_IN_FLAP;
        Self {
            flap: next_flap(self.flap),
            row: NUM_ROWS + 1 - local_col,
            col: self.row + NUM_COLS_IN_FLAP,
        }
    }

    /// Same square as seen by the player `steps` flaps clockwise
    pub const fn rotated(&self, steps: u8) -> Self {
        Self {
            flap: rotate_flap(self.flap, steps),
            row: self.row,
            col: self.col,
        }
    }
}

impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.canonical(), other.canonical());
        a.flap == b.flap && a.row == b.row && a.col == b.col
    }
}

impl Eq for Square {}

impl Hash for Square {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let c = self.canonical();
        (c.flap, c.row, c.col).hash(state);
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.flap, self.row_char(), self.col)
    }
}

/// Any place a piece can be: a square, the vortex, or off the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    OffBoard,
    Vortex,
    Square(Square),
}

impl Position {
    /// Shorthand for `Position::Square(Square::new(..)?)`
    pub fn square(flap: u8, row: u8, col: u8) -> Result<Self> {
        Ok(Position::Square(Square::new(flap, row, col)?))
    }

    pub const fn is_off_board(&self) -> bool {
        matches!(self, Position::OffBoard)
    }

    pub const fn is_vortex(&self) -> bool {
        matches!(self, Position::Vortex)
    }

    pub const fn as_square(&self) -> Option<Square> {
        match self {
            Position::Square(sq) => Some(*sq),
            _ => None,
        }
    }

    pub const fn canonical(&self) -> Self {
        match self {
            Position::Square(sq) => Position::Square(sq.canonical()),
            other => *other,
        }
    }

    /// Sentinels are unaffected by rotation
    pub const fn rotated(&self, steps: u8) -> Self {
        match self {
            Position::Square(sq) => Position::Square(sq.rotated(steps)),
            other => *other,
        }
    }
}

impl From<Square> for Position {
    fn from(sq: Square) -> Self {
        Position::Square(sq)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::OffBoard => f.write_str("OB"),
            Position::Vortex => f.write_str("V"),
            Position::Square(sq) => fmt::Display::fmt(sq, f),
        }
    }
}

impl FromStr for Position {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "OB" => return Ok(Position::OffBoard),
            "V" => return Ok(Position::Vortex),
            _ => {}
        }

        let invalid = || BoardError::InvalidNotation(s.to_string());

        let mut chars = s.chars();
        let (Some(flap), Some(row), Some(col), None) =
            (chars.next(), chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let flap = flap.to_digit(10).ok_or_else(invalid)? as u8;
        let row = char_to_row(row).ok_or_else(invalid)?;
        let col = col.to_digit(10).ok_or_else(invalid)? as u8;

        Position::square(flap, row, col)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<Position>()?
            .as_square()
            .ok_or_else(|| BoardError::InvalidNotation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_chars() {
        for row in 1..=NUM_ROWS {
            assert_eq!(char_to_row(row_to_char(row)), Some(row));
        }
        assert_eq!(row_to_char(1), 'a');
        assert_eq!(row_to_char(5), 'e');
        assert_eq!(char_to_row('f'), None);
        assert_eq!(char_to_row('A'), None);
    }

    #[test]
    fn test_square_range() {
        assert!(Square::new(1, 1, 1).is_ok());
        assert!(Square::new(6, 5, 6).is_ok());
        assert_eq!(
            Square::new(0, 1, 1),
            Err(BoardError::InvalidCoordinate { flap: 0, row: 1, col: 1 })
        );
        assert!(Square::new(7, 1, 1).is_err());
        assert!(Square::new(1, 6, 1).is_err());
        assert!(Square::new(1, 0, 1).is_err());
        // Column 7 is reserved and never a square
        assert!(Square::new(1, 1, 7).is_err());
    }

    #[test]
    fn test_canonical_swaps_borrowed_squares() {
        let sq = Square::new(6, 1, 5).unwrap();
        assert!(sq.is_borrowed());
        assert_eq!(sq.canonical(), Square::new(1, 5, 5).unwrap());

        let sq = Square::new(2, 2, 5).unwrap();
        assert_eq!(sq.canonical(), Square::new(3, 5, 6).unwrap());

        let sq = Square::new(2, 1, 6).unwrap();
        assert_eq!(sq.canonical(), Square::new(3, 4, 5).unwrap());

        let sq = Square::new(4, 2, 6).unwrap();
        assert_eq!(sq.canonical(), Square::new(5, 4, 6).unwrap());
    }

    #[test]
    fn test_canonical_keeps_owned_squares() {
        for text in ["1a1", "3e4", "2c5", "5d6", "6e6"] {
            let sq: Square = text.parse().unwrap();
            assert!(!sq.is_borrowed());
            assert_eq!(sq.canonical(), sq);
        }
        assert_eq!(Position::Vortex.canonical(), Position::Vortex);
    }

    #[test]
    fn test_borrowed_square_equals_owner() {
        let borrowed: Position = "6a5".parse().unwrap();
        let owner: Position = "1e5".parse().unwrap();
        assert_eq!(borrowed, owner);
        assert_ne!(borrowed, "1d5".parse::<Position>().unwrap());

        let mut seen = std::collections::HashSet::new();
        seen.insert(borrowed);
        assert!(seen.contains(&owner));
    }

    #[test]
    fn test_deserialize_validates_coordinates() {
        let pos: Position =
            serde_json::from_str(r#"{"Square":{"flap":3,"row":3,"col":4}}"#).unwrap();
        assert_eq!(pos.to_string(), "3c4");

        for json in [
            r#"{"Square":{"flap":9,"row":5,"col":4}}"#,
            r#"{"Square":{"flap":0,"row":1,"col":1}}"#,
            r#"{"Square":{"flap":1,"row":6,"col":1}}"#,
            r#"{"Square":{"flap":1,"row":1,"col":7}}"#,
        ] {
            let err = serde_json::from_str::<Position>(json).unwrap_err();
            assert!(err.to_string().contains("Invalid coordinate"), "{json}: {err}");
        }
        assert!(serde_json::from_str::<Square>(r#"{"flap":1,"row":1,"col":7}"#).is_err());
    }

    #[test]
    fn test_region() {
        assert_eq!(Square::new(1, 1, 4).unwrap().region(), Region::Discrete);
        assert_eq!(Square::new(1, 1, 5).unwrap().region(), Region::Hexagon);
    }

    #[test]
    fn test_parse_and_display() {
        let pos: Position = "3c4".parse().unwrap();
        assert_eq!(pos, Position::square(3, 3, 4).unwrap());
        assert_eq!(pos.to_string(), "3c4");

        assert_eq!("OB".parse::<Position>().unwrap(), Position::OffBoard);
        assert_eq!("V".parse::<Position>().unwrap(), Position::Vortex);
        assert_eq!(Position::OffBoard.to_string(), "OB");
        assert_eq!(Position::Vortex.to_string(), "V");

        // Borrowed notation is kept as written
        assert_eq!("6a5".parse::<Position>().unwrap().to_string(), "6a5");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "3c", "3c45", "xc4", "3z4", "0a1", "7a1", "1f1", "1a0", "1a7", "ob", "v"] {
            assert!(text.parse::<Position>().is_err(), "{text} should not parse");
        }
        assert!("V".parse::<Square>().is_err());
    }

    #[test]
    fn test_rotation() {
        let sq = Square::new(5, 2, 3).unwrap();
        assert_eq!(sq.rotated(2), Square::new(1, 2, 3).unwrap());
        assert_eq!(sq.rotated(6), sq);
        assert_eq!(Position::OffBoard.rotated(3), Position::OffBoard);
    }
}
