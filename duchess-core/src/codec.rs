//! Position <-> board index conversion
//!
//! ## Index layout
//!
//! - `0`: off-board
//! - `1..=120`: discrete squares, ordered flap / column / row
//! - `121..=156`: hexagon squares in owner form, ordered flap / column / row (c-e)
//! - `157`: vortex
//!
//! A hexagon square in rows a-b of columns 5-6 belongs to the next flap.
//! Both ways of writing it resolve to the owner's coordinates before the
//! index is computed, so they share one index.
//!
//! The arithmetic is `const fn` so the lookup tables in [`crate::tables`]
//! are evaluated at compile time.

use crate::error::Result;
use crate::geometry::{
    next_flap, FIRST_OWNED_HEX_ROW, HEX_OFFSET, HEX_ROWS_OWNED, HEX_SQUARES_PER_FLAP,
    NUM_COLS_IN_FLAP, NUM_ROWS, SQUARES_PER_FLAP, VORTEX_INDEX,
};
use crate::index::BoardIndex;
use crate::position::{Position, Square};

/// Who owns a hexagon square addressed from some flap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ownership {
    /// Rows c-e: the addressing flap owns the square
    OwnedDirectly,
    /// Rows a-b: the next flap owns it; coordinates are swapped into its frame
    OwnedByNeighbor,
}

/// Owner-frame coordinates of a hexagon square.
///
/// `local_col` is 1 or 2 (board columns 5 and 6).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexOwner {
    pub ownership: Ownership,
    pub flap: u8,
    pub row: u8,
    pub local_col: u8,
}

/// Resolve the owner of hexagon square `(flap, row, local_col)`.
///
/// Expects flap 1-6, row 1-5 and local column 1-2; build a [`Square`] to
/// validate raw input.
pub const fn hex_owner(flap: u8, row: u8, local_col: u8) -> HexOwner {
    if row >= FIRST_OWNED_HEX_ROW {
        HexOwner {
            ownership: Ownership::OwnedDirectly,
            flap,
            row,
            local_col,
        }
    } else {
        HexOwner {
            ownership: Ownership::OwnedByNeighbor,
            flap: next_flap(flap),
            row: NUM_ROWS + 1 - local_col,
            local_col: row,
        }
    }
}

/// Index of a discrete square (column 1-4)
pub(crate) const fn discrete_index(flap: u8, row: u8, col: u8) -> u8 {
    (flap - 1) * SQUARES_PER_FLAP + (col - 1) * NUM_ROWS + row
}

/// Index of a hexagon square given in local column form (1-2)
pub(crate) const fn hex_index(flap: u8, row: u8, local_col: u8) -> u8 {
    let owner = hex_owner(flap, row, local_col);
    HEX_OFFSET
        + (owner.flap - 1) * HEX_SQUARES_PER_FLAP
        + (owner.local_col - 1) * HEX_ROWS_OWNED
        + owner.row
        - (FIRST_OWNED_HEX_ROW - 1)
}

/// Index of any in-range square, borrowed or canonical
pub const fn square_index(square: &Square) -> u8 {
    let (flap, row, col) = (square.flap(), square.row(), square.col());
    if col <= NUM_COLS_IN_FLAP {
        discrete_index(flap, row, col)
    } else {
        hex_index(flap, row, col - NUM_COLS_IN_FLAP)
    }
}

/// Canonical position for an index in `0..=157`
pub(crate) const fn decode(index: u8) -> Position {
    if index == 0 {
        return Position::OffBoard;
    }
    if index >= VORTEX_INDEX {
        return Position::Vortex;
    }

    if index <= HEX_OFFSET {
        let within = index % SQUARES_PER_FLAP;
        let flap = (index - 1) / SQUARES_PER_FLAP + 1;
        let col = if within == 0 {
            NUM_COLS_IN_FLAP
        } else {
            (within - 1) / NUM_ROWS + 1
        };
        let row = match within % NUM_ROWS {
            0 => NUM_ROWS,
            r => r,
        };
        Position::Square(Square::new_unchecked(flap, row, col))
    } else {
        let j = index - HEX_OFFSET;
        let within = j % HEX_SQUARES_PER_FLAP;
        let flap = (j - 1) / HEX_SQUARES_PER_FLAP + 1;
        let col = if within == 0 {
            NUM_COLS_IN_FLAP + 2
        } else {
            (within - 1) / HEX_ROWS_OWNED + NUM_COLS_IN_FLAP + 1
        };
        let band = match within % HEX_ROWS_OWNED {
            0 => HEX_ROWS_OWNED,
            r => r,
        };
        let row = band + FIRST_OWNED_HEX_ROW - 1;
        Position::Square(Square::new_unchecked(flap, row, col))
    }
}

/// Board index of a position. Borrowed hexagon coordinates resolve to
/// the same index as their owner-form equivalent.
pub const fn position_to_index(position: &Position) -> BoardIndex {
    match position {
        Position::OffBoard => BoardIndex::OFF_BOARD,
        Position::Vortex => BoardIndex::VORTEX,
        Position::Square(sq) => BoardIndex::new_unchecked(square_index(sq)),
    }
}

/// Canonical (owner-form) position of an index
pub const fn index_to_position(index: BoardIndex) -> Position {
    decode(index.get())
}

/// Validate raw coordinates and return their index
pub fn coordinates_to_index(flap: u8, row: u8, col: u8) -> Result<BoardIndex> {
    let square = Square::new(flap, row, col)?;
    Ok(position_to_index(&Position::Square(square)))
}

/// Validate a raw index and return its canonical position
pub fn value_to_position(value: u32) -> Result<Position> {
    Ok(index_to_position(BoardIndex::new(value)?))
}
