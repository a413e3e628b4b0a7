//! Compile-time lookup tables
//!
//! Both tables are `const`-evaluated from the arithmetic in [`crate::codec`]
//! and never change afterwards.
//!
//! `POSITIONS_TO_INDEX` is laid out in generation order:
//! - slot 0: off-board (0)
//! - 120 discrete slots, flap / column (1-4) / row
//! - 60 hexagon slots, flap / column (5-6) / row (a-e), borrowed rows included
//! - last slot: vortex (157)

use serde::Serialize;

use crate::codec::{decode, discrete_index, hex_index};
use crate::geometry::{
    DISCRETE_SQUARES, NUM_COLS_IN_FLAP, NUM_COLS_OUT_FLAP, NUM_FLAPS, NUM_ROWS, VORTEX_INDEX,
};
use crate::index::BoardIndex;
use crate::position::{Position, Square};

/// Hexagon slots in generation order, both coordinate forms included
const HEX_SLOTS: usize = NUM_FLAPS as usize * NUM_COLS_OUT_FLAP as usize * NUM_ROWS as usize;

/// Length of the forward table
pub const POSITIONS_TO_INDEX_LEN: usize = 1 + DISCRETE_SQUARES as usize + HEX_SLOTS + 1;

/// Forward table, see module docs for the slot order
pub static POSITIONS_TO_INDEX: [u8; POSITIONS_TO_INDEX_LEN] = build_positions_to_index();

/// Canonical position of every board index
pub static INDEX_TO_POSITION: [Position; BoardIndex::COUNT] = build_index_to_position();

const fn build_positions_to_index() -> [u8; POSITIONS_TO_INDEX_LEN] {
    let mut table = [0u8; POSITIONS_TO_INDEX_LEN];
    let mut slot = 1;

    let mut flap = 1;
    while flap <= NUM_FLAPS {
        let mut col = 1;
        while col <= NUM_COLS_IN_FLAP {
            let mut row = 1;
            while row <= NUM_ROWS {
                table[slot] = discrete_index(flap, row, col);
                slot += 1;
                row += 1;
            }
            col += 1;
        }
        flap += 1;
    }

    let mut flap = 1;
    while flap <= NUM_FLAPS {
        let mut local_col = 1;
        while local_col <= NUM_COLS_OUT_FLAP {
            let mut row = 1;
            while row <= NUM_ROWS {
                table[slot] = hex_index(flap, row, local_col);
                slot += 1;
                row += 1;
            }
            local_col += 1;
        }
        flap += 1;
    }

    table[slot] = VORTEX_INDEX;
    table
}

const fn build_index_to_position() -> [Position; BoardIndex::COUNT] {
    let mut table = [Position::OffBoard; BoardIndex::COUNT];
    let mut index = 0;
    while index < BoardIndex::COUNT {
        table[index] = decode(index as u8);
        index += 1;
    }
    table
}

/// Slot in [`POSITIONS_TO_INDEX`] holding the index of `square`
pub const fn forward_slot(square: &Square) -> usize {
    let flap = (square.flap() - 1) as usize;
    let row = (square.row() - 1) as usize;
    let col = square.col() as usize;
    let rows = NUM_ROWS as usize;
    let in_flap = NUM_COLS_IN_FLAP as usize;

    if col <= in_flap {
        1 + flap * in_flap * rows + (col - 1) * rows + row
    } else {
        let out_flap = NUM_COLS_OUT_FLAP as usize;
        1 + DISCRETE_SQUARES as usize + flap * out_flap * rows + (col - in_flap - 1) * rows + row
    }
}

/// Table-driven equivalent of [`crate::codec::position_to_index`]
pub fn lookup_index(position: &Position) -> BoardIndex {
    match position {
        Position::OffBoard => BoardIndex::OFF_BOARD,
        Position::Vortex => BoardIndex::VORTEX,
        Position::Square(sq) => BoardIndex::new_unchecked(POSITIONS_TO_INDEX[forward_slot(sq)]),
    }
}

/// Table-driven equivalent of [`crate::codec::index_to_position`]
pub fn lookup_position(index: BoardIndex) -> Position {
    INDEX_TO_POSITION[index.as_usize()]
}

pub fn positions_to_index() -> &'static [u8] {
    &POSITIONS_TO_INDEX
}

pub fn index_to_position_table() -> &'static [Position] {
    &INDEX_TO_POSITION
}

/// One element of the flattened index-to-position table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PositionToken {
    Number(u8),
    Text(&'static str),
}

const ROW_STRS: [&str; NUM_ROWS as usize] = ["a", "b", "c", "d", "e"];

/// Flatten [`INDEX_TO_POSITION`] into `(flap, row, col)` triples, with the
/// sentinels written as `OB` and `V` padded by two empty strings
pub fn flattened_index_to_position() -> Vec<PositionToken> {
    let mut tokens = Vec::with_capacity(BoardIndex::COUNT * 3);
    for position in INDEX_TO_POSITION.iter() {
        match position {
            Position::OffBoard => tokens.extend([
                PositionToken::Text("OB"),
                PositionToken::Text(""),
                PositionToken::Text(""),
            ]),
            Position::Vortex => tokens.extend([
                PositionToken::Text("V"),
                PositionToken::Text(""),
                PositionToken::Text(""),
            ]),
            Position::Square(sq) => {
                tokens.extend([
                    PositionToken::Number(sq.flap()),
                    PositionToken::Text(ROW_STRS[sq.row() as usize - 1]),
                    PositionToken::Number(sq.col()),
                ]);
            }
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{index_to_position, position_to_index};

    #[test]
    fn test_table_lengths() {
        assert_eq!(POSITIONS_TO_INDEX.len(), 182);
        assert_eq!(INDEX_TO_POSITION.len(), 158);
        assert_eq!(flattened_index_to_position().len(), 158 * 3);
    }

    #[test]
    fn test_forward_table_edges() {
        assert_eq!(POSITIONS_TO_INDEX[0], 0);
        assert_eq!(POSITIONS_TO_INDEX[1], 1);
        assert_eq!(POSITIONS_TO_INDEX[120], 120);
        // 1a5 is borrowed from flap 2 (2e5)
        assert_eq!(POSITIONS_TO_INDEX[121], 129);
        assert_eq!(POSITIONS_TO_INDEX[123], 121);
        assert_eq!(POSITIONS_TO_INDEX[181], 157);
    }

    #[test]
    fn test_forward_slot_matches_generation_order() {
        assert_eq!(forward_slot(&"1a1".parse().unwrap()), 1);
        assert_eq!(forward_slot(&"6e4".parse().unwrap()), 120);
        assert_eq!(forward_slot(&"1a5".parse().unwrap()), 121);
        assert_eq!(forward_slot(&"1e6".parse().unwrap()), 130);
        assert_eq!(forward_slot(&"6e6".parse().unwrap()), 180);
    }

    #[test]
    fn test_lookups_agree_with_codec() {
        for index in BoardIndex::all() {
            assert_eq!(lookup_position(index), index_to_position(index));
        }
        for pos in INDEX_TO_POSITION.iter() {
            assert_eq!(lookup_index(pos), position_to_index(pos));
        }
    }

    #[test]
    fn test_flattened_tokens() {
        let tokens = flattened_index_to_position();
        assert_eq!(&tokens[..3], &[
            PositionToken::Text("OB"),
            PositionToken::Text(""),
            PositionToken::Text(""),
        ]);
        assert_eq!(&tokens[3..6], &[
            PositionToken::Number(1),
            PositionToken::Text("a"),
            PositionToken::Number(1),
        ]);
        assert_eq!(tokens[tokens.len() - 3], PositionToken::Text("V"));

        let json = serde_json::to_string(&tokens[..6]).unwrap();
        assert_eq!(json, r#"["OB","","",1,"a",1]"#);
    }
}
