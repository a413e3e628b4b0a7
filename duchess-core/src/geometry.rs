//! Six-player board geometry
//!
//! The board is six trapezoidal flaps fanned around a central hexagon.
//! Each flap has 5 rows (a-e) and addresses columns 1-7:
//! - columns 1-4 are the flap's own (discrete) squares
//! - columns 5-6 lie in the shared hexagon ring
//! - column 7 is a reserved slot that is never indexed
//!
//! The vortex is the single center square, outside every flap.

/// Number of flaps (one per player)
pub const NUM_FLAPS: u8 = 6;

/// Rows per flap, a through e
pub const NUM_ROWS: u8 = 5;

/// Columns owned outright by a flap
pub const NUM_COLS_IN_FLAP: u8 = 4;

/// Columns of a flap that lie in the shared hexagon
pub const NUM_COLS_OUT_FLAP: u8 = 2;

/// Column address space per flap, including the reserved slot
pub const NUM_COLS: u8 = NUM_COLS_IN_FLAP + NUM_COLS_OUT_FLAP + 1;

/// Highest column that maps to a square
pub const MAX_INDEXED_COL: u8 = NUM_COLS_IN_FLAP + NUM_COLS_OUT_FLAP;

/// Rows at or above this value in columns 5-6 belong to the flap itself
pub const FIRST_OWNED_HEX_ROW: u8 = 3;

/// Hex squares owned by each flap (2 columns x rows c-e)
pub const HEX_ROWS_OWNED: u8 = NUM_ROWS - FIRST_OWNED_HEX_ROW + 1;

/// Discrete squares in a single flap
pub const SQUARES_PER_FLAP: u8 = NUM_ROWS * NUM_COLS_IN_FLAP;

/// Hex squares owned by a single flap
pub const HEX_SQUARES_PER_FLAP: u8 = NUM_COLS_OUT_FLAP * HEX_ROWS_OWNED;

/// Discrete squares across all flaps
pub const DISCRETE_SQUARES: u8 = NUM_FLAPS * SQUARES_PER_FLAP;

/// Distinct squares in the shared hexagon
pub const HEX_SQUARES: u8 = NUM_FLAPS * HEX_SQUARES_PER_FLAP;

/// First hex index is `HEX_OFFSET + 1`
pub const HEX_OFFSET: u8 = DISCRETE_SQUARES;

/// Index reserved for "no square"
pub const OFF_BOARD_INDEX: u8 = 0;

/// Index of the vortex, always the last one
pub const VORTEX_INDEX: u8 = board_index_count();

/// Every `(flap, row, col)` triple in the address space, reserved column included
pub const fn valid_position_count() -> usize {
    NUM_FLAPS as usize * NUM_ROWS as usize * NUM_COLS as usize
}

/// Number of board squares: discrete squares, hex squares and the vortex.
///
/// Off-board (index 0) is not a square, so valid indices run `0..=board_index_count()`.
pub const fn board_index_count() -> u8 {
    DISCRETE_SQUARES + HEX_SQUARES + 1
}

/// Flap after `flap`, wrapping 6 back to 1
pub const fn next_flap(flap: u8) -> u8 {
    if flap >= NUM_FLAPS {
        1
    } else {
        flap + 1
    }
}

/// Flap before `flap`, wrapping 1 back to 6
pub const fn prev_flap(flap: u8) -> u8 {
    if flap <= 1 {
        NUM_FLAPS
    } else {
        flap - 1
    }
}

/// Rotate a flap number (1-6) by `steps` flaps
pub(crate) const fn rotate_flap(flap: u8, steps: u8) -> u8 {
    (flap - 1 + steps % NUM_FLAPS) % NUM_FLAPS + 1
}
