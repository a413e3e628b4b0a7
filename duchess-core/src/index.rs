//! Dense board indices
//!
//! `0` is off-board, `1..=120` the discrete flap squares, `121..=156` the
//! central hexagon, and `157` the vortex.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::geometry::{HEX_OFFSET, OFF_BOARD_INDEX, VORTEX_INDEX};

/// Index into board-state arrays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u8")]
pub struct BoardIndex(u8);

impl BoardIndex {
    pub const OFF_BOARD: BoardIndex = BoardIndex(OFF_BOARD_INDEX);
    pub const VORTEX: BoardIndex = BoardIndex(VORTEX_INDEX);

    /// Number of distinct indices, off-board included
    pub const COUNT: usize = VORTEX_INDEX as usize + 1;

    pub fn new(value: u32) -> Result<Self> {
        if value <= VORTEX_INDEX as u32 {
            Ok(Self(value as u8))
        } else {
            Err(BoardError::InvalidIndex(value))
        }
    }

    pub(crate) const fn new_unchecked(value: u8) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub const fn is_off_board(self) -> bool {
        self.0 == OFF_BOARD_INDEX
    }

    pub const fn is_vortex(self) -> bool {
        self.0 == VORTEX_INDEX
    }

    /// In the central hexagon (121-156)
    pub const fn is_hexagon(self) -> bool {
        self.0 > HEX_OFFSET && self.0 < VORTEX_INDEX
    }

    /// Every index from off-board to the vortex, in order
    pub fn all() -> impl Iterator<Item = BoardIndex> {
        (OFF_BOARD_INDEX..=VORTEX_INDEX).map(BoardIndex)
    }
}

impl TryFrom<u32> for BoardIndex {
    type Error = BoardError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<BoardIndex> for u8 {
    fn from(index: BoardIndex) -> Self {
        index.0
    }
}

impl fmt::Display for BoardIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
