//! Duchess Core - Six-player board coordinates
//!
//! This crate provides the coordinate system for six-player Duchess:
//! - Board geometry (six flaps around a shared hexagon and the vortex)
//! - Positions in `3c4` / `OB` / `V` notation
//! - Dense board indices (0-157)
//! - Position <-> index conversion, with borrowed hexagon squares
//!   collapsing onto their owner's index
//! - Compile-time lookup tables for engine sources

pub mod geometry;
pub mod position;
pub mod index;
pub mod codec;
pub mod tables;
pub mod error;

// Re-exports for convenient access
pub use geometry::{board_index_count, valid_position_count, NUM_FLAPS, NUM_ROWS};
pub use position::{Position, Region, Square, row_to_char, char_to_row};
pub use index::BoardIndex;
pub use codec::{
    coordinates_to_index, index_to_position, position_to_index, value_to_position, Ownership,
};
pub use tables::{
    flattened_index_to_position, index_to_position_table, positions_to_index, PositionToken,
};
pub use error::{BoardError, Result};
