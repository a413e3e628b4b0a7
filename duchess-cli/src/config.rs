//! Configuration types for table generation
//!
//! Level 4 - Utilities and configuration

use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::Serialize;

use duchess_core::NUM_FLAPS;

/// Player count with a coordinate system defined
pub const SUPPORTED_PLAYERS: u8 = NUM_FLAPS;

/// Which lookup table to emit
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Position -> board index
    Index,
    /// Board index -> position
    Positions,
}

/// How the emitted table is written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bracketed list, e.g. `[0, 1, 2]` or `['OB', '', '', 1, 'a', 1]`
    #[default]
    List,
    /// JSON array
    Json,
    /// C++ array definition for engine sources
    Cpp,
}

/// Settings for a single table emission
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableConfig {
    /// Number of players the board is laid out for
    pub num_players: u8,
    /// Table to emit
    pub kind: TableKind,
    /// Output format
    pub format: OutputFormat,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_players: SUPPORTED_PLAYERS,
            kind: TableKind::Index,
            format: OutputFormat::default(),
        }
    }
}

impl TableConfig {
    /// Config for the given table in the default format
    pub fn for_kind(kind: TableKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Set player count
    pub fn with_players(mut self, num_players: u8) -> Self {
        self.num_players = num_players;
        self
    }

    /// Set output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Reject configurations without a coordinate system
    pub fn validate(&self) -> Result<()> {
        if self.num_players != SUPPORTED_PLAYERS {
            bail!(
                "Only {} player conversions possible (got {})",
                SUPPORTED_PLAYERS,
                self.num_players
            );
        }
        Ok(())
    }
}
