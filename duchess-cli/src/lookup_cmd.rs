//! Lookup command - convert one position or index
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: resolve(), report()
//! - Level 3: parse_query()

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use duchess_core::{index_to_position, position_to_index, value_to_position, BoardIndex, Position};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct LookupArgs {
    /// Position (e.g. 3c4, OB, V) or board index (0-157)
    pub value: String,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

/// What the user asked about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Query {
    Position(Position),
    Index(u32),
}

/// A resolved lookup
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    /// Input as given
    pub input: String,
    pub index: BoardIndex,
    /// Owner-form notation for the index
    pub canonical: String,
    /// Input was a borrowed hexagon coordinate
    pub borrowed: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: LookupArgs) -> Result<()> {
    let result = resolve(&args.value)?;

    if result.borrowed {
        tracing::warn!(
            "{} is a borrowed coordinate; canonical form is {}",
            result.input,
            result.canonical
        );
    }

    report(&result, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Resolve a position or index to both forms
pub fn resolve(value: &str) -> Result<LookupResult> {
    let query = parse_query(value)?;

    let (index, borrowed) = match query {
        Query::Position(position) => {
            let borrowed = position.as_square().is_some_and(|sq| sq.is_borrowed());
            (position_to_index(&position), borrowed)
        }
        Query::Index(value) => {
            let position = value_to_position(value)
                .with_context(|| format!("Cannot look up index {}", value))?;
            (position_to_index(&position), false)
        }
    };

    Ok(LookupResult {
        input: value.to_string(),
        index,
        canonical: index_to_position(index).to_string(),
        borrowed,
    })
}

fn report(result: &LookupResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{} -> index {} ({})", result.input, result.index, result.canonical);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Numbers are indices, anything else must be position notation
fn parse_query(value: &str) -> Result<Query> {
    let value = value.trim();
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        let index = value
            .parse::<u32>()
            .with_context(|| format!("Index out of range: {}", value))?;
        return Ok(Query::Index(index));
    }

    let position = value
        .parse::<Position>()
        .with_context(|| format!("Cannot parse position: {}", value))?;
    Ok(Query::Position(position))
}

// ============================================================================
// TESTS
// ============================================================================
