//! Tables command - emit the position/index lookup tables
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), render_table()
//! - Level 3: render_index_table(), render_position_table()
//! - Level 4: per-format token writers

use anyhow::Result;
use clap::Args;

use duchess_core::{flattened_index_to_position, positions_to_index, PositionToken};

use crate::config::{OutputFormat, TableConfig, TableKind};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct TablesArgs {
    /// Number of players (only 6 is supported)
    #[arg(long)]
    pub num_players: u8,

    /// Table to emit
    #[arg(long, value_enum)]
    pub output_type: TableKind,

    /// Output format
    #[arg(long, value_enum, default_value = "list")]
    pub format: OutputFormat,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run tables command
///
/// 1. Validate configuration
/// 2. Render the requested table
/// 3. Print it on stdout
pub fn run(args: TablesArgs) -> Result<()> {
    let config = build_config(&args)?;

    tracing::info!(
        "Emitting {:?} table for {} players as {:?}",
        config.kind,
        config.num_players,
        config.format
    );

    let rendered = render_table(&config)?;
    println!("{}", rendered);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Turn command arguments into a validated config
fn build_config(args: &TablesArgs) -> Result<TableConfig> {
    let config = TableConfig::for_kind(args.output_type)
        .with_players(args.num_players)
        .with_format(args.format);
    config.validate()?;
    Ok(config)
}

/// Render the configured table as text
pub fn render_table(config: &TableConfig) -> Result<String> {
    match config.kind {
        TableKind::Index => render_index_table(config.format),
        TableKind::Positions => render_position_table(config.format),
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn render_index_table(format: OutputFormat) -> Result<String> {
    let table = positions_to_index();
    tracing::debug!("Forward table has {} entries", table.len());

    Ok(match format {
        OutputFormat::List => bracketed(table.iter().map(|i| i.to_string())),
        OutputFormat::Json => serde_json::to_string(table)?,
        OutputFormat::Cpp => cpp_array(
            "const unsigned char sixPlayerPositionsToIndex",
            table.iter().map(|i| i.to_string()),
        ),
    })
}

fn render_position_table(format: OutputFormat) -> Result<String> {
    let tokens = flattened_index_to_position();
    tracing::debug!("Inverse table has {} tokens", tokens.len());

    Ok(match format {
        OutputFormat::List => bracketed(tokens.iter().map(list_token)),
        OutputFormat::Json => serde_json::to_string(&tokens)?,
        OutputFormat::Cpp => cpp_array(
            "const char sixPlayerIndexToPosition",
            tokens.iter().map(cpp_token),
        ),
    })
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn bracketed(items: impl Iterator<Item = String>) -> String {
    format!("[{}]", items.collect::<Vec<_>>().join(", "))
}

fn cpp_array(declaration: &str, items: impl Iterator<Item = String>) -> String {
    let items: Vec<String> = items.collect();
    format!("{}[{}] = {{{}}};", declaration, items.len(), items.join(", "))
}

fn list_token(token: &PositionToken) -> String {
    match token {
        PositionToken::Number(n) => n.to_string(),
        PositionToken::Text(s) => format!("'{}'", s),
    }
}

/// Row letters become char literals; the sentinels and their padding are
/// zero, since the engine decodes index 0 and the vortex without the table
fn cpp_token(token: &PositionToken) -> String {
    match token {
        PositionToken::Number(n) => n.to_string(),
        PositionToken::Text(s) if s.len() == 1 && s.as_bytes()[0].is_ascii_lowercase() => {
            format!("'{}'", s)
        }
        PositionToken::Text(_) => "0".to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_rejects_four_players() {
        let args = TablesArgs {
            num_players: 4,
            output_type: TableKind::Index,
            format: OutputFormat::List,
        };
        assert!(build_config(&args).is_err());
    }

    #[test]
    fn test_index_list() {
        let out = render_table(&TableConfig::for_kind(TableKind::Index)).unwrap();
        assert!(out.starts_with("[0, 1, 2, 3, 4, 5, 6,"));
        assert!(out.ends_with(", 157]"));
        assert_eq!(out.matches(", ").count(), 181);
    }

    #[test]
    fn test_positions_list() {
        let out = render_table(&TableConfig::for_kind(TableKind::Positions)).unwrap();
        assert!(out.starts_with("['OB', '', '', 1, 'a', 1, 1, 'b', 1,"));
        assert!(out.ends_with("6, 'e', 6, 'V', '', '']"));
    }

    #[test]
    fn test_json_formats() {
        let config = TableConfig::for_kind(TableKind::Index).with_format(OutputFormat::Json);
        let out = render_table(&config).unwrap();
        let parsed: Vec<u8> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 182);

        let config = TableConfig::for_kind(TableKind::Positions).with_format(OutputFormat::Json);
        let out = render_table(&config).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 158 * 3);
        assert_eq!(parsed[0], "OB");
        assert_eq!(parsed[3], 1);
    }

    #[test]
    fn test_cpp_format() {
        let config = TableConfig::for_kind(TableKind::Positions).with_format(OutputFormat::Cpp);
        let out = render_table(&config).unwrap();
        assert!(out.starts_with("const char sixPlayerIndexToPosition[474] = {0, 0, 0, 1, 'a', 1,"));
        assert!(out.ends_with("6, 'e', 6, 0, 0, 0};"));

        let config = TableConfig::for_kind(TableKind::Index).with_format(OutputFormat::Cpp);
        let out = render_table(&config).unwrap();
        assert!(out.starts_with("const unsigned char sixPlayerPositionsToIndex[182] = {0, 1,"));
    }
}
