//! Command implementations for the fantasy market CLI

pub mod analyze;
pub mod common;
pub mod opportunities;
pub mod screen;
pub mod trend;

use std::path::PathBuf;

use crate::{error::MarketError, Result, SNAPSHOT_ENV_VAR};


/// Snapshot path from the flag, falling back to `FANTASY_MARKET_SNAPSHOT`.
pub fn resolve_snapshot_path(snapshot: Option<PathBuf>) -> Result<PathBuf> {
    snapshot
        .or_else(|| {
            std::env::var_os(SNAPSHOT_ENV_VAR)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        })
        .ok_or_else(|| MarketError::MissingSnapshot {
            env_var: SNAPSHOT_ENV_VAR.to_string(),
        })
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
