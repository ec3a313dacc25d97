//! Fantasy Market Analysis Library
//!
//! Market-value trend analysis and buy/sell scoring for a fantasy football
//! league, computed offline from a league snapshot.
//!
//! ## Features
//!
//! - **Trend Analysis**: Percent change over configurable windows of valuation history
//! - **Momentum**: Weighted 1/3/7 day trend blend
//! - **Opportunity Scores**: Portfolio, market and buyout worth-it scores (0-100)
//! - **Opportunity Ranking**: Unbounded composite score to order buy candidates
//! - **Alerts and Recommendations**: Drops, expiring sales and buyout protection
//! - **Screens**: Cheap buyouts, expiring protection and trending players
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use fantasy_market::market::{analyze_trend, MarketValuePoint, TrendDirection};
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let history = vec![
//!     MarketValuePoint::new(start, 10_000_000),
//!     MarketValuePoint::new(start + Duration::days(1), 11_000_000),
//! ];
//!
//! let trend = analyze_trend(&history, 5);
//! assert_eq!(trend.trend, TrendDirection::Rising);
//! assert_eq!(trend.change_percent, 10.0);
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a snapshot once instead of passing `--snapshot` to every
//! command:
//! ```bash
//! export FANTASY_MARKET_SNAPSHOT=~/league.json
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod market;

// Re-export commonly used types
pub use cli::types::{ids::PlayerId, position::Position, time::ReferenceTime};
pub use error::{MarketError, Result};
pub use market::{LeagueSnapshot, PlayerAnalysis, PlayerCategory};

/// Environment variable naming the league snapshot file.
pub const SNAPSHOT_ENV_VAR: &str = "FANTASY_MARKET_SNAPSHOT";

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "FANTASY_MARKET_CONFIG";
