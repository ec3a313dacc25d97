//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::market::types::TrendDirection;
use types::{
    filters::{AnalysisMode, AnalysisSort, ScreenKind},
    ids::PlayerId,
    position::Position,
    time::ReferenceTime,
};

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// League snapshot JSON (or set `FANTASY_MARKET_SNAPSHOT` env var).
    #[clap(long, short, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Config file (or set `FANTASY_MARKET_CONFIG` env var).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference time for expiry and protection countdowns (RFC 3339).
    #[clap(long, global = true)]
    pub now: Option<ReferenceTime>,

    /// Log debug diagnostics to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score every player in the snapshot and list the ones matching a mode.
    Analyze {
        /// Portfolio, market or buyout view.
        #[clap(long, value_enum, default_value_t = AnalysisMode::default())]
        mode: AnalysisMode,

        /// Keep only these short-window trends (repeatable): `--trend rising --trend stable`.
        #[clap(long = "trend", value_enum)]
        trends: Option<Vec<TrendDirection>>,

        /// Filter by position (repeatable): `-p MID -p FWD`.
        #[clap(short = 'p', long = "position")]
        positions: Option<Vec<Position>>,

        /// Only players with at least this many alerts.
        #[clap(long, default_value_t = 0)]
        min_alerts: usize,

        /// Result ordering.
        #[clap(long, value_enum, default_value_t = AnalysisSort::default())]
        sort: AnalysisSort,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Leave your own squad out of the run.
        #[clap(long)]
        skip_my_players: bool,

        /// Leave league market listings out of the run.
        #[clap(long)]
        skip_market: bool,

        /// Leave other managers' listings out of the run.
        #[clap(long)]
        skip_other_managers: bool,

        /// Cap on market listings considered (defaults to the config value).
        #[clap(long)]
        max_market_players: Option<usize>,
    },

    /// Rank market listings by opportunity score.
    Opportunities {
        /// Show at most this many players.
        #[clap(long, short)]
        limit: Option<usize>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Trend windows and momentum for one player.
    Trend {
        /// Player ID.
        player_id: PlayerId,

        /// Report a single window of this many data points.
        #[clap(long, short)]
        window: Option<usize>,

        /// Score the player as this category (my-player, market-player,
        /// other-manager-player). Defaults to market-player.
        #[clap(long, short)]
        category: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Run a squad screen and print squad totals.
    Screen {
        /// Which screen to run.
        #[clap(long, value_enum)]
        kind: ScreenKind,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "fantasy-market",
    about = "Market value trends and buy/sell scoring for fantasy football leagues"
)]
pub struct FantasyMarket {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}
