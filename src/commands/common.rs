//! Shared setup for every command: snapshot, configuration and clock.

use std::{collections::HashSet, path::PathBuf};
use tracing::debug;

use crate::{
    cli::types::{ids::PlayerId, time::ReferenceTime},
    core::config::{load_config, AnalysisConfig},
    market::{
        snapshot::LeagueSnapshot,
        types::{ListingKind, MarketListing, Player},
    },
    Result,
};

use super::resolve_snapshot_path;

/// Resources every command works from.
pub struct CommandContext {
    pub snapshot: LeagueSnapshot,
    pub config: AnalysisConfig,
    pub now: ReferenceTime,
}

/// Global options as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    pub snapshot: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub now: Option<ReferenceTime>,
}

impl CommandContext {
    pub fn new(options: ContextOptions) -> Result<Self> {
        let config = load_config(options.config.as_deref())?;
        let path = resolve_snapshot_path(options.snapshot)?;
        let snapshot = LeagueSnapshot::load(&path)?;
        let now = options.now.unwrap_or_default();
        debug!(now = %now, ?config, "command context ready");

        Ok(Self {
            snapshot,
            config,
            now,
        })
    }

    /// Build a context from values already in memory.
    pub fn from_parts(snapshot: LeagueSnapshot, config: AnalysisConfig, now: ReferenceTime) -> Self {
        Self {
            snapshot,
            config,
            now,
        }
    }

    /// Market listings within the configured limit, or `limit` if given.
    pub fn market_window(&self, limit: Option<usize>) -> &[MarketListing] {
        let limit = limit.unwrap_or(self.config.max_market_players);
        let market = &self.snapshot.market;
        &market[..limit.min(market.len())]
    }

    /// Other managers' players that are not in the market window, each once.
    /// Buyout details come straight from their roster entry.
    pub fn unlisted_rival_players(&self) -> Vec<Player> {
        let snapshot = &self.snapshot;
        let mut seen: HashSet<&PlayerId> = self
            .market_window(None)
            .iter()
            .map(|l| &l.player_master.id)
            .collect();

        snapshot
            .teams
            .iter()
            .flat_map(|t| t.players.iter())
            .filter(|e| !snapshot.is_mine(&e.player_master.id))
            .filter(|&e| seen.insert(&e.player_master.id))
            .map(Player::from_roster_entry)
            .collect()
    }

    /// A listed player carrying the buyout details from its owner's roster,
    /// when the listing comes from another manager.
    pub fn listed_player(&self, listing: &MarketListing) -> Player {
        let mut player = Player::from_listing(listing);
        if listing.discr == ListingKind::Team {
            if let Some(entry) = self.snapshot.find_roster_entry(&listing.player_master.id) {
                player.buyout_clause = entry.buyout_clause;
                player.buyout_clause_locked_end_time = entry.buyout_clause_locked_end_time;
            }
        }
        player
    }
}
