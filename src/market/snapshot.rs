//! League snapshot: the offline input of every command.
//!
//! A snapshot is one JSON document gathered by an external fetcher: the
//! caller's squad, the current market listings, the other managers' rosters
//! and per-player valuation history.

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};
use tracing::debug;

use crate::{
    cli::types::ids::PlayerId,
    error::{MarketError, Result},
    market::types::{ListingKind, MarketListing, MarketValuePoint, Player, RosterEntry, TeamRoster},
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSnapshot {
    #[serde(default)]
    pub my_players: Vec<Player>,
    #[serde(default)]
    pub market: Vec<MarketListing>,
    #[serde(default)]
    pub teams: Vec<TeamRoster>,
    #[serde(default)]
    pub market_values: HashMap<PlayerId, Vec<MarketValuePoint>>,
    #[serde(default)]
    pub latest_values: HashMap<PlayerId, u64>,
}

impl LeagueSnapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&raw)?;
        debug!(
            path = %path.display(),
            my_players = snapshot.my_players.len(),
            listings = snapshot.market.len(),
            teams = snapshot.teams.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Valuation history for a player; empty when none was captured.
    pub fn history(&self, id: &PlayerId) -> &[MarketValuePoint] {
        self.market_values.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Most recent value reported for a player. Zero is treated as missing.
    pub fn latest_value(&self, id: &PlayerId) -> Option<u64> {
        self.latest_values.get(id).copied().filter(|v| *v > 0)
    }

    /// The latest value when known, else the player's listed market value.
    pub fn current_value(&self, player: &Player) -> u64 {
        self.latest_value(player.id())
            .unwrap_or(player.master.market_value)
    }

    /// Whether anything at all is known about a player's value.
    pub fn has_value_data(&self, id: &PlayerId) -> bool {
        !self.history(id).is_empty() || self.latest_value(id).is_some()
    }

    pub fn is_mine(&self, id: &PlayerId) -> bool {
        self.my_players.iter().any(|p| p.id() == id)
    }

    pub fn listings(&self, kind: ListingKind) -> impl Iterator<Item = &MarketListing> {
        self.market.iter().filter(move |l| l.discr == kind)
    }

    /// The roster entry of a player owned by another manager, first team
    /// wins.
    pub fn find_roster_entry(&self, id: &PlayerId) -> Option<&RosterEntry> {
        self.teams
            .iter()
            .flat_map(|t| t.players.iter())
            .find(|e| &e.player_master.id == id)
    }

    /// Look a player up among own players, listings and rosters, in that
    /// order.
    pub fn find_player(&self, id: &PlayerId) -> Result<Player> {
        if let Some(p) = self.my_players.iter().find(|p| p.id() == id) {
            return Ok(p.clone());
        }
        if let Some(l) = self.market.iter().find(|l| &l.player_master.id == id) {
            return Ok(Player::from_listing(l));
        }
        self.find_roster_entry(id)
            .map(Player::from_roster_entry)
            .ok_or_else(|| MarketError::PlayerNotFound { id: id.to_string() })
    }
}
