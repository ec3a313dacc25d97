use crate::cli::types::{ids::PlayerId, position::Position, time::parse_timestamp};
use chrono::{DateTime, Utc};
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MarketError;


fn de_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(D::Error::custom)
}

fn de_opt_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_timestamp(s).map(Some).map_err(D::Error::custom),
    }
}

/// One observed valuation of a player.
///
/// Values of zero or below are sentinels for missing data and never take
/// part in a trend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MarketValuePoint {
    #[serde(deserialize_with = "de_timestamp")]
    pub date: DateTime<Utc>,
    #[serde(rename = "marketValue")]
    pub market_value: i64,
}

impl MarketValuePoint {
    pub fn new(date: DateTime<Utc>, market_value: i64) -> Self {
        Self { date, market_value }
    }
}

/// Direction of a market-value window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
    #[value(name = "insufficient_data")]
    InsufficientData,
    Unknown,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrendDirection::Rising => "rising",
            TrendDirection::Falling => "falling",
            TrendDirection::Stable => "stable",
            TrendDirection::InsufficientData => "insufficient_data",
            TrendDirection::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Result of analyzing one trend window.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub trend: TrendDirection,
    pub change: i64,
    pub change_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub latest_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub oldest_value: Option<i64>,
    pub data_points: usize,
}

/// How a player relates to the caller. Decides which scorer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerCategory {
    MyPlayer,
    MarketPlayer,
    OtherManagerPlayer,
}

impl PlayerCategory {
    /// Parse a category tag, defaulting to `MarketPlayer` for anything
    /// unrecognised or missing.
    pub fn from_tag_or_market(tag: Option<&str>) -> Self {
        tag.and_then(|t| t.parse().ok())
            .unwrap_or(PlayerCategory::MarketPlayer)
    }
}

impl fmt::Display for PlayerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerCategory::MyPlayer => "my-player",
            PlayerCategory::MarketPlayer => "market-player",
            PlayerCategory::OtherManagerPlayer => "other-manager-player",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PlayerCategory {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "my-player" | "my" => Ok(PlayerCategory::MyPlayer),
            "market-player" | "market" => Ok(PlayerCategory::MarketPlayer),
            "other-manager-player" | "other-manager" => Ok(PlayerCategory::OtherManagerPlayer),
            _ => Err(MarketError::InvalidCategory {
                category: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleInfo {
    pub sale_price: u64,
    #[serde(deserialize_with = "de_timestamp")]
    pub expiration_date: DateTime<Utc>,
    #[serde(default)]
    pub number_of_offers: u32,
}

/// Player attributes shared by every API shape.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMaster {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    pub position_id: u8,
    pub team: Team,
    pub market_value: u64,
    #[serde(default)]
    pub player_status: Option<String>,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub average_points: f64,
}

impl PlayerMaster {
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.name)
    }

    pub fn position(&self) -> Option<Position> {
        Position::try_from(self.position_id).ok()
    }
}

/// A player on a squad, with ownership details.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(flatten)]
    pub master: PlayerMaster,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyout_clause: Option<u64>,
    #[serde(
        default,
        deserialize_with = "de_opt_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub buyout_clause_locked_end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_info: Option<SaleInfo>,
}

impl Player {
    pub fn id(&self) -> &PlayerId {
        &self.master.id
    }

    /// A clause of zero means "no clause".
    pub fn buyout(&self) -> Option<u64> {
        self.buyout_clause.filter(|c| *c > 0)
    }

    pub fn from_roster_entry(entry: &RosterEntry) -> Self {
        Self {
            master: entry.player_master.clone(),
            buyout_clause: entry.buyout_clause,
            buyout_clause_locked_end_time: entry.buyout_clause_locked_end_time,
            sale_info: None,
        }
    }

    pub fn from_listing(listing: &MarketListing) -> Self {
        Self {
            master: listing.player_master.clone(),
            buyout_clause: None,
            buyout_clause_locked_end_time: None,
            sale_info: Some(SaleInfo {
                sale_price: listing.sale_price,
                expiration_date: listing.expiration_date,
                number_of_offers: listing.number_of_bids,
            }),
        }
    }
}

/// Who is selling a market listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ListingKind {
    /// Sold by the league itself (open market).
    #[serde(rename = "marketPlayerLeague")]
    League,
    /// Put up for sale by another manager.
    #[serde(rename = "marketPlayerTeam")]
    Team,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketListing {
    pub id: String,
    pub discr: ListingKind,
    pub player_master: PlayerMaster,
    pub sale_price: u64,
    #[serde(deserialize_with = "de_timestamp")]
    pub expiration_date: DateTime<Utc>,
    #[serde(default)]
    pub number_of_bids: u32,
}

/// Another manager's squad, as needed to find buyout clauses.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamRoster {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub players: Vec<RosterEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub player_master: PlayerMaster,
    #[serde(default)]
    pub buyout_clause: Option<u64>,
    #[serde(default, deserialize_with = "de_opt_timestamp")]
    pub buyout_clause_locked_end_time: Option<DateTime<Utc>>,
}
