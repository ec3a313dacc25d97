//! Squad screens and per-player status helpers.

use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::market::{
    format::{fractional_hours_until, hours_until, round1},
    momentum::{momentum_score, MomentumTrends},
    policy::SCREEN_LOW_BUYOUT_RATIO,
    types::{MarketValuePoint, Player, SaleInfo},
};

/// A player with its short-term momentum, when history was available.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPlayer {
    #[serde(flatten)]
    pub player: Player,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub momentum: Option<MomentumTrends>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub momentum_score: Option<f64>,
}

impl EnrichedPlayer {
    /// Attach momentum computed from `history`. An empty history leaves the
    /// player unenriched.
    pub fn enrich(player: Player, history: &[MarketValuePoint]) -> Self {
        if history.is_empty() {
            return Self {
                player,
                momentum: None,
                momentum_score: None,
            };
        }
        let trends = MomentumTrends::from_history(history);
        Self {
            player,
            momentum_score: Some(momentum_score(&trends)),
            momentum: Some(trends),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_players: usize,
    pub total_value: u64,
    pub total_points: i64,
    /// Rounded to one decimal; 0 for an empty squad.
    pub average_points: f64,
}

pub fn summary_stats(players: &[Player]) -> SummaryStats {
    let total_value = players.iter().map(|p| p.master.market_value).sum();
    let total_points: i64 = players.iter().map(|p| p.master.points).sum();
    let average_points = if players.is_empty() {
        0.0
    } else {
        round1(total_points as f64 / players.len() as f64)
    };

    SummaryStats {
        total_players: players.len(),
        total_value,
        total_points,
        average_points,
    }
}

/// Players whose clause is under 1.2x their value and whose protection is
/// absent or ends within `horizon_hours`. `value_of` gives each player's
/// current value.
pub fn low_buyout<'a, F>(
    players: &'a [Player],
    value_of: F,
    now: DateTime<Utc>,
    horizon_hours: i64,
) -> Vec<&'a Player>
where
    F: Fn(&Player) -> u64,
{
    players
        .iter()
        .filter(|p| {
            let Some(clause) = p.buyout() else {
                return false;
            };
            let cheap = (clause as f64) < value_of(*p) as f64 * SCREEN_LOW_BUYOUT_RATIO;
            let exposed = p
                .buyout_clause_locked_end_time
                .map_or(true, |end| end - now <= Duration::hours(horizon_hours));
            cheap && exposed
        })
        .collect()
}

/// Players whose protection ends within `warning_hours`, already expired
/// ones included.
pub fn expiring_protection<'a>(
    players: &'a [Player],
    now: DateTime<Utc>,
    warning_hours: i64,
) -> Vec<&'a Player> {
    players
        .iter()
        .filter(|p| {
            p.buyout_clause_locked_end_time
                .is_some_and(|end| fractional_hours_until(end, now) <= warning_hours as f64)
        })
        .collect()
}

/// Players with momentum strictly above `minimum_momentum`.
pub fn trending_up(players: &[EnrichedPlayer], minimum_momentum: f64) -> Vec<&EnrichedPlayer> {
    players
        .iter()
        .filter(|p| {
            p.momentum_score
                .is_some_and(|m| m != 0.0 && m > minimum_momentum)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuyoutStatus {
    Unprotected,
    Expired,
    Expiring { hours: i64 },
    Protected { days: i64 },
}

impl fmt::Display for BuyoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuyoutStatus::Unprotected => write!(f, "No protection"),
            BuyoutStatus::Expired => write!(f, "Protection expired"),
            BuyoutStatus::Expiring { hours } => write!(f, "{}h left", hours),
            BuyoutStatus::Protected { days } => write!(f, "{}d left", days),
        }
    }
}

impl Serialize for BuyoutStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Protection state of a player's clause; `None` without a clause.
pub fn buyout_status(player: &Player, now: DateTime<Utc>) -> Option<BuyoutStatus> {
    player.buyout()?;

    let Some(end) = player.buyout_clause_locked_end_time else {
        return Some(BuyoutStatus::Unprotected);
    };
    if end <= now {
        return Some(BuyoutStatus::Expired);
    }

    let hours = hours_until(end, now);
    if hours <= 24 {
        Some(BuyoutStatus::Expiring { hours })
    } else {
        Some(BuyoutStatus::Protected {
            days: (hours + 23) / 24,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleStatus {
    Active { hours_left: i64 },
    Expired,
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaleStatus::Active { hours_left } => write!(f, "Expires in {}h", hours_left),
            SaleStatus::Expired => write!(f, "Sale expired"),
        }
    }
}

pub fn sale_status(sale: &SaleInfo, now: DateTime<Utc>) -> SaleStatus {
    if sale.expiration_date <= now {
        SaleStatus::Expired
    } else {
        SaleStatus::Active {
            hours_left: hours_until(sale.expiration_date, now),
        }
    }
}

/// A listing's asking price against the player's market value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDifference {
    pub difference: i64,
    /// Percent of market value, one decimal. 0 when the value is unknown.
    pub percent: f64,
    pub is_good_deal: bool,
}

pub fn price_difference(sale_price: u64, market_value: u64) -> PriceDifference {
    let difference = sale_price as i64 - market_value as i64;
    let percent = if market_value == 0 {
        0.0
    } else {
        round1(difference as f64 / market_value as f64 * 100.0)
    };

    PriceDifference {
        difference,
        percent,
        is_good_deal: difference < 0,
    }
}
