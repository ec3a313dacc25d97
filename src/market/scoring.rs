//! Context-dependent opportunity scores.
//!
//! Three independent scorers, one per [`PlayerCategory`], each summing
//! integer-weighted factors into a 0-100 score:
//!
//! - **Portfolio** (your own players): trend, buyout protection, sale
//!   status, value tier.
//! - **Market** (open-market players): trend, value tier, trend stability.
//! - **Worth it** (other managers' players with a buyout clause): buyout
//!   to value ratio, trend, protection, value tier.
//!
//! The scorers are pure; routing between them happens once, in
//! [`assess`].

use serde::{Deserialize, Serialize};

use crate::market::{
    policy::*,
    types::{PlayerCategory, TrendAnalysis},
};

#[cfg(test)]
mod tests;

/// Everything a scorer looks at. Must be fully populated before scoring:
/// buyout data for other managers' players is cross-referenced from their
/// rosters first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoringInput {
    pub current_value: u64,
    /// Short-window (5 day) percent change.
    pub trend_short: f64,
    /// Long-window (10 day) percent change.
    pub trend_long: f64,
    pub buyout_clause: Option<u64>,
    /// Hours until the buyout clause becomes exercisable; `None` if unknown.
    pub buyout_protection_hours: Option<i64>,
    pub for_sale: bool,
}

impl ScoringInput {
    pub fn from_trends(current_value: u64, short: &TrendAnalysis, long: &TrendAnalysis) -> Self {
        Self {
            current_value,
            trend_short: short.change_percent,
            trend_long: long.change_percent,
            ..Self::default()
        }
    }
}

/// A player's score, tagged with the scorer that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Assessment {
    Portfolio {
        #[serde(rename = "portfolioScore")]
        portfolio_score: u8,
    },
    Market {
        #[serde(rename = "marketScore")]
        market_score: u8,
    },
    Buyout {
        #[serde(rename = "worthItScore")]
        worth_it_score: u8,
    },
}

impl Assessment {
    pub fn score(&self) -> u8 {
        match *self {
            Assessment::Portfolio { portfolio_score } => portfolio_score,
            Assessment::Market { market_score } => market_score,
            Assessment::Buyout { worth_it_score } => worth_it_score,
        }
    }

    pub fn category(&self) -> PlayerCategory {
        match self {
            Assessment::Portfolio { .. } => PlayerCategory::MyPlayer,
            Assessment::Market { .. } => PlayerCategory::MarketPlayer,
            Assessment::Buyout { .. } => PlayerCategory::OtherManagerPlayer,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Assessment::Portfolio { .. } => "Portfolio Score",
            Assessment::Market { .. } => "Market Score",
            Assessment::Buyout { .. } => "Buyout Score",
        }
    }
}

/// Run the scorer that applies to `category`.
pub fn assess(category: PlayerCategory, input: &ScoringInput) -> Assessment {
    match category {
        PlayerCategory::MyPlayer => Assessment::Portfolio {
            portfolio_score: portfolio_score(input),
        },
        PlayerCategory::MarketPlayer => Assessment::Market {
            market_score: market_score(input),
        },
        PlayerCategory::OtherManagerPlayer => Assessment::Buyout {
            worth_it_score: worth_it_score(input),
        },
    }
}

fn trend_points(tiers: &[TrendTier], floor: u8, short: f64, long: f64) -> u8 {
    tiers
        .iter()
        .find(|t| short > t.short || long > t.long)
        .map_or(floor, |t| t.points)
}

fn value_points(tiers: &[ValueTier], floor: u8, value: u64) -> u8 {
    tiers
        .iter()
        .find(|t| value > t.above)
        .map_or(floor, |t| t.points)
}

fn below_points(tiers: &[LimitTier<f64>], floor: u8, x: f64) -> u8 {
    tiers
        .iter()
        .find(|t| x < t.limit)
        .map_or(floor, |t| t.points)
}

/// How attractive it is to buy out another manager's player. 0 without a
/// clause.
pub fn worth_it_score(input: &ScoringInput) -> u8 {
    let Some(clause) = input.buyout_clause.filter(|c| *c > 0) else {
        return 0;
    };

    let ratio_score = if input.current_value == 0 {
        0
    } else {
        let ratio = clause as f64 / input.current_value as f64;
        below_points(&WORTH_IT_RATIO_TIERS, 0, ratio)
    };

    let trend_score = trend_points(
        &WORTH_IT_TREND_TIERS,
        WORTH_IT_TREND_FLOOR,
        input.trend_short,
        input.trend_long,
    );

    let protection_score = match input.buyout_protection_hours {
        None => WORTH_IT_PROTECTION_UNKNOWN,
        Some(hours) => WORTH_IT_PROTECTION_TIERS
            .iter()
            .find(|t| hours <= t.limit)
            .map_or(WORTH_IT_PROTECTION_FLOOR, |t| t.points),
    };

    let value_score = value_points(
        &WORTH_IT_VALUE_TIERS,
        WORTH_IT_VALUE_FLOOR,
        input.current_value,
    );

    (ratio_score + trend_score + protection_score + value_score).min(100)
}

/// How well one of your own players is doing as an asset.
pub fn portfolio_score(input: &ScoringInput) -> u8 {
    let trend_score = trend_points(
        &PORTFOLIO_TREND_TIERS,
        PORTFOLIO_TREND_FLOOR,
        input.trend_short,
        input.trend_long,
    );

    let protection_score = match input.buyout_protection_hours {
        None => PORTFOLIO_PROTECTION_UNKNOWN,
        Some(hours) => PORTFOLIO_PROTECTION_TIERS
            .iter()
            .find(|t| hours > t.limit)
            .map_or(PORTFOLIO_PROTECTION_FLOOR, |t| t.points),
    };

    // Selling a declining asset is good timing; selling a rising one is not.
    let sale_score = match (input.for_sale, input.trend_short < PORTFOLIO_SELL_TREND) {
        (true, true) => PORTFOLIO_SALE_DECLINING,
        (true, false) => PORTFOLIO_SALE_NOT_DECLINING,
        (false, _) => PORTFOLIO_NOT_FOR_SALE,
    };

    let value_score = value_points(
        &PORTFOLIO_VALUE_TIERS,
        PORTFOLIO_VALUE_FLOOR,
        input.current_value,
    );

    (trend_score + protection_score + sale_score + value_score).min(100)
}

/// How attractive an open-market player is to buy.
pub fn market_score(input: &ScoringInput) -> u8 {
    let trend_score = trend_points(
        &MARKET_TREND_TIERS,
        MARKET_TREND_FLOOR,
        input.trend_short,
        input.trend_long,
    );

    let value_score = value_points(&MARKET_VALUE_TIERS, MARKET_VALUE_FLOOR, input.current_value);

    let divergence = (input.trend_short - input.trend_long).abs();
    let stability_score = below_points(&MARKET_STABILITY_TIERS, MARKET_STABILITY_FLOOR, divergence);

    (trend_score + value_score + stability_score).min(100)
}
