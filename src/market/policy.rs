//! Scoring policy constants.
//!
//! Every threshold and tier table the valuation engine uses lives here. The
//! values are hand-tuned heuristics, not derived quantities: change them
//! here and every scorer picks them up.
//!
//! Currency amounts are in minor units, so `50_000_000` is "50M€".

/// Below this absolute percent change a window is classified as stable.
pub const STABLE_THRESHOLD_PERCENT: f64 = 2.0;

/// Weights of the 1, 3 and 7 day trends in the momentum score.
pub const MOMENTUM_WEIGHTS: [f64; 3] = [0.4, 0.4, 0.2];

/// One row of a trend tier table.
///
/// The row matches when the short-window percent exceeds `short` or the
/// long-window percent exceeds `long`. Rows are tested top-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendTier {
    pub short: f64,
    pub long: f64,
    pub points: u8,
}

const fn trend_tier(short: f64, long: f64, points: u8) -> TrendTier {
    TrendTier {
        short,
        long,
        points,
    }
}

/// One row of a value tier table: matches when value is strictly above `above`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueTier {
    pub above: u64,
    pub points: u8,
}

const fn value_tier(above: u64, points: u8) -> ValueTier {
    ValueTier { above, points }
}

/// One row of a ratio / hours table: matches when the input is strictly below
/// (or at most, for hours) `limit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitTier<T> {
    pub limit: T,
    pub points: u8,
}

const fn ratio_tier(limit: f64, points: u8) -> LimitTier<f64> {
    LimitTier { limit, points }
}

const fn hours_tier(limit: i64, points: u8) -> LimitTier<i64> {
    LimitTier { limit, points }
}

// Buyout worth-it score: 50 ratio + 25 trend + 20 protection + 5 value.

pub const WORTH_IT_RATIO_TIERS: [LimitTier<f64>; 4] = [
    ratio_tier(0.8, 50),
    ratio_tier(1.0, 40),
    ratio_tier(1.2, 25),
    ratio_tier(1.5, 10),
];
pub const WORTH_IT_TREND_TIERS: [TrendTier; 5] = [
    trend_tier(10.0, 20.0, 25),
    trend_tier(5.0, 10.0, 20),
    trend_tier(0.0, 5.0, 15),
    trend_tier(-5.0, -10.0, 10),
    trend_tier(-10.0, -20.0, 5),
];
pub const WORTH_IT_TREND_FLOOR: u8 = 0;
/// Protection tiers are "hours remaining at most `limit`".
pub const WORTH_IT_PROTECTION_TIERS: [LimitTier<i64>; 4] = [
    hours_tier(0, 20),
    hours_tier(24, 18),
    hours_tier(72, 15),
    hours_tier(168, 12),
];
pub const WORTH_IT_PROTECTION_FLOOR: u8 = 5;
/// Unknown protection is treated as exercisable now.
pub const WORTH_IT_PROTECTION_UNKNOWN: u8 = 20;
pub const WORTH_IT_VALUE_TIERS: [ValueTier; 4] = [
    value_tier(50_000_000, 5),
    value_tier(20_000_000, 4),
    value_tier(10_000_000, 3),
    value_tier(5_000_000, 2),
];
pub const WORTH_IT_VALUE_FLOOR: u8 = 1;

// Portfolio score: 40 trend + 30 protection + 20 sale status + 10 value.

pub const PORTFOLIO_TREND_TIERS: [TrendTier; 5] = [
    trend_tier(15.0, 25.0, 40),
    trend_tier(8.0, 15.0, 35),
    trend_tier(3.0, 8.0, 30),
    trend_tier(-2.0, -5.0, 25),
    trend_tier(-8.0, -15.0, 15),
];
pub const PORTFOLIO_TREND_FLOOR: u8 = 5;
/// Protection tiers are "hours remaining strictly above `limit`".
pub const PORTFOLIO_PROTECTION_TIERS: [LimitTier<i64>; 3] = [
    hours_tier(168, 30),
    hours_tier(72, 25),
    hours_tier(24, 15),
];
pub const PORTFOLIO_PROTECTION_FLOOR: u8 = 5;
pub const PORTFOLIO_PROTECTION_UNKNOWN: u8 = 20;
/// A listed player whose short trend is below this is worth selling.
pub const PORTFOLIO_SELL_TREND: f64 = -5.0;
pub const PORTFOLIO_SALE_DECLINING: u8 = 20;
pub const PORTFOLIO_SALE_NOT_DECLINING: u8 = 5;
pub const PORTFOLIO_NOT_FOR_SALE: u8 = 15;
pub const PORTFOLIO_VALUE_TIERS: [ValueTier; 4] = [
    value_tier(50_000_000, 10),
    value_tier(20_000_000, 8),
    value_tier(10_000_000, 6),
    value_tier(5_000_000, 4),
];
pub const PORTFOLIO_VALUE_FLOOR: u8 = 2;

// Market score: 50 trend + 30 value + 20 stability.

pub const MARKET_TREND_TIERS: [TrendTier; 5] = [
    trend_tier(10.0, 20.0, 50),
    trend_tier(5.0, 10.0, 40),
    trend_tier(0.0, 5.0, 30),
    trend_tier(-5.0, -10.0, 20),
    trend_tier(-10.0, -20.0, 10),
];
pub const MARKET_TREND_FLOOR: u8 = 0;
/// Mid-priced players are preferred over stars.
pub const MARKET_VALUE_TIERS: [ValueTier; 4] = [
    value_tier(50_000_000, 15),
    value_tier(20_000_000, 25),
    value_tier(10_000_000, 30),
    value_tier(5_000_000, 25),
];
pub const MARKET_VALUE_FLOOR: u8 = 20;
/// Tiers over `|short - long|`, matched when strictly below `limit`.
pub const MARKET_STABILITY_TIERS: [LimitTier<f64>; 3] =
    [ratio_tier(5.0, 20), ratio_tier(10.0, 15), ratio_tier(20.0, 10)];
pub const MARKET_STABILITY_FLOOR: u8 = 5;

// Opportunity ranking.

pub const OPPORTUNITY_DEAL_RATIO: f64 = 1.2;
pub const OPPORTUNITY_DEAL_BONUS: f64 = 40.0;
pub const OPPORTUNITY_EXCELLENT_RATIO: f64 = 1.0;
pub const OPPORTUNITY_EXCELLENT_BONUS: f64 = 20.0;
pub const OPPORTUNITY_VALUE_CAP: f64 = 50_000_000.0;
pub const OPPORTUNITY_VALUE_WEIGHT: f64 = 20.0;
pub const OPPORTUNITY_MOMENTUM_GAIN: f64 = 0.5;
pub const OPPORTUNITY_MOMENTUM_MAX: f64 = 15.0;
pub const OPPORTUNITY_MOMENTUM_LOSS: f64 = 0.3;
pub const OPPORTUNITY_MOMENTUM_MIN: f64 = -10.0;
pub const OPPORTUNITY_POINTS_CAP: f64 = 10.0;
pub const OPPORTUNITY_POINTS_WEIGHT: f64 = 10.0;
/// Sale urgency bonus, matched when hours left are at most `limit`.
pub const OPPORTUNITY_URGENCY_TIERS: [(f64, f64); 3] = [(12.0, 5.0), (24.0, 3.0), (48.0, 1.0)];

// Alerts and screens.

pub const ALERT_SHORT_DROP_PERCENT: f64 = 5.0;
pub const ALERT_SHORT_GROWTH_PERCENT: f64 = 10.0;
pub const ALERT_LONG_DECLINE_PERCENT: f64 = 10.0;
/// Clauses below `value * ratio` are flagged on your own players.
pub const ALERT_LOW_BUYOUT_RATIO: f64 = 1.5;
pub const ALERT_HOURS_PRECISION: i64 = 48;
pub const ALERT_DAYS_HORIZON: i64 = 168;
/// Other managers' clauses below `value * ratio` count as cheap.
pub const SCREEN_LOW_BUYOUT_RATIO: f64 = 1.2;
