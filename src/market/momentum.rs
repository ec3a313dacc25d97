//! Short-term momentum from 1, 3 and 7 day trends.

use serde::{Deserialize, Serialize};

use crate::market::{
    format::round2,
    policy::MOMENTUM_WEIGHTS,
    trend::trend_percentage,
    types::MarketValuePoint,
};

/// Percent changes over the last 1, 3 and 7 days. Missing trends are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct MomentumTrends {
    #[serde(rename = "last1Days", default)]
    pub last_1_days: f64,
    #[serde(rename = "last3Days", default)]
    pub last_3_days: f64,
    #[serde(rename = "last7Days", default)]
    pub last_7_days: f64,
}

impl MomentumTrends {
    pub fn from_history(points: &[MarketValuePoint]) -> Self {
        Self {
            last_1_days: trend_percentage(points, 1),
            last_3_days: trend_percentage(points, 3),
            last_7_days: trend_percentage(points, 7),
        }
    }
}

/// Weighted blend of the three trends, rounded to two decimals.
///
/// Positive is favorable momentum, negative unfavorable. Not clamped.
pub fn momentum_score(trends: &MomentumTrends) -> f64 {
    let [w1, w3, w7] = MOMENTUM_WEIGHTS;
    round2(trends.last_1_days * w1 + trends.last_3_days * w3 + trends.last_7_days * w7)
}
