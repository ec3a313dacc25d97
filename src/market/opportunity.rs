//! Composite ranking of buy candidates.
//!
//! Unlike the per-category scores this one is unbounded and never shown as a
//! normalized number; it only orders a candidate list, best deal first:
//! cheap buyouts, then valuable players, then momentum, points and urgency.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    cli::types::ids::PlayerId,
    market::{
        format::fractional_hours_until,
        policy::*,
        screens::{price_difference, PriceDifference},
    },
};


/// The fields the ranking reads from a player.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityCandidate {
    pub id: PlayerId,
    pub name: String,
    pub market_value: u64,
    pub buyout_clause: Option<u64>,
    pub momentum_score: Option<f64>,
    pub average_points: f64,
    pub sale_expiration: Option<DateTime<Utc>>,
    /// Asking price when the player is listed for sale.
    pub sale_price: Option<u64>,
}

impl OpportunityCandidate {
    /// Asking price against market value; `None` when not listed.
    pub fn price_difference(&self) -> Option<PriceDifference> {
        self.sale_price
            .map(|price| price_difference(price, self.market_value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOpportunity {
    #[serde(flatten)]
    pub candidate: OpportunityCandidate,
    pub opportunity_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_difference: Option<PriceDifference>,
}

pub fn opportunity_score(candidate: &OpportunityCandidate, now: DateTime<Utc>) -> f64 {
    let mut score = 0.0;

    if let Some(clause) = candidate.buyout_clause {
        if clause > 0 && candidate.market_value > 0 {
            let ratio = clause as f64 / candidate.market_value as f64;
            if ratio < OPPORTUNITY_DEAL_RATIO {
                score += OPPORTUNITY_DEAL_BONUS;
                if ratio < OPPORTUNITY_EXCELLENT_RATIO {
                    score += OPPORTUNITY_EXCELLENT_BONUS;
                }
            }
        }
    }

    let normalized_value = (candidate.market_value as f64 / OPPORTUNITY_VALUE_CAP).min(1.0);
    score += normalized_value * OPPORTUNITY_VALUE_WEIGHT;

    if let Some(momentum) = candidate.momentum_score.filter(|m| *m != 0.0) {
        score += if momentum > 0.0 {
            (momentum * OPPORTUNITY_MOMENTUM_GAIN).min(OPPORTUNITY_MOMENTUM_MAX)
        } else {
            (momentum * OPPORTUNITY_MOMENTUM_LOSS).max(OPPORTUNITY_MOMENTUM_MIN)
        };
    }

    let normalized_points = (candidate.average_points / OPPORTUNITY_POINTS_CAP).min(1.0);
    score += normalized_points * OPPORTUNITY_POINTS_WEIGHT;

    if let Some(expiration) = candidate.sale_expiration {
        let hours_left = fractional_hours_until(expiration, now);
        if let Some((_, bonus)) = OPPORTUNITY_URGENCY_TIERS
            .iter()
            .find(|(limit, _)| hours_left <= *limit)
        {
            score += bonus;
        }
    }

    score
}

/// Score and order candidates, highest score first. Ties keep input order.
pub fn rank_opportunities(
    candidates: Vec<OpportunityCandidate>,
    now: DateTime<Utc>,
) -> Vec<RankedOpportunity> {
    let mut ranked: Vec<RankedOpportunity> = candidates
        .into_iter()
        .map(|candidate| RankedOpportunity {
            opportunity_score: opportunity_score(&candidate, now),
            price_difference: candidate.price_difference(),
            candidate,
        })
        .collect();

    ranked.sort_by(|a, b| b.opportunity_score.total_cmp(&a.opportunity_score));
    ranked
}
