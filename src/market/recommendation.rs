//! Suggested next action for an analyzed player.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::market::{analysis::PlayerAnalysis, scoring::Assessment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    StarPerformer,
    SellCandidate,
    ProtectionExpiring,
    RisingStar,
    HotBuy,
    GoodBuy,
    Avoid,
    PremiumBuyout,
    ActFast,
    GoodOpportunity,
    ValueDeal,
}

impl Recommendation {
    pub fn icon(&self) -> &'static str {
        match self {
            Recommendation::StarPerformer => "🌟",
            Recommendation::SellCandidate => "⚠️",
            Recommendation::ProtectionExpiring => "🛡️",
            Recommendation::RisingStar => "🚀",
            Recommendation::HotBuy => "🔥",
            Recommendation::GoodBuy => "👍",
            Recommendation::Avoid => "🚫",
            Recommendation::PremiumBuyout => "💎",
            Recommendation::ActFast => "⚡",
            Recommendation::GoodOpportunity => "🎯",
            Recommendation::ValueDeal => "💰",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Recommendation::StarPerformer => "Star Performer",
            Recommendation::SellCandidate => "Sell Candidate",
            Recommendation::ProtectionExpiring => "Protection Expiring",
            Recommendation::RisingStar => "Rising Star",
            Recommendation::HotBuy => "Hot Buy",
            Recommendation::GoodBuy => "Good Buy",
            Recommendation::Avoid => "Avoid",
            Recommendation::PremiumBuyout => "Premium Buyout",
            Recommendation::ActFast => "Act Fast",
            Recommendation::GoodOpportunity => "Good Opportunity",
            Recommendation::ValueDeal => "Value Deal",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Recommendation::StarPerformer => "Excellent growth. Consider increasing buyout protection.",
            Recommendation::SellCandidate => "Declining value. Consider selling soon.",
            Recommendation::ProtectionExpiring => "Increase buyout clause to protect this player.",
            Recommendation::RisingStar => "Strong growth trend. Hold and protect.",
            Recommendation::HotBuy => "Excellent market opportunity. Buy now!",
            Recommendation::GoodBuy => "Solid investment with growth potential.",
            Recommendation::Avoid => "Poor trend. Look for better options.",
            Recommendation::PremiumBuyout => "Excellent opportunity. Consider buyout immediately.",
            Recommendation::ActFast => "Good opportunity expiring soon. Decide quickly.",
            Recommendation::GoodOpportunity => "Solid buyout candidate. Consider your budget.",
            Recommendation::ValueDeal => "Buyout below market value. Great deal!",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.icon(), self.title(), self.description())
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.title())
    }
}

/// Pick the first matching rule for the player's category, if any.
pub fn recommend(analysis: &PlayerAnalysis) -> Option<Recommendation> {
    let short = analysis.trends.short.change_percent;
    let long = analysis.trends.long.change_percent;
    let protection = analysis.buyout_protection_hours;

    match analysis.assessment {
        Assessment::Portfolio { portfolio_score } => {
            if portfolio_score >= 80 {
                Some(Recommendation::StarPerformer)
            } else if short < -8.0 && long < -15.0 {
                Some(Recommendation::SellCandidate)
            } else if protection.is_some_and(|h| h <= 24) {
                Some(Recommendation::ProtectionExpiring)
            } else if short > 10.0 || long > 20.0 {
                Some(Recommendation::RisingStar)
            } else {
                None
            }
        }
        Assessment::Market { market_score } => {
            if market_score >= 80 {
                Some(Recommendation::HotBuy)
            } else if market_score >= 60 {
                Some(Recommendation::GoodBuy)
            } else if short < -10.0 && long < -20.0 {
                Some(Recommendation::Avoid)
            } else {
                None
            }
        }
        Assessment::Buyout { worth_it_score } => {
            if worth_it_score >= 80 {
                Some(Recommendation::PremiumBuyout)
            } else if worth_it_score >= 60 && protection.is_some_and(|h| h <= 72) {
                Some(Recommendation::ActFast)
            } else if worth_it_score >= 60 {
                Some(Recommendation::GoodOpportunity)
            } else if analysis
                .buyout_clause
                .is_some_and(|c| (c as f64) < analysis.current_value as f64 * 0.8)
            {
                Some(Recommendation::ValueDeal)
            } else {
                None
            }
        }
    }
}
