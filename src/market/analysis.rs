//! Per-player analysis: trends, alerts, timing and the category score.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    cli::types::{ids::PlayerId, position::Position},
    market::{
        alerts::{is_low_buyout, protection_alert, sale_expiry_alert, trend_alerts, Alert},
        format::hours_until,
        recommendation::{recommend, Recommendation},
        scoring::{assess, Assessment, ScoringInput},
        trend::analyze_trend,
        types::{MarketValuePoint, Player, PlayerCategory, SaleInfo, TrendAnalysis},
    },
};


/// Trend window lengths, in data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisWindows {
    pub short_days: usize,
    pub long_days: usize,
}

impl Default for AnalysisWindows {
    fn default() -> Self {
        Self {
            short_days: 5,
            long_days: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTrends {
    pub short: TrendAnalysis,
    pub long: TrendAnalysis,
}

/// The full picture of one player for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAnalysis {
    pub id: PlayerId,
    pub name: String,
    pub category: PlayerCategory,
    pub current_value: u64,
    pub position: Option<Position>,
    pub team: String,
    pub trends: PlayerTrends,
    pub alerts: Vec<Alert>,
    pub sale_expiration_hours: Option<i64>,
    pub buyout_protection_hours: Option<i64>,
    pub buyout_clause: Option<u64>,
    pub sale_info: Option<SaleInfo>,
    #[serde(flatten)]
    pub assessment: Assessment,
    pub recommendation: Option<Recommendation>,
}

impl PlayerAnalysis {
    pub fn score(&self) -> u8 {
        self.assessment.score()
    }

    pub fn is_my_player(&self) -> bool {
        self.category == PlayerCategory::MyPlayer
    }

    pub fn high_priority_alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| a.is_high_priority())
    }
}

/// Analyze one player.
///
/// `player` must already carry every buyout detail known for it: for other
/// managers' players that means the clause and lock time taken from their
/// roster. `latest_value`, when known, replaces the listed market value.
pub fn analyze_player(
    player: &Player,
    category: PlayerCategory,
    history: &[MarketValuePoint],
    latest_value: Option<u64>,
    windows: AnalysisWindows,
    now: DateTime<Utc>,
) -> PlayerAnalysis {
    let listed_value = match player.master.market_value {
        0 => player.sale_info.as_ref().map_or(0, |s| s.sale_price),
        value => value,
    };
    let current_value = latest_value.filter(|v| *v > 0).unwrap_or(listed_value);

    let short = analyze_trend(history, windows.short_days);
    let long = analyze_trend(history, windows.long_days);
    let mut alerts = trend_alerts(&short, windows.short_days, &long, windows.long_days);

    let sale_expiration_hours = player
        .sale_info
        .as_ref()
        .map(|s| hours_until(s.expiration_date, now));
    let buyout_clause = player.buyout();
    let buyout_protection_hours = buyout_clause
        .and(player.buyout_clause_locked_end_time)
        .map(|end| hours_until(end, now));

    if category == PlayerCategory::MyPlayer {
        if let (Some(sale), Some(hours)) = (&player.sale_info, sale_expiration_hours) {
            alerts.extend(sale_expiry_alert(hours));
            alerts.push(Alert::OnSale {
                price: sale.sale_price,
            });
        }
        if let Some(clause) = buyout_clause {
            if is_low_buyout(clause, listed_value) {
                alerts.push(Alert::LowBuyoutClause { clause });
            }
            alerts.extend(buyout_protection_hours.and_then(protection_alert));
        }
    }

    let input = ScoringInput {
        buyout_clause,
        buyout_protection_hours,
        for_sale: player.sale_info.is_some(),
        ..ScoringInput::from_trends(current_value, &short, &long)
    };
    let assessment = assess(category, &input);

    let mut analysis = PlayerAnalysis {
        id: player.id().clone(),
        name: player.master.display_name().to_string(),
        category,
        current_value,
        position: player.master.position(),
        team: player.master.team.name.clone(),
        trends: PlayerTrends { short, long },
        alerts,
        sale_expiration_hours,
        buyout_protection_hours,
        buyout_clause,
        sale_info: player.sale_info.clone(),
        assessment,
        recommendation: None,
    };
    analysis.recommendation = recommend(&analysis);
    analysis
}
