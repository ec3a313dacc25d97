//! Mode-specific filtering and ordering of analysis results.

use std::cmp::Ordering;

use crate::{
    cli::types::{
        filters::{AnalysisMode, AnalysisSort},
        position::Position,
    },
    market::{
        analysis::PlayerAnalysis,
        scoring::Assessment,
        types::{PlayerCategory, TrendDirection},
    },
};

/// Which analyses to keep for display.
#[derive(Debug, Clone, Default)]
pub struct AnalysisFilter {
    pub mode: AnalysisMode,
    /// Accepted short-window trend labels; `None` accepts all.
    pub trends: Option<Vec<TrendDirection>>,
    pub positions: Option<Vec<Position>>,
    pub min_alerts: usize,
}

impl AnalysisFilter {
    pub fn matches(&self, analysis: &PlayerAnalysis) -> bool {
        mode_accepts(self.mode, analysis)
            && self
                .trends
                .as_ref()
                .map_or(true, |t| t.contains(&analysis.trends.short.trend))
            && self
                .positions
                .as_ref()
                .map_or(true, |p| analysis.position.is_some_and(|pos| p.contains(&pos)))
            && analysis.alerts.len() >= self.min_alerts
    }
}

/// Whether an analysis belongs to the given mode at all.
pub fn mode_accepts(mode: AnalysisMode, analysis: &PlayerAnalysis) -> bool {
    match mode {
        AnalysisMode::Portfolio => analysis.category == PlayerCategory::MyPlayer,
        AnalysisMode::Market => analysis.category == PlayerCategory::MarketPlayer,
        AnalysisMode::Buyout => {
            analysis.category == PlayerCategory::OtherManagerPlayer
                && analysis.buyout_clause.is_some()
                && analysis.score() > 0
        }
    }
}

/// Keep the matching analyses and order them. The sort is stable.
pub fn select(
    analyses: Vec<PlayerAnalysis>,
    filter: &AnalysisFilter,
    sort: AnalysisSort,
) -> Vec<PlayerAnalysis> {
    let mut selected: Vec<PlayerAnalysis> =
        analyses.into_iter().filter(|a| filter.matches(a)).collect();
    sort_analyses(&mut selected, filter.mode, sort);
    selected
}

pub fn sort_analyses(analyses: &mut [PlayerAnalysis], mode: AnalysisMode, sort: AnalysisSort) {
    analyses.sort_by(|a, b| compare(a, b, mode, sort));
}

fn mode_score(analysis: &PlayerAnalysis, mode: AnalysisMode) -> u8 {
    match (mode, analysis.assessment) {
        (AnalysisMode::Portfolio, Assessment::Portfolio { portfolio_score }) => portfolio_score,
        (AnalysisMode::Market, Assessment::Market { market_score }) => market_score,
        (AnalysisMode::Buyout, Assessment::Buyout { worth_it_score }) => worth_it_score,
        _ => 0,
    }
}

fn worth_it(analysis: &PlayerAnalysis) -> u8 {
    match analysis.assessment {
        Assessment::Buyout { worth_it_score } => worth_it_score,
        _ => 0,
    }
}

/// Present values first, ordered by `cmp`; absent ones last.
fn present_first<T: Copy>(a: Option<T>, b: Option<T>, cmp: impl Fn(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare(a: &PlayerAnalysis, b: &PlayerAnalysis, mode: AnalysisMode, sort: AnalysisSort) -> Ordering {
    match sort {
        AnalysisSort::ModeDefault => mode_score(b, mode).cmp(&mode_score(a, mode)),
        AnalysisSort::Alerts => b.alerts.len().cmp(&a.alerts.len()).then_with(|| {
            b.trends
                .short
                .change_percent
                .abs()
                .total_cmp(&a.trends.short.change_percent.abs())
        }),
        AnalysisSort::Value => b.current_value.cmp(&a.current_value),
        AnalysisSort::Trend5d => b
            .trends
            .short
            .change_percent
            .total_cmp(&a.trends.short.change_percent),
        AnalysisSort::Trend10d => b
            .trends
            .long
            .change_percent
            .total_cmp(&a.trends.long.change_percent),
        AnalysisSort::BestOpportunities => worth_it(b).cmp(&worth_it(a)),
        AnalysisSort::BuyoutLow => present_first(a.buyout_clause, b.buyout_clause, |x, y| x.cmp(&y)),
        AnalysisSort::BuyoutHigh => present_first(a.buyout_clause, b.buyout_clause, |x, y| y.cmp(&x)),
        AnalysisSort::Protection => present_first(
            a.buyout_protection_hours,
            b.buyout_protection_hours,
            |x, y| x.cmp(&y),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::types::ids::PlayerId,
        market::{
            alerts::Alert,
            analysis::PlayerTrends,
            types::TrendAnalysis,
        },
    };

    fn trend(direction: TrendDirection, change_percent: f64) -> TrendAnalysis {
        TrendAnalysis {
            trend: direction,
            change_percent,
            data_points: 5,
            ..TrendAnalysis::unknown()
        }
    }

    fn analysis(id: &str, assessment: Assessment) -> PlayerAnalysis {
        PlayerAnalysis {
            id: PlayerId::new(id),
            name: id.to_string(),
            category: assessment.category(),
            current_value: 1_000_000,
            position: Some(Position::MID),
            team: "Team".to_string(),
            trends: PlayerTrends {
                short: trend(TrendDirection::Stable, 0.0),
                long: trend(TrendDirection::Stable, 0.0),
            },
            alerts: Vec::new(),
            sale_expiration_hours: None,
            buyout_protection_hours: None,
            buyout_clause: None,
            sale_info: None,
            assessment,
            recommendation: None,
        }
    }

    fn ids(analyses: &[PlayerAnalysis]) -> Vec<&str> {
        analyses.iter().map(|a| a.id.as_str()).collect()
    }

    fn mixed() -> Vec<PlayerAnalysis> {
        let mut rival = analysis("rival", Assessment::Buyout { worth_it_score: 55 });
        rival.buyout_clause = Some(9_000_000);
        let unscored_rival = analysis("no-clause", Assessment::Buyout { worth_it_score: 0 });
        vec![
            analysis("mine", Assessment::Portfolio { portfolio_score: 70 }),
            analysis("market-a", Assessment::Market { market_score: 40 }),
            rival,
            analysis("market-b", Assessment::Market { market_score: 90 }),
            unscored_rival,
        ]
    }

    #[test]
    fn test_mode_filters() {
        let portfolio = select(mixed(), &AnalysisFilter::default(), AnalysisSort::ModeDefault);
        assert_eq!(ids(&portfolio), vec!["mine"]);

        let market_filter = AnalysisFilter {
            mode: AnalysisMode::Market,
            ..AnalysisFilter::default()
        };
        let market = select(mixed(), &market_filter, AnalysisSort::ModeDefault);
        assert_eq!(ids(&market), vec!["market-b", "market-a"]);

        let buyout_filter = AnalysisFilter {
            mode: AnalysisMode::Buyout,
            ..AnalysisFilter::default()
        };
        let buyout = select(mixed(), &buyout_filter, AnalysisSort::ModeDefault);
        assert_eq!(ids(&buyout), vec!["rival"]);
    }

    #[test]
    fn test_trend_position_and_alert_filters() {
        let mut rising = analysis("rising", Assessment::Market { market_score: 50 });
        rising.trends.short = trend(TrendDirection::Rising, 6.0);
        rising.alerts.push(Alert::SaleExpiresInHours(3));
        let mut keeper = analysis("keeper", Assessment::Market { market_score: 50 });
        keeper.position = Some(Position::GK);
        let mut unknown_position = analysis("unknown", Assessment::Market { market_score: 50 });
        unknown_position.position = None;

        let all = vec![rising, keeper, unknown_position];

        let by_trend = AnalysisFilter {
            mode: AnalysisMode::Market,
            trends: Some(vec![TrendDirection::Rising]),
            ..AnalysisFilter::default()
        };
        assert_eq!(ids(&select(all.clone(), &by_trend, AnalysisSort::Value)), vec!["rising"]);

        let by_position = AnalysisFilter {
            mode: AnalysisMode::Market,
            positions: Some(vec![Position::GK]),
            ..AnalysisFilter::default()
        };
        assert_eq!(ids(&select(all.clone(), &by_position, AnalysisSort::Value)), vec!["keeper"]);

        let by_alerts = AnalysisFilter {
            mode: AnalysisMode::Market,
            min_alerts: 1,
            ..AnalysisFilter::default()
        };
        assert_eq!(ids(&select(all, &by_alerts, AnalysisSort::Value)), vec!["rising"]);
    }

    #[test]
    fn test_sort_by_alerts_then_short_trend_magnitude() {
        let mut quiet_mover = analysis("quiet", Assessment::Market { market_score: 1 });
        quiet_mover.trends.short = trend(TrendDirection::Falling, -30.0);
        let mut noisy = analysis("noisy", Assessment::Market { market_score: 1 });
        noisy.alerts = vec![Alert::ProtectionExpired, Alert::SaleExpiresInDays(3)];
        let mut small_move = analysis("small", Assessment::Market { market_score: 1 });
        small_move.trends.short = trend(TrendDirection::Rising, 3.0);

        let mut list = vec![small_move, quiet_mover, noisy];
        sort_analyses(&mut list, AnalysisMode::Market, AnalysisSort::Alerts);
        assert_eq!(ids(&list), vec!["noisy", "quiet", "small"]);
    }

    #[test]
    fn test_sort_by_trends_and_value() {
        let mut a = analysis("a", Assessment::Market { market_score: 1 });
        a.trends.short = trend(TrendDirection::Rising, 8.0);
        a.trends.long = trend(TrendDirection::Falling, -3.0);
        a.current_value = 5;
        let mut b = analysis("b", Assessment::Market { market_score: 1 });
        b.trends.short = trend(TrendDirection::Falling, -8.0);
        b.trends.long = trend(TrendDirection::Rising, 12.0);
        b.current_value = 9;

        let mut list = vec![a.clone(), b.clone()];
        sort_analyses(&mut list, AnalysisMode::Market, AnalysisSort::Trend5d);
        assert_eq!(ids(&list), vec!["a", "b"]);
        sort_analyses(&mut list, AnalysisMode::Market, AnalysisSort::Trend10d);
        assert_eq!(ids(&list), vec!["b", "a"]);
        sort_analyses(&mut list, AnalysisMode::Market, AnalysisSort::Value);
        assert_eq!(ids(&list), vec!["b", "a"]);
    }

    #[test]
    fn test_buyout_sorts_put_missing_clauses_last() {
        let mut cheap = analysis("cheap", Assessment::Buyout { worth_it_score: 30 });
        cheap.buyout_clause = Some(2_000_000);
        let mut pricey = analysis("pricey", Assessment::Buyout { worth_it_score: 60 });
        pricey.buyout_clause = Some(9_000_000);
        let none = analysis("none", Assessment::Buyout { worth_it_score: 0 });

        let mut list = vec![none.clone(), pricey.clone(), cheap.clone()];
        sort_analyses(&mut list, AnalysisMode::Buyout, AnalysisSort::BuyoutLow);
        assert_eq!(ids(&list), vec!["cheap", "pricey", "none"]);

        sort_analyses(&mut list, AnalysisMode::Buyout, AnalysisSort::BuyoutHigh);
        assert_eq!(ids(&list), vec!["pricey", "cheap", "none"]);

        sort_analyses(&mut list, AnalysisMode::Buyout, AnalysisSort::BestOpportunities);
        assert_eq!(ids(&list), vec!["pricey", "cheap", "none"]);
    }

    #[test]
    fn test_protection_sort_known_first_ascending() {
        let mut soon = analysis("soon", Assessment::Portfolio { portfolio_score: 1 });
        soon.buyout_protection_hours = Some(-4);
        let mut later = analysis("later", Assessment::Portfolio { portfolio_score: 1 });
        later.buyout_protection_hours = Some(100);
        let unknown = analysis("unknown", Assessment::Portfolio { portfolio_score: 1 });

        let mut list = vec![unknown, later, soon];
        sort_analyses(&mut list, AnalysisMode::Portfolio, AnalysisSort::Protection);
        assert_eq!(ids(&list), vec!["soon", "later", "unknown"]);
    }

    #[test]
    fn test_mode_default_ignores_other_scores() {
        let mut list = vec![
            analysis("market", Assessment::Market { market_score: 99 }),
            analysis("mine", Assessment::Portfolio { portfolio_score: 10 }),
        ];
        sort_analyses(&mut list, AnalysisMode::Portfolio, AnalysisSort::ModeDefault);
        assert_eq!(ids(&list), vec!["mine", "market"]);
    }
}
