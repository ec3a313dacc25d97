//! Trend and momentum report for a single player.

use serde::Serialize;

use crate::{
    cli::types::ids::PlayerId,
    market::{
        analysis::analyze_player,
        format::format_millions,
        momentum::{momentum_score, MomentumTrends},
        recommendation::Recommendation,
        scoring::Assessment,
        trend::analyze_trend,
        types::{PlayerCategory, TrendAnalysis},
    },
    Result,
};

use super::{common::CommandContext, print_json};

#[derive(Debug, Clone)]
pub struct TrendParams {
    pub player_id: PlayerId,
    /// Single window to report instead of the configured pair.
    pub window: Option<usize>,
    /// Category tag deciding which score is reported; anything unrecognised
    /// or missing means a market player.
    pub category: Option<String>,
    pub as_json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowReport {
    pub days: usize,
    #[serde(flatten)]
    pub analysis: TrendAnalysis,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub id: PlayerId,
    pub name: String,
    pub current_value: u64,
    pub windows: Vec<WindowReport>,
    pub momentum: MomentumTrends,
    pub momentum_score: f64,
    pub category: PlayerCategory,
    #[serde(flatten)]
    pub assessment: Assessment,
    pub recommendation: Option<Recommendation>,
}

pub fn trend_report(ctx: &CommandContext, params: &TrendParams) -> Result<TrendReport> {
    let snapshot = &ctx.snapshot;
    let mut player = snapshot.find_player(&params.player_id)?;
    if player.buyout_clause.is_none() {
        if let Some(entry) = snapshot.find_roster_entry(&params.player_id) {
            player.buyout_clause = entry.buyout_clause;
            player.buyout_clause_locked_end_time = entry.buyout_clause_locked_end_time;
        }
    }
    let history = snapshot.history(&params.player_id);
    let category = PlayerCategory::from_tag_or_market(params.category.as_deref());
    let analysis = analyze_player(
        &player,
        category,
        history,
        snapshot.latest_value(&params.player_id),
        ctx.config.windows(),
        ctx.now.as_datetime(),
    );

    let days = match params.window {
        Some(days) => vec![days],
        None => vec![ctx.config.short_window_days, ctx.config.long_window_days],
    };
    let windows = days
        .into_iter()
        .map(|days| {
            let analysis = analyze_trend(history, days);
            WindowReport {
                days,
                description: analysis.describe(days),
                analysis,
            }
        })
        .collect();
    let momentum = MomentumTrends::from_history(history);

    Ok(TrendReport {
        id: player.id().clone(),
        name: player.master.display_name().to_string(),
        current_value: analysis.current_value,
        windows,
        momentum_score: momentum_score(&momentum),
        momentum,
        category,
        assessment: analysis.assessment,
        recommendation: analysis.recommendation,
    })
}

pub fn handle_trend(ctx: &CommandContext, params: TrendParams) -> Result<()> {
    let report = trend_report(ctx, &params)?;

    if params.as_json {
        return print_json(&report);
    }

    println!(
        "{} ({}) - {}",
        report.name,
        report.id,
        format_millions(report.current_value as i64)
    );
    for window in &report.windows {
        println!(
            "  {}d [{} points]: {}",
            window.days, window.analysis.data_points, window.description
        );
    }
    println!(
        "  Momentum: {:+.2} (1d {:+.2}%, 3d {:+.2}%, 7d {:+.2}%)",
        report.momentum_score,
        report.momentum.last_1_days,
        report.momentum.last_3_days,
        report.momentum.last_7_days
    );
    println!(
        "  As {}: {} {}/100",
        report.category,
        report.assessment.label(),
        report.assessment.score()
    );
    if let Some(recommendation) = report.recommendation {
        println!("  {}", recommendation);
    }

    Ok(())
}
