//! Full market analysis across own players, the league market and other
//! managers' listings.
//!
//! Players are analyzed in a fixed order: the caller's squad, then league
//! listings, then listings put up by other managers. Listings of players the
//! caller already owns are skipped, as are non-owned players for which the
//! snapshot holds no valuation at all. Other managers' players get their
//! buyout clause from the owner's roster before they are scored.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::{
    cli::types::{
        filters::{AnalysisMode, AnalysisSort},
        position::Position,
    },
    market::{
        analysis::{analyze_player, PlayerAnalysis},
        format::format_millions,
        screens::sale_status,
        selection::{select, AnalysisFilter},
        types::{ListingKind, PlayerCategory, TrendDirection},
    },
    Result,
};

use super::{common::CommandContext, print_json};

#[derive(Debug, Clone, Default)]
pub struct AnalyzeParams {
    pub mode: AnalysisMode,
    pub trends: Option<Vec<TrendDirection>>,
    pub positions: Option<Vec<Position>>,
    pub min_alerts: usize,
    pub sort: AnalysisSort,
    pub as_json: bool,
    pub skip_my_players: bool,
    pub skip_market: bool,
    pub skip_other_managers: bool,
    pub max_market_players: Option<usize>,
}

impl AnalyzeParams {
    fn filter(&self) -> AnalysisFilter {
        AnalysisFilter {
            mode: self.mode,
            trends: self.trends.clone(),
            positions: self.positions.clone(),
            min_alerts: self.min_alerts,
        }
    }
}

/// Analyze every eligible player in the snapshot, unfiltered.
pub fn run_analysis(ctx: &CommandContext, params: &AnalyzeParams) -> Vec<PlayerAnalysis> {
    let snapshot = &ctx.snapshot;
    let windows = ctx.config.windows();
    let now = ctx.now.as_datetime();
    let mut analyses = Vec::new();

    if !params.skip_my_players {
        for player in &snapshot.my_players {
            let id = player.id();
            if !snapshot.has_value_data(id) {
                warn!(player = %id, "no market history for own player");
            }
            analyses.push(analyze_player(
                player,
                PlayerCategory::MyPlayer,
                snapshot.history(id),
                snapshot.latest_value(id),
                windows,
                now,
            ));
        }
    }

    let listings = ctx.market_window(params.max_market_players);
    let passes = [
        (ListingKind::League, PlayerCategory::MarketPlayer, params.skip_market),
        (
            ListingKind::Team,
            PlayerCategory::OtherManagerPlayer,
            params.skip_other_managers,
        ),
    ];

    for (kind, category, skip) in passes {
        if skip {
            continue;
        }
        for listing in listings.iter().filter(|l| l.discr == kind) {
            let id = &listing.player_master.id;
            if snapshot.is_mine(id) {
                debug!(player = %id, "skipping own player listed on market");
                continue;
            }
            if !snapshot.has_value_data(id) {
                debug!(player = %id, "skipping player without market data");
                continue;
            }
            let player = ctx.listed_player(listing);
            analyses.push(analyze_player(
                &player,
                category,
                snapshot.history(id),
                snapshot.latest_value(id),
                windows,
                now,
            ));
        }
    }

    info!(analyzed = analyses.len(), "analysis complete");
    analyses
}

/// Analyze, then filter and sort for the requested mode.
pub fn analyze(ctx: &CommandContext, params: &AnalyzeParams) -> Vec<PlayerAnalysis> {
    select(run_analysis(ctx, params), &params.filter(), params.sort)
}

/// Text lines for one analysis: header, trends, buyout, sale status for
/// own players, alerts and the recommendation.
pub fn render_analysis(
    analysis: &PlayerAnalysis,
    short_days: usize,
    long_days: usize,
    now: DateTime<Utc>,
) -> Vec<String> {
    let position = analysis
        .position
        .map_or_else(|| "?".to_string(), |p| p.to_string());
    let mut header = format!(
        "{} [{}] {} - {} | {}: {}/100",
        analysis.name,
        position,
        analysis.team,
        format_millions(analysis.current_value as i64),
        analysis.assessment.label(),
        analysis.score()
    );
    let urgent = analysis.high_priority_alerts().count();
    if urgent > 0 {
        header.push_str(&format!(" | {} urgent", urgent));
    }

    let mut lines = vec![
        header,
        format!("  {}d: {}", short_days, analysis.trends.short.describe(short_days)),
        format!("  {}d: {}", long_days, analysis.trends.long.describe(long_days)),
    ];
    if let Some(clause) = analysis.buyout_clause {
        let protection = analysis
            .buyout_protection_hours
            .map_or_else(String::new, |h| format!(" (protection {}h)", h));
        lines.push(format!("  Buyout: {}{}", format_millions(clause as i64), protection));
    }
    if analysis.is_my_player() {
        if let Some(sale) = &analysis.sale_info {
            lines.push(format!(
                "  On sale: {} | {}",
                format_millions(sale.sale_price as i64),
                sale_status(sale, now)
            ));
        }
    }
    lines.extend(analysis.alerts.iter().map(|alert| format!("  {}", alert)));
    if let Some(recommendation) = analysis.recommendation {
        lines.push(format!("  {}", recommendation));
    }
    lines
}

pub fn handle_analyze(ctx: &CommandContext, params: AnalyzeParams) -> Result<()> {
    let selected = analyze(ctx, &params);

    if params.as_json {
        return print_json(&selected);
    }

    if selected.is_empty() {
        println!("No players match the {} analysis filters.", params.mode);
        return Ok(());
    }

    let short_days = ctx.config.short_window_days;
    let long_days = ctx.config.long_window_days;
    let now = ctx.now.as_datetime();
    for analysis in &selected {
        for line in render_analysis(analysis, short_days, long_days, now) {
            println!("{}", line);
        }
    }
    println!("{} players", selected.len());

    Ok(())
}
