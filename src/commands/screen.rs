//! Squad screens: cheap buyouts, expiring protection and rising players.

use serde::Serialize;

use crate::{
    cli::types::filters::ScreenKind,
    market::{
        format::format_millions,
        screens::{
            buyout_status, expiring_protection, low_buyout, sale_status, summary_stats, trending_up,
            EnrichedPlayer, SummaryStats,
        },
        types::Player,
    },
    Result,
};

use super::{common::CommandContext, print_json};

#[derive(Debug, Clone)]
pub struct ScreenParams {
    pub kind: ScreenKind,
    pub as_json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenReport {
    pub kind: String,
    /// Totals over the caller's own squad.
    pub summary: SummaryStats,
    pub players: Vec<EnrichedPlayer>,
}

/// Own players, then every listed player not already owned, then other
/// managers' unlisted players. Listings from other managers carry their
/// roster buyout details.
pub fn screen_pool(ctx: &CommandContext) -> Vec<Player> {
    let snapshot = &ctx.snapshot;
    let mut pool = snapshot.my_players.clone();
    pool.extend(
        ctx.market_window(None)
            .iter()
            .filter(|l| !snapshot.is_mine(&l.player_master.id))
            .map(|l| ctx.listed_player(l)),
    );
    pool.extend(ctx.unlisted_rival_players());
    pool
}

pub fn run_screen(ctx: &CommandContext, kind: ScreenKind) -> ScreenReport {
    let now = ctx.now.as_datetime();
    let config = &ctx.config;
    let pool = screen_pool(ctx);

    let enrich = |p: &Player| EnrichedPlayer::enrich(p.clone(), ctx.snapshot.history(p.id()));
    let players = match kind {
        ScreenKind::LowBuyout => {
            let current = |p: &Player| ctx.snapshot.current_value(p);
            low_buyout(&pool, current, now, config.low_buyout_horizon_hours)
                .into_iter()
                .map(enrich)
                .collect()
        }
        ScreenKind::ExpiringProtection => {
            expiring_protection(&pool, now, config.protection_warning_hours)
                .into_iter()
                .map(enrich)
                .collect()
        }
        ScreenKind::TrendingUp => {
            let enriched: Vec<EnrichedPlayer> = pool.iter().map(enrich).collect();
            trending_up(&enriched, config.minimum_momentum)
                .into_iter()
                .cloned()
                .collect()
        }
    };

    ScreenReport {
        kind: kind.to_string(),
        summary: summary_stats(&ctx.snapshot.my_players),
        players,
    }
}

pub fn handle_screen(ctx: &CommandContext, params: ScreenParams) -> Result<()> {
    let report = run_screen(ctx, params.kind);

    if params.as_json {
        return print_json(&report);
    }

    let summary = &report.summary;
    println!(
        "Squad: {} players, {} total value, {} points (avg {:.1})",
        summary.total_players,
        format_millions(summary.total_value as i64),
        summary.total_points,
        summary.average_points
    );
    println!("Screen: {} ({} players)", report.kind, report.players.len());

    let now = ctx.now.as_datetime();
    for entry in &report.players {
        let player = &entry.player;
        let mut line = format!(
            "  {} - {}",
            player.master.display_name(),
            format_millions(ctx.snapshot.current_value(player) as i64)
        );
        if let Some(clause) = player.buyout() {
            line.push_str(&format!(" | buyout {}", format_millions(clause as i64)));
        }
        if let Some(status) = buyout_status(player, now) {
            line.push_str(&format!(" | {}", status));
        }
        if let Some(sale) = &player.sale_info {
            line.push_str(&format!(" | {}", sale_status(sale, now)));
        }
        if let Some(score) = entry.momentum_score {
            line.push_str(&format!(" | momentum {:+.2}", score));
        }
        println!("{}", line);
    }

    Ok(())
}
