//! Buy candidates ranked by opportunity score: market listings and other
//! managers' unlisted players.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::{
    market::{
        format::format_millions,
        momentum::{momentum_score, MomentumTrends},
        opportunity::{rank_opportunities, OpportunityCandidate, RankedOpportunity},
        types::Player,
    },
    Result,
};

use super::{common::CommandContext, print_json};

#[derive(Debug, Clone, Default)]
pub struct OpportunitiesParams {
    pub limit: Option<usize>,
    pub as_json: bool,
}

/// Candidates for every listing of a player the caller does not own, then
/// for other managers' players that are not listed. Momentum is attached
/// when history exists.
pub fn collect_candidates(ctx: &CommandContext) -> Vec<OpportunityCandidate> {
    let snapshot = &ctx.snapshot;

    let listed = ctx
        .market_window(None)
        .iter()
        .filter(|listing| !snapshot.is_mine(&listing.player_master.id))
        .map(|listing| {
            let player = ctx.listed_player(listing);
            let sale = (listing.expiration_date, listing.sale_price);
            (player, Some(sale))
        });
    let rostered = ctx
        .unlisted_rival_players()
        .into_iter()
        .map(|player| (player, None));

    listed
        .chain(rostered)
        .map(|(player, sale)| candidate(ctx, &player, sale))
        .collect()
}

fn candidate(
    ctx: &CommandContext,
    player: &Player,
    sale: Option<(DateTime<Utc>, u64)>,
) -> OpportunityCandidate {
    let snapshot = &ctx.snapshot;
    let id = player.id().clone();
    let history = snapshot.history(&id);
    let momentum =
        (!history.is_empty()).then(|| momentum_score(&MomentumTrends::from_history(history)));
    debug!(player = %id, ?momentum, listed = sale.is_some(), "opportunity candidate");

    OpportunityCandidate {
        name: player.master.display_name().to_string(),
        market_value: snapshot.current_value(player),
        buyout_clause: player.buyout(),
        momentum_score: momentum,
        average_points: player.master.average_points,
        sale_expiration: sale.map(|(expiration, _)| expiration),
        sale_price: sale.map(|(_, price)| price),
        id,
    }
}

pub fn opportunities(ctx: &CommandContext, params: &OpportunitiesParams) -> Vec<RankedOpportunity> {
    let mut ranked = rank_opportunities(collect_candidates(ctx), ctx.now.as_datetime());
    if let Some(limit) = params.limit {
        ranked.truncate(limit);
    }
    ranked
}

pub fn handle_opportunities(ctx: &CommandContext, params: OpportunitiesParams) -> Result<()> {
    let ranked = opportunities(ctx, &params);

    if params.as_json {
        return print_json(&ranked);
    }

    if ranked.is_empty() {
        println!("No market opportunities found.");
        return Ok(());
    }

    for (rank, entry) in ranked.iter().enumerate() {
        let c = &entry.candidate;
        let momentum = c
            .momentum_score
            .map_or_else(|| "n/a".to_string(), |m| format!("{:+.2}", m));
        let mut line = format!(
            "{:>3}. {} ({}) value {} | momentum {} | avg pts {:.1} | score {:.1}",
            rank + 1,
            c.name,
            c.id,
            format_millions(c.market_value as i64),
            momentum,
            c.average_points,
            entry.opportunity_score
        );
        if let Some(clause) = c.buyout_clause {
            line.push_str(&format!(" | buyout {}", format_millions(clause as i64)));
        }
        if let (Some(price), Some(diff)) = (c.sale_price, entry.price_difference) {
            line.push_str(&format!(
                " | asking {} ({:+.1}%{})",
                format_millions(price as i64),
                diff.percent,
                if diff.is_good_deal { ", below value" } else { "" }
            ));
        }
        println!("{}", line);
    }

    Ok(())
}
