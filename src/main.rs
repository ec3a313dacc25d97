//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fantasy_market::{
    cli::{Commands, FantasyMarket},
    commands::{
        analyze::{handle_analyze, AnalyzeParams},
        common::{CommandContext, ContextOptions},
        opportunities::{handle_opportunities, OpportunitiesParams},
        screen::{handle_screen, ScreenParams},
        trend::{handle_trend, TrendParams},
    },
    Result,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
fn main() -> Result<()> {
    let app = FantasyMarket::parse();
    init_tracing(app.global.verbose);

    let ctx = CommandContext::new(ContextOptions {
        snapshot: app.global.snapshot,
        config: app.global.config,
        now: app.global.now,
    })?;

    match app.command {
        Commands::Analyze {
            mode,
            trends,
            positions,
            min_alerts,
            sort,
            json,
            skip_my_players,
            skip_market,
            skip_other_managers,
            max_market_players,
        } => handle_analyze(
            &ctx,
            AnalyzeParams {
                mode,
                trends,
                positions,
                min_alerts,
                sort,
                as_json: json,
                skip_my_players,
                skip_market,
                skip_other_managers,
                max_market_players,
            },
        )?,

        Commands::Opportunities { limit, json } => handle_opportunities(
            &ctx,
            OpportunitiesParams {
                limit,
                as_json: json,
            },
        )?,

        Commands::Trend {
            player_id,
            window,
            category,
            json,
        } => handle_trend(
            &ctx,
            TrendParams {
                player_id,
                window,
                category,
                as_json: json,
            },
        )?,

        Commands::Screen { kind, json } => handle_screen(
            &ctx,
            ScreenParams {
                kind,
                as_json: json,
            },
        )?,
    }

    Ok(())
}
