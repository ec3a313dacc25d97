//! Market analysis engine.
//!
//! - `trend` / `momentum`: valuation history into percent changes
//! - `scoring`: the three category scores
//! - `opportunity`: unbounded ranking of buy candidates
//! - `analysis`: everything above combined for one player
//! - `selection` / `screens`: filtering, ordering and squad screens

pub mod alerts;
pub mod analysis;
pub mod format;
pub mod momentum;
pub mod opportunity;
pub mod policy;
pub mod recommendation;
pub mod scoring;
pub mod screens;
pub mod selection;
pub mod snapshot;
pub mod trend;
pub mod types;

pub use alerts::Alert;
pub use analysis::{analyze_player, AnalysisWindows, PlayerAnalysis};
pub use momentum::{momentum_score, MomentumTrends};
pub use opportunity::{opportunity_score, rank_opportunities, OpportunityCandidate, RankedOpportunity};
pub use recommendation::Recommendation;
pub use scoring::{assess, market_score, portfolio_score, worth_it_score, Assessment, ScoringInput};
pub use snapshot::LeagueSnapshot;
pub use trend::{analyze_trend, trend_percentage};
pub use types::{MarketValuePoint, PlayerCategory, TrendAnalysis, TrendDirection};
