//! Filter and ordering types for fantasy market CLI commands.

use std::fmt;

/// Which slice of the league an analysis run focuses on.
///
/// Each mode has its own default ordering: the score of the category it
/// selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AnalysisMode {
    /// Your own squad, ranked by portfolio score
    #[default]
    Portfolio,
    /// Open-market listings, ranked by market score
    Market,
    /// Other managers' players with a buyout clause, ranked by worth-it score
    Buyout,
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnalysisMode::Portfolio => "portfolio",
            AnalysisMode::Market => "market",
            AnalysisMode::Buyout => "buyout",
        };
        write!(f, "{}", s)
    }
}

/// Ordering applied to analysis results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AnalysisSort {
    /// The active mode's score, highest first
    #[default]
    ModeDefault,
    /// Most alerts first, then largest 5-day move
    Alerts,
    /// Highest current value first
    Value,
    /// Best short-window trend first
    #[value(name = "trend-5d")]
    Trend5d,
    /// Best long-window trend first
    #[value(name = "trend-10d")]
    Trend10d,
    /// Highest buyout worth-it score first
    BestOpportunities,
    /// Cheapest buyout clause first
    BuyoutLow,
    /// Most expensive buyout clause first
    BuyoutHigh,
    /// Soonest-ending buyout protection first
    Protection,
}

impl fmt::Display for AnalysisSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnalysisSort::ModeDefault => "mode-default",
            AnalysisSort::Alerts => "alerts",
            AnalysisSort::Value => "value",
            AnalysisSort::Trend5d => "trend-5d",
            AnalysisSort::Trend10d => "trend-10d",
            AnalysisSort::BestOpportunities => "best-opportunities",
            AnalysisSort::BuyoutLow => "buyout-low",
            AnalysisSort::BuyoutHigh => "buyout-high",
            AnalysisSort::Protection => "protection",
        };
        write!(f, "{}", s)
    }
}

/// Pre-built player screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScreenKind {
    /// Buyout clause close to market value with protection ending soon
    LowBuyout,
    /// Buyout protection ending within the warning horizon
    ExpiringProtection,
    /// Momentum above the configured minimum
    TrendingUp,
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScreenKind::LowBuyout => "low-buyout",
            ScreenKind::ExpiringProtection => "expiring-protection",
            ScreenKind::TrendingUp => "trending-up",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_display_matches_value_names() {
        for sort in AnalysisSort::value_variants() {
            let name = sort.to_possible_value().unwrap();
            assert_eq!(name.get_name(), sort.to_string());
        }
        for mode in AnalysisMode::value_variants() {
            let name = mode.to_possible_value().unwrap();
            assert_eq!(name.get_name(), mode.to_string());
        }
        for kind in ScreenKind::value_variants() {
            let name = kind.to_possible_value().unwrap();
            assert_eq!(name.get_name(), kind.to_string());
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(AnalysisMode::default(), AnalysisMode::Portfolio);
        assert_eq!(AnalysisSort::default(), AnalysisSort::ModeDefault);
    }
}
