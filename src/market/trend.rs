use crate::market::{
    format::{format_millions, round2},
    policy::STABLE_THRESHOLD_PERCENT,
    types::{MarketValuePoint, TrendAnalysis, TrendDirection},
};


impl TrendAnalysis {
    /// No usable observation at all.
    pub fn unknown() -> Self {
        Self {
            trend: TrendDirection::Unknown,
            change: 0,
            change_percent: 0.0,
            latest_value: None,
            oldest_value: None,
            data_points: 0,
        }
    }

    /// Too few observations to measure a change.
    pub fn insufficient(data_points: usize) -> Self {
        Self {
            trend: TrendDirection::InsufficientData,
            data_points,
            ..Self::unknown()
        }
    }

    /// One-line human description of the window, e.g.
    /// `"📈 Rising +10% (1.0M€) in 5 days"`.
    pub fn describe(&self, days: usize) -> String {
        match self.trend {
            TrendDirection::Unknown => "No market data available".to_string(),
            TrendDirection::InsufficientData => "Not enough data points".to_string(),
            TrendDirection::Stable => format!("Stable price ({}% change)", self.change_percent),
            TrendDirection::Rising => format!(
                "📈 Rising +{}% ({}) in {} days",
                self.change_percent,
                format_millions(self.change),
                days
            ),
            TrendDirection::Falling => format!(
                "📉 Falling {}% ({}) in {} days",
                self.change_percent,
                format_millions(self.change),
                days
            ),
        }
    }
}

/// Classify the most recent `window_size` valuations of a player.
///
/// Non-positive values are dropped, the rest are ordered newest first and
/// the first `window_size` form the window. The change is measured from the
/// oldest point *inside the window* to the newest one.
///
/// Points sharing a date keep their input order, so a history with
/// conflicting values on the same day depends on how the source ordered them.
pub fn analyze_trend(points: &[MarketValuePoint], window_size: usize) -> TrendAnalysis {
    let mut usable: Vec<&MarketValuePoint> = points.iter().filter(|p| p.market_value > 0).collect();
    usable.sort_by(|a, b| b.date.cmp(&a.date));
    usable.truncate(window_size);

    let (latest, oldest) = match usable.as_slice() {
        [] => return TrendAnalysis::unknown(),
        [_] => return TrendAnalysis::insufficient(1),
        [latest, .., oldest] => (latest.market_value, oldest.market_value),
    };

    if oldest == 0 {
        return TrendAnalysis::unknown();
    }

    let change = latest - oldest;
    let change_percent = round2(change as f64 / oldest as f64 * 100.0);

    let trend = if change_percent.abs() < STABLE_THRESHOLD_PERCENT {
        TrendDirection::Stable
    } else if change > 0 {
        TrendDirection::Rising
    } else {
        TrendDirection::Falling
    };

    TrendAnalysis {
        trend,
        change,
        change_percent,
        latest_value: Some(latest),
        oldest_value: Some(oldest),
        data_points: usable.len(),
    }
}

/// Percent change over the last `days` days.
///
/// A change across `days` days needs `days + 1` daily observations, so the
/// window is one point wider than the day count. Non-directional windows
/// yield 0.
pub fn trend_percentage(points: &[MarketValuePoint], days: usize) -> f64 {
    let analysis = analyze_trend(points, days + 1);
    match analysis.trend {
        TrendDirection::Unknown | TrendDirection::InsufficientData => 0.0,
        _ => analysis.change_percent,
    }
}
