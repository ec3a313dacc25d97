//! Player alerts raised during analysis.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::market::{
    format::format_millions,
    policy::*,
    types::{TrendAnalysis, TrendDirection},
};

/// Something about a player worth the manager's attention.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    SignificantDrop { days: usize, percent: f64 },
    StrongGrowth { days: usize, percent: f64 },
    MajorDecline { days: usize, percent: f64 },
    SaleExpiresInHours(i64),
    SaleExpiresInDays(i64),
    OnSale { price: u64 },
    LowBuyoutClause { clause: u64 },
    ProtectionExpired,
    ProtectionExpiresInHours(i64),
    ProtectionExpiresInDays(i64),
}

impl Alert {
    /// Alerts that call for action rather than information.
    pub fn is_high_priority(&self) -> bool {
        matches!(
            self,
            Alert::SignificantDrop { .. }
                | Alert::LowBuyoutClause { .. }
                | Alert::ProtectionExpired
                | Alert::ProtectionExpiresInHours(_)
                | Alert::ProtectionExpiresInDays(_)
        )
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::SignificantDrop { days, percent } => {
                write!(f, "⚠️ Significant drop in {} days: {}%", days, percent)
            }
            Alert::StrongGrowth { days, percent } => {
                write!(f, "🚀 Strong growth in {} days: +{}%", days, percent)
            }
            Alert::MajorDecline { days, percent } => {
                write!(f, "📉 Major decline in {} days: {}%", days, percent)
            }
            Alert::SaleExpiresInHours(hours) => write!(f, "⏰ Sale expires in {}h", hours),
            Alert::SaleExpiresInDays(days) => write!(f, "⏰ Sale expires in {} days", days),
            Alert::OnSale { price } => write!(
                f,
                "💰 Your player is on sale for {}",
                format_millions(*price as i64)
            ),
            Alert::LowBuyoutClause { clause } => {
                write!(f, "⚠️ Low buyout clause: {}", format_millions(*clause as i64))
            }
            Alert::ProtectionExpired => write!(
                f,
                "🚨 Buyout clause protection has EXPIRED - player can be bought out!"
            ),
            Alert::ProtectionExpiresInHours(hours) => {
                write!(f, "🔓 Buyout clause protection expires in {}h", hours)
            }
            Alert::ProtectionExpiresInDays(days) => {
                write!(f, "🔓 Buyout clause protection expires in {} days", days)
            }
        }
    }
}

impl Serialize for Alert {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Alerts derived from the two trend windows.
pub fn trend_alerts(
    short: &TrendAnalysis,
    short_days: usize,
    long: &TrendAnalysis,
    long_days: usize,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if short.trend == TrendDirection::Falling && short.change_percent.abs() > ALERT_SHORT_DROP_PERCENT {
        alerts.push(Alert::SignificantDrop {
            days: short_days,
            percent: short.change_percent,
        });
    }
    if short.trend == TrendDirection::Rising && short.change_percent > ALERT_SHORT_GROWTH_PERCENT {
        alerts.push(Alert::StrongGrowth {
            days: short_days,
            percent: short.change_percent,
        });
    }
    if long.trend == TrendDirection::Falling && long.change_percent.abs() > ALERT_LONG_DECLINE_PERCENT {
        alerts.push(Alert::MajorDecline {
            days: long_days,
            percent: long.change_percent,
        });
    }

    alerts
}

/// Expiry alert for a listing that ends in `hours`. Nothing once expired or
/// beyond a week.
pub fn sale_expiry_alert(hours: i64) -> Option<Alert> {
    if hours <= 0 {
        None
    } else if hours <= ALERT_HOURS_PRECISION {
        Some(Alert::SaleExpiresInHours(hours))
    } else if hours <= ALERT_DAYS_HORIZON {
        Some(Alert::SaleExpiresInDays(ceil_days(hours)))
    } else {
        None
    }
}

/// Alert for buyout protection ending in `hours`.
pub fn protection_alert(hours: i64) -> Option<Alert> {
    if hours <= 0 {
        Some(Alert::ProtectionExpired)
    } else if hours <= ALERT_HOURS_PRECISION {
        Some(Alert::ProtectionExpiresInHours(hours))
    } else if hours <= ALERT_DAYS_HORIZON {
        Some(Alert::ProtectionExpiresInDays(ceil_days(hours)))
    } else {
        None
    }
}

/// Whether a clause is cheap relative to the player's listed value.
pub fn is_low_buyout(clause: u64, value: u64) -> bool {
    (clause as f64) < value as f64 * ALERT_LOW_BUYOUT_RATIO
}

fn ceil_days(hours: i64) -> i64 {
    (hours + 23) / 24
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(trend: TrendDirection, change_percent: f64) -> TrendAnalysis {
        TrendAnalysis {
            trend,
            change_percent,
            data_points: 5,
            ..TrendAnalysis::unknown()
        }
    }

    #[test]
    fn test_trend_alert_thresholds() {
        let stable = window(TrendDirection::Stable, 0.5);

        let drop = trend_alerts(&window(TrendDirection::Falling, -5.5), 5, &stable, 10);
        assert_eq!(
            drop,
            vec![Alert::SignificantDrop {
                days: 5,
                percent: -5.5
            }]
        );

        let mild = trend_alerts(&window(TrendDirection::Falling, -5.0), 5, &stable, 10);
        assert!(mild.is_empty());

        let growth = trend_alerts(&window(TrendDirection::Rising, 10.01), 5, &stable, 10);
        assert_eq!(growth.len(), 1);
        assert_eq!(growth[0].to_string(), "🚀 Strong growth in 5 days: +10.01%");

        let decline = trend_alerts(&stable, 5, &window(TrendDirection::Falling, -12.0), 10);
        assert_eq!(decline[0].to_string(), "📉 Major decline in 10 days: -12%");
    }

    #[test]
    fn test_both_windows_can_alert() {
        let alerts = trend_alerts(
            &window(TrendDirection::Falling, -8.0),
            5,
            &window(TrendDirection::Falling, -15.0),
            10,
        );
        assert_eq!(alerts.len(), 2);
        assert!(alerts[0].is_high_priority());
        assert!(!alerts[1].is_high_priority());
    }

    #[test]
    fn test_sale_expiry_alert() {
        assert_eq!(sale_expiry_alert(0), None);
        assert_eq!(sale_expiry_alert(-4), None);
        assert_eq!(sale_expiry_alert(5), Some(Alert::SaleExpiresInHours(5)));
        assert_eq!(sale_expiry_alert(48), Some(Alert::SaleExpiresInHours(48)));
        assert_eq!(sale_expiry_alert(49), Some(Alert::SaleExpiresInDays(3)));
        assert_eq!(sale_expiry_alert(168), Some(Alert::SaleExpiresInDays(7)));
        assert_eq!(sale_expiry_alert(169), None);
    }

    #[test]
    fn test_protection_alert() {
        assert_eq!(protection_alert(0), Some(Alert::ProtectionExpired));
        assert_eq!(protection_alert(-30), Some(Alert::ProtectionExpired));
        assert_eq!(protection_alert(12), Some(Alert::ProtectionExpiresInHours(12)));
        assert_eq!(protection_alert(100), Some(Alert::ProtectionExpiresInDays(5)));
        assert_eq!(protection_alert(200), None);
        assert!(Alert::ProtectionExpired.is_high_priority());
    }

    #[test]
    fn test_low_buyout() {
        assert!(is_low_buyout(14_000_000, 10_000_000));
        assert!(!is_low_buyout(15_000_000, 10_000_000));
    }

    #[test]
    fn test_display_and_serialize() {
        let alert = Alert::OnSale { price: 12_300_000 };
        assert_eq!(alert.to_string(), "💰 Your player is on sale for 12.3M€");
        assert_eq!(
            serde_json::to_value(&alert).unwrap(),
            serde_json::json!("💰 Your player is on sale for 12.3M€")
        );
        assert_eq!(
            Alert::LowBuyoutClause { clause: 7_000_000 }.to_string(),
            "⚠️ Low buyout clause: 7.0M€"
        );
    }
}
