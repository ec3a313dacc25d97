//! Rounding and currency display helpers.

/// Round to two decimals, the precision every percent in the engine uses.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Render minor currency units as millions, e.g. `12_345_678` -> `"12.3M€"`.
pub fn format_millions(amount: i64) -> String {
    format!("{:.1}M€", amount as f64 / 1_000_000.0)
}

/// `ceil((target - now) / 1h)`, the whole hours left until `target`.
///
/// Negative once `target` has passed.
pub fn hours_until(target: chrono::DateTime<chrono::Utc>, now: chrono::DateTime<chrono::Utc>) -> i64 {
    let millis = (target - now).num_milliseconds();
    (millis as f64 / 3_600_000.0).ceil() as i64
}

/// Fractional hours left until `target`.
pub fn fractional_hours_until(
    target: chrono::DateTime<chrono::Utc>,
    now: chrono::DateTime<chrono::Utc>,
) -> f64 {
    (target - now).num_milliseconds() as f64 / 3_600_000.0
}
