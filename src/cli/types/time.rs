//! Reference-time handling for analysis runs.

use crate::error::{MarketError, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The instant every "hours until" figure is measured from.
///
/// Defaults to the current UTC time. Pinning it (`--now`) makes a run over
/// a saved snapshot reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReferenceTime(pub DateTime<Utc>);

impl ReferenceTime {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for ReferenceTime {
    fn default() -> Self {
        Self(Utc::now())
    }
}

impl fmt::Display for ReferenceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl FromStr for ReferenceTime {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self> {
        parse_timestamp(s).map(Self)
    }
}

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as
/// midnight UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(rfc_err) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Ok(date.and_time(NaiveTime::MIN).and_utc()),
            Err(_) => Err(rfc_err.into()),
        },
    }
}
