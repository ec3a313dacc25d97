//! Fantasy market player positions.

use crate::error::MarketError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Squad positions as numbered by the game API.
///
/// | ID | Position   |
/// |----|------------|
/// | 1  | Goalkeeper |
/// | 2  | Defender   |
/// | 3  | Midfielder |
/// | 4  | Forward    |
/// | 5  | Coach      |
///
/// # Examples
///
/// ```rust
/// use fantasy_market::Position;
///
/// let mid = Position::try_from(3).unwrap();
/// assert_eq!(mid, Position::MID);
/// assert_eq!(mid.to_string(), "MID");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    GK,
    DEF,
    MID,
    FWD,
    CH,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::GK,
        Position::DEF,
        Position::MID,
        Position::FWD,
        Position::CH,
    ];

    /// Convert an API position ID to a Position enum.
    pub fn try_from(id: u8) -> Result<Self, MarketError> {
        match id {
            1 => Ok(Position::GK),
            2 => Ok(Position::DEF),
            3 => Ok(Position::MID),
            4 => Ok(Position::FWD),
            5 => Ok(Position::CH),
            _ => Err(MarketError::InvalidPosition {
                position: id.to_string(),
            }),
        }
    }

    pub fn to_u8(&self) -> u8 {
        match self {
            Position::GK => 1,
            Position::DEF => 2,
            Position::MID => 3,
            Position::FWD => 4,
            Position::CH => 5,
        }
    }

    /// Long-form name, e.g. "Goalkeeper".
    pub fn full_name(&self) -> &'static str {
        match self {
            Position::GK => "Goalkeeper",
            Position::DEF => "Defender",
            Position::MID => "Midfielder",
            Position::FWD => "Forward",
            Position::CH => "Coach",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::GK => "GK",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
            Position::CH => "CH",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GK" | "GOALKEEPER" | "POR" => Ok(Position::GK),
            "DEF" | "DEFENDER" => Ok(Position::DEF),
            "MID" | "MIDFIELDER" | "CEN" => Ok(Position::MID),
            "FWD" | "FORWARD" | "DEL" => Ok(Position::FWD),
            "CH" | "COACH" | "ENT" => Ok(Position::CH),
            _ => Err(MarketError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
