//! Time-related types: golf seasons and scoreboard dates.

use crate::error::{GolfError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = GolfError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Format ESPN expects for the scoreboard `dates` parameter.
pub const SCOREBOARD_DATE_FORMAT: &str = "%Y%m%d";

/// A calendar day rendered as `YYYYMMDD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScoreboardDate(NaiveDate);

impl ScoreboardDate {
    /// Parse an ESPN schedule timestamp into the day it falls on.
    ///
    /// Accepts RFC 3339 (`2020-01-01T00:00:00Z`), ESPN's minute-precision
    /// form (`2020-01-01T05:00Z`), and a bare date (`2020-01-01`). The date
    /// is taken as written; no timezone shift is applied.
    pub fn from_iso(value: &str) -> Result<Self> {
        let invalid = || GolfError::InvalidDate {
            value: value.to_string(),
        };
        let trimmed = value.trim();

        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt.date_naive()));
        }
        for fmt in ["%Y-%m-%dT%H:%MZ", "%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(dt) = chrono::DateTime::parse_from_str(trimmed, fmt) {
                return Ok(Self(dt.date_naive()));
            }
            if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, fmt) {
                return Ok(Self(dt.date()));
            }
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for ScoreboardDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SCOREBOARD_DATE_FORMAT))
    }
}

impl FromStr for ScoreboardDate {
    type Err = GolfError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), SCOREBOARD_DATE_FORMAT)
            .map(Self)
            .map_err(|_| GolfError::InvalidDate {
                value: s.to_string(),
            })
    }
}
