//! Identifier types for the PGA TOUR and ESPN APIs.

use crate::error::{GolfError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upstream code selecting which PGA TOUR statistic table to request
/// (e.g. `"02675"` for Strokes Gained: Total).
///
/// Never empty.
///
/// # Examples
///
/// ```rust
/// use golf_stats::StatId;
///
/// let stat_id = StatId::new("02675").unwrap();
/// assert_eq!(stat_id.as_str(), "02675");
/// assert!(StatId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatId(String);

impl StatId {
    /// Create a StatId, rejecting empty or whitespace-only input.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(GolfError::EmptyStatId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StatId {
    type Err = GolfError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// PGA TOUR tournament identifier used to narrow stats to a single event
/// (e.g. `"R2024014"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TournamentId(pub String);

impl TournamentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TournamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TournamentId {
    type Err = GolfError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.to_string()))
    }
}

/// Accepts an ESPN id as either a JSON string or number.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdInner {
    Number(serde_json::Number),
    String(String),
}

impl From<IdInner> for EspnId {
    fn from(inner: IdInner) -> Self {
        Self(match inner {
            IdInner::Number(n) => n.to_string(),
            IdInner::String(s) => s,
        })
    }
}

/// ESPN identifier (event or athlete), always held as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "IdInner", into = "String")]
pub struct EspnId(pub String);

impl EspnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<EspnId> for String {
    fn from(EspnId(s): EspnId) -> Self {
        s
    }
}

impl fmt::Display for EspnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stat_id_rejects_empty() {
        assert!(matches!(StatId::new(""), Err(GolfError::EmptyStatId)));
        assert!(matches!("   ".parse::<StatId>(), Err(GolfError::EmptyStatId)));
    }

    #[test]
    fn test_stat_id_round_trips_display() {
        let id: StatId = "02675".parse().unwrap();
        assert_eq!(id.to_string(), "02675");
    }

    #[test]
    fn test_espn_id_from_number_or_string() {
        let from_num: EspnId = serde_json::from_value(json!(401580329)).unwrap();
        let from_str: EspnId = serde_json::from_value(json!("401580329")).unwrap();
        assert_eq!(from_num, from_str);
        assert_eq!(from_num.as_str(), "401580329");
    }

    #[test]
    fn test_espn_id_serializes_as_string() {
        let id = EspnId::new("401");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("401"));
    }
}
