use crate::cli::types::{EspnId, ScoreboardDate, Season};
use serde::{Deserialize, Deserializer};
use serde_json::Value;


/// ESPN sends `null` where it means "none"; treat that like a missing key.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root of `tourschedule?season=<year>`
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default, deserialize_with = "de_null_default")]
    pub seasons: Vec<SeasonBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonBlock {
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub events: Vec<ScheduleEvent>,
}

/// A tournament on the schedule. ESPN is inconsistent about which name and
/// start-date keys it fills in, so all candidates are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleEvent {
    pub id: EspnId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
}

/// Root of `scoreboard?dates=<YYYYMMDD>`
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreboardResponse {
    #[serde(default, deserialize_with = "de_null_default")]
    pub events: Vec<ScoreboardEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreboardEvent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub competitions: Vec<Competition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Competition {
    #[serde(default, deserialize_with = "de_null_default")]
    pub competitors: Vec<Competitor>,
}

/// One player's line on a leaderboard.
#[derive(Debug, Clone, Deserialize)]
pub struct Competitor {
    #[serde(default)]
    pub id: Option<EspnId>,
    /// Leaderboard order, passed through untouched.
    #[serde(default)]
    pub order: Value,
    #[serde(default)]
    pub competitor: Option<Athlete>,
    #[serde(default)]
    pub athlete: Option<Athlete>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub linescores: Vec<LineScore>,
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub score: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Athlete {
    #[serde(default)]
    pub id: Option<EspnId>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineScore {
    #[serde(rename = "displayValue", default)]
    pub display_value: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub score: Value,
    #[serde(rename = "toPar", default)]
    pub to_par: Value,
}

/// One tournament of a season, normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub espn_id: EspnId,
    pub tournament_name: Option<String>,
    pub start_date: ScoreboardDate,
    pub year: Season,
}

/// One player's result on one scoreboard date
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreboardRecord {
    pub tournament: String,
    pub player_id: Option<String>,
    pub player_name: Option<String>,
    pub position: Value,
    /// `R1..` in order; `None` where the display value is not an integer.
    pub rounds: Vec<Option<i64>>,
    pub total: Value,
    pub to_par: Value,
    /// Set by the season builder.
    pub year: Option<Season>,
    pub tournament_name: Option<String>,
}
