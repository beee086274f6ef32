use serde::{Deserialize, Serialize};
use serde_json::Value;


/// GraphQL envelope: `data` may be null when `errors` is populated.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<StatDetailsData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct StatDetailsData {
    #[serde(rename = "statDetails")]
    pub stat_details: StatDetails,
}

/// Root of the `statDetails` query result
#[derive(Debug, Clone, Deserialize)]
pub struct StatDetails {
    #[serde(rename = "tournamentPills", default)]
    pub tournament_pills: Vec<TournamentPill>,
    #[serde(rename = "yearPills", default)]
    pub year_pills: Vec<YearPill>,
    pub rows: Vec<StatRow>,
}

/// Tournaments the stat can be narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TournamentPill {
    #[serde(rename = "tournamentId")]
    pub tournament_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Seasons the stat is available for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct YearPill {
    pub year: u16,
    #[serde(rename = "displaySeason")]
    pub display_season: String,
}

/// A table row, discriminated by its GraphQL `__typename`.
///
/// Only player rows carry data we keep; tour averages and any future row
/// types land in `Other`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
pub enum StatRow {
    StatDetailsPlayer(PlayerRow),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRow {
    pub rank: i64,
    #[serde(rename = "playerId")]
    pub player_id: String,
    #[serde(rename = "playerName")]
    pub player_name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub stats: Vec<StatValue>,
}

/// One named column of a stat table, e.g. `Avg` or `Total SG:APP`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatValue {
    #[serde(rename = "statName")]
    pub stat_name: String,
    #[serde(rename = "statValue")]
    pub stat_value: Value,
}

/// Flattened player stat row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRecord {
    pub rank: i64,
    #[serde(rename = "playerId")]
    pub player_id: String,
    #[serde(rename = "playerName")]
    pub player_name: String,
    /// `(statName, statValue)` in response order.
    pub stats: Vec<(String, Value)>,
}

/// Filter values reported alongside a stat table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatFilters {
    pub tournaments: Vec<TournamentPill>,
    pub years: Vec<YearPill>,
}
