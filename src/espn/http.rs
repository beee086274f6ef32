use crate::{
    cli::types::{ScoreboardDate, Season},
    core::{espn_headers, ApiClient},
    espn::{
        flatten::{schedule_entries, scoreboard_records},
        types::{ScheduleEntry, ScheduleResponse, ScoreboardRecord, ScoreboardResponse},
    },
    Result,
};

/// Every tournament ESPN lists for `season`.
pub async fn fetch_schedule(client: &ApiClient, season: Season) -> Result<Vec<ScheduleEntry>> {
    let params = [("season", season.to_string())];
    let body = client
        .get_json(&client.endpoints().schedule_url, &params, espn_headers())
        .await?;
    let resp: ScheduleResponse = serde_json::from_value(body)?;
    schedule_entries(&resp, season)
}

/// Every competitor on the scoreboard for `date`.
pub async fn fetch_scoreboard(
    client: &ApiClient,
    date: ScoreboardDate,
) -> Result<Vec<ScoreboardRecord>> {
    let params = [("dates", date.to_string())];
    let body = client
        .get_json(&client.endpoints().scoreboard_url, &params, espn_headers())
        .await?;
    let resp: ScoreboardResponse = serde_json::from_value(body)?;
    Ok(scoreboard_records(&resp))
}
