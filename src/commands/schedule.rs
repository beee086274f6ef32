//! `get schedule` and `get scoreboard`: single ESPN lookups.

use tracing::info;

use crate::{
    cli::types::{ScoreboardDate, Season},
    config::Config,
    core::ApiClient,
    espn::{fetch_schedule, fetch_scoreboard, schedule_table, scoreboard_table},
    Result,
};

use super::common::{emit_table, OutputFormat};

pub async fn handle_schedule(season: Season, as_json: bool) -> Result<()> {
    let client = ApiClient::new(Config::from_env().endpoints)?;
    // tarpaulin::skip - HTTP call, tested via integration tests
    let entries = fetch_schedule(&client, season).await?;
    info!(%season, events = entries.len(), "fetched schedule");

    emit_table(
        &schedule_table(&entries),
        None,
        OutputFormat::from_json_flag(as_json),
    )
}

pub async fn handle_scoreboard(date: ScoreboardDate, as_json: bool) -> Result<()> {
    let client = ApiClient::new(Config::from_env().endpoints)?;
    // tarpaulin::skip - HTTP call, tested via integration tests
    let records = fetch_scoreboard(&client, date).await?;
    info!(%date, players = records.len(), "fetched scoreboard");

    emit_table(
        &scoreboard_table(&records),
        None,
        OutputFormat::from_json_flag(as_json),
    )
}
