//! Season builder: every scoreboard of every scheduled event over a span of
//! years, concatenated into one leaderboard table.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::{
    cli::types::Season,
    config::Config,
    core::{ApiClient, Table},
    error::GolfError,
    espn::{fetch_schedule, fetch_scoreboard, scoreboard_table},
    storage, Result,
};

pub const DEFAULT_START_YEAR: u16 = 2015;
pub const DEFAULT_END_YEAR: u16 = 2025;
pub const DEFAULT_OUTPUT_PATH: &str = "data/espn_full_leaderboards_2015_2025.csv";

/// Columns every fetched event contributes, even one with an empty scoreboard.
pub const TAG_COLUMNS: [&str; 2] = ["year", "tournamentName"];

/// Parameters for the full season command
#[derive(Debug)]
pub struct FullSeasonParams {
    pub start_year: Season,
    pub end_year: Season,
    pub output: PathBuf,
}

impl Default for FullSeasonParams {
    fn default() -> Self {
        Self {
            start_year: Season::new(DEFAULT_START_YEAR),
            end_year: Season::new(DEFAULT_END_YEAR),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Fetch and concatenate every event's scoreboard for `start..=end`.
///
/// Years ascend; events keep schedule order. Each row is tagged with the
/// season and the scheduled tournament name. Any failed request aborts the
/// whole run. Fails with `NoEventsFetched` if no season had any events.
pub async fn build_full_season(client: &ApiClient, start: Season, end: Season) -> Result<Table> {
    if start > end {
        return Err(GolfError::InvalidYearRange {
            start: start.as_u16(),
            end: end.as_u16(),
        });
    }

    let mut master = Table::new();
    let mut events_fetched = 0usize;

    for yr in start.as_u16()..=end.as_u16() {
        let season = Season::new(yr);
        let sched = fetch_schedule(client, season).await?;
        info!("→ {yr}: found {} events", sched.len());

        for entry in sched {
            let tn = entry.tournament_name.clone();
            let label = tn.as_deref().unwrap_or("(unnamed)");
            info!("   • {label} on {}", entry.start_date);

            let mut lb = fetch_scoreboard(client, entry.start_date).await?;
            if let Some(expected) = tn.as_deref() {
                for other in lb
                    .iter()
                    .map(|r| r.tournament.as_str())
                    .filter(|t| *t != expected)
                    .collect::<std::collections::BTreeSet<_>>()
                {
                    warn!(
                        scheduled = expected,
                        scoreboard = other,
                        date = %entry.start_date,
                        "scoreboard event differs from scheduled tournament"
                    );
                }
            }

            for rec in &mut lb {
                rec.tag(season, tn.clone());
            }
            let mut event = scoreboard_table(&lb);
            if event.columns().is_empty() {
                event = Table::with_columns(TAG_COLUMNS);
            }
            master.append(event);
            events_fetched += 1;
        }
    }

    if events_fetched == 0 {
        return Err(GolfError::NoEventsFetched);
    }
    Ok(master)
}

/// Build the table and write it to `output`, replacing any existing file.
pub async fn write_full_season(
    client: &ApiClient,
    start: Season,
    end: Season,
    output: &Path,
) -> Result<Table> {
    let master = build_full_season(client, start, end).await?;
    storage::write_table(output, &master)?;
    Ok(master)
}

pub async fn handle_full_season(params: FullSeasonParams) -> Result<()> {
    let client = ApiClient::new(Config::from_env().endpoints)?;
    // tarpaulin::skip - HTTP/file I/O call, tested via integration tests
    let master =
        write_full_season(&client, params.start_year, params.end_year, &params.output).await?;

    println!(
        "\nDone! Wrote {} rows to {}",
        master.len(),
        params.output.display()
    ); // tarpaulin::skip
    Ok(())
}
