//! `get stat-details`: one PGA TOUR stat table.

use std::path::PathBuf;
use tracing::info;

use crate::{
    cli::types::{Season, StatId, TournamentId},
    config::Config,
    core::ApiClient,
    pga::{fetch_stat_details, StatFilters, StatQuery},
    Result,
};

use super::common::{emit_table, OutputFormat};

/// Parameters for the stat details command
#[derive(Debug)]
pub struct StatDetailsParams {
    pub stat_id: StatId,
    pub year: Option<Season>,
    pub tournament_id: Option<TournamentId>,
    pub api_key: Option<String>,
    pub output: Option<PathBuf>,
    pub as_json: bool,
    pub list_filters: bool,
}

pub async fn handle_stat_details(params: StatDetailsParams) -> Result<()> {
    let config = Config::from_env().with_api_key(params.api_key);
    let api_key = config.require_api_key()?;
    let client = ApiClient::new(config.endpoints.clone())?;

    let query = StatQuery::new(params.stat_id)
        .with_year(params.year)
        .with_tournament(params.tournament_id);

    // tarpaulin::skip - HTTP call, tested via integration tests
    let details = fetch_stat_details(&client, api_key, &query).await?;

    if params.list_filters {
        print_filters(&details.filters());
        return Ok(());
    }

    let table = details.to_table();
    info!(
        stat_id = %query.stat_id,
        rows = table.len(),
        "fetched stat details"
    );

    emit_table(
        &table,
        params.output.as_deref(),
        OutputFormat::from_json_flag(params.as_json),
    )
}

fn print_filters(filters: &StatFilters) {
    // tarpaulin::skip - console output
    println!("Years:");
    for y in &filters.years {
        println!("  {} ({})", y.year, y.display_season);
    }
    println!("Tournaments:");
    for t in &filters.tournaments {
        println!("  {} {}", t.tournament_id, t.display_name);
    }
}
