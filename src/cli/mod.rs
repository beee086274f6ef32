//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{ScoreboardDate, Season, StatId, TournamentId};

use crate::commands::full_season::{DEFAULT_END_YEAR, DEFAULT_OUTPUT_PATH, DEFAULT_START_YEAR};

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Fetch one PGA TOUR stat table (one row per player).
    ///
    /// Without `--tournament-id` the numbers are season-to-date.
    StatDetails {
        /// Stat identifier, e.g. `02675` (SG: Total).
        #[clap(long)]
        stat_id: StatId,

        /// Season year (e.g. 2024). Omit for the current season.
        #[clap(long, short)]
        year: Option<Season>,

        /// Narrow to one tournament, e.g. `R2024014`.
        #[clap(long, short)]
        tournament_id: Option<TournamentId>,

        /// API key (or set `PGA_TOUR_API_KEY` env var).
        #[clap(long)]
        api_key: Option<String>,

        /// Write CSV to this file instead of stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Output results as JSON instead of CSV.
        #[clap(long)]
        json: bool,

        /// List the years and tournaments this stat can be filtered by.
        #[clap(long)]
        list_filters: bool,
    },

    /// List the tournaments ESPN schedules for a season.
    Schedule {
        /// Season year (e.g. 2024).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Output results as JSON instead of CSV.
        #[clap(long)]
        json: bool,
    },

    /// Fetch the leaderboard ESPN shows for one date.
    Scoreboard {
        /// Date as YYYYMMDD.
        #[clap(long, short)]
        date: ScoreboardDate,

        /// Output results as JSON instead of CSV.
        #[clap(long)]
        json: bool,
    },

    /// Fetch every tournament's leaderboard over a range of seasons into one CSV.
    FullSeason {
        /// First season (inclusive).
        #[clap(long, default_value_t = Season::new(DEFAULT_START_YEAR))]
        start_year: Season,

        /// Last season (inclusive).
        #[clap(long, default_value_t = Season::new(DEFAULT_END_YEAR))]
        end_year: Season,

        /// CSV destination; overwritten if it exists.
        #[clap(long, short, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "golf-stats", about = "PGA TOUR stats and ESPN leaderboard scraper")]
pub struct GolfStats {
    /// Log request details to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the PGA TOUR and ESPN APIs
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
