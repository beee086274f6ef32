//! Golf stats scraper library
//!
//! Fetches PGA TOUR statistics and ESPN tournament leaderboards, flattens the
//! nested JSON into flat records, and writes them out as CSV.
//!
//! ## Pipelines
//!
//! - **Stat details** (`pga`): one GraphQL query against the PGA TOUR
//!   orchestrator, one row per player.
//! - **Schedule** (`espn`): the tournaments ESPN lists for a season.
//! - **Scoreboard** (`espn`): one row per competitor on a given date.
//! - **Full season** (`commands::full_season`): schedule then scoreboard for
//!   every event over a range of years, concatenated into one CSV.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use golf_stats::{config::Endpoints, core::ApiClient, espn::fetch_schedule, Season};
//!
//! # async fn example() -> golf_stats::Result<()> {
//! let client = ApiClient::new(Endpoints::default())?;
//! for entry in fetch_schedule(&client, Season::new(2024)).await? {
//!     println!("{} {}", entry.start_date, entry.tournament_name.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The stats API needs a key:
//! ```bash
//! export PGA_TOUR_API_KEY=...
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod espn;
pub mod logging;
pub mod pga;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{EspnId, ScoreboardDate, Season, StatId, TournamentId};
pub use crate::core::{Record, Table};
pub use error::{GolfError, Result};
