//! ESPN site API pipeline: season schedule and daily scoreboard.

pub mod flatten;
pub mod http;
pub mod types;

pub use flatten::{schedule_table, scoreboard_table};
pub use http::{fetch_schedule, fetch_scoreboard};
pub use types::{ScheduleEntry, ScoreboardRecord};
