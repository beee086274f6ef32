//! Type-safe wrappers for golf stats identifiers and dates.

pub mod ids;
pub mod time;

pub use ids::{EspnId, StatId, TournamentId};
pub use time::{ScoreboardDate, Season};
