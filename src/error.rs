//! Error types for the golf stats scraper

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, GolfError>;

#[derive(Error, Debug)]
pub enum GolfError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse year: {0}")]
    InvalidYear(#[from] std::num::ParseIntError),

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Stat identifier must not be empty")]
    EmptyStatId,

    #[error("Invalid year range: {start} is after {end}")]
    InvalidYearRange { start: u16, end: u16 },

    #[error("GraphQL query failed: {}", .messages.join("; "))]
    GraphQl { messages: Vec<String> },

    #[error("Stats API returned no data")]
    NoData,

    #[error("No season data found for {year} in tourschedule API")]
    SeasonNotFound { year: u16 },

    #[error("Event {event_id} has no start date")]
    MissingStartDate { event_id: String },

    #[error("Invalid date: {value}")]
    InvalidDate { value: String },

    #[error("No data fetched—check your schedule API")]
    NoEventsFetched,

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl From<anyhow::Error> for GolfError {
    fn from(err: anyhow::Error) -> Self {
        GolfError::Storage {
            message: format!("{err:#}"),
        }
    }
}
