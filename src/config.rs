//! Runtime configuration read from the environment.

use crate::error::{GolfError, Result};

/// Environment variable holding the PGA TOUR stats API key.
pub const API_KEY_ENV_VAR: &str = "PGA_TOUR_API_KEY";
pub const STATS_URL_ENV_VAR: &str = "GOLF_STATS_STATS_URL";
pub const SCHEDULE_URL_ENV_VAR: &str = "GOLF_STATS_SCHEDULE_URL";
pub const SCOREBOARD_URL_ENV_VAR: &str = "GOLF_STATS_SCOREBOARD_URL";

/// PGA TOUR GraphQL orchestrator.
pub const STATS_API_URL: &str = "https://orchestrator.pgatour.com/graphql";
/// ESPN season schedule, queried with `season=<year>`.
pub const SCHEDULE_API_URL: &str =
    "http://site.api.espn.com/apis/site/v2/sports/golf/pga/tourschedule";
/// ESPN daily scoreboard, queried with `dates=<YYYYMMDD>`.
pub const SCOREBOARD_API_URL: &str =
    "https://site.api.espn.com/apis/site/v2/sports/golf/pga/scoreboard";

/// Where each upstream API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub stats_url: String,
    pub schedule_url: String,
    pub scoreboard_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            stats_url: STATS_API_URL.to_string(),
            schedule_url: SCHEDULE_API_URL.to_string(),
            scoreboard_url: SCOREBOARD_API_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Point every endpoint at one base URL (a mock server in tests).
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            stats_url: format!("{base}/graphql"),
            schedule_url: format!("{base}/apis/site/v2/sports/golf/pga/tourschedule"),
            scoreboard_url: format!("{base}/apis/site/v2/sports/golf/pga/scoreboard"),
        }
    }

    /// Defaults, overridden by any `GOLF_STATS_*_URL` variables that are set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            stats_url: std::env::var(STATS_URL_ENV_VAR).unwrap_or(defaults.stats_url),
            schedule_url: std::env::var(SCHEDULE_URL_ENV_VAR).unwrap_or(defaults.schedule_url),
            scoreboard_url: std::env::var(SCOREBOARD_URL_ENV_VAR)
                .unwrap_or(defaults.scoreboard_url),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub endpoints: Endpoints,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV_VAR)
                .ok()
                .filter(|k| !k.trim().is_empty()),
            endpoints: Endpoints::from_env(),
        }
    }

    /// A key passed on the command line wins over the environment.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if api_key.is_some() {
            self.api_key = api_key;
        }
        self
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| GolfError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            })
    }
}
