//! GraphQL request for the PGA TOUR `statDetails` query.

use serde::Serialize;

use crate::cli::types::{Season, StatId, TournamentId};

pub const OPERATION_NAME: &str = "StatDetails";

/// PGA TOUR (as opposed to Korn Ferry, Champions, ...).
pub const TOUR_CODE: &str = "R";

pub const STAT_DETAILS_QUERY: &str = r#"
query StatDetails($tourCode: TourCode!, $statId: String!, $year: Int, $eventQuery: StatDetailEventQuery) {
  statDetails(
    tourCode: $tourCode
    statId: $statId
    year: $year
    eventQuery: $eventQuery
  ) {
    tournamentPills { tournamentId displayName }
    yearPills       { year displaySeason    }

    rows {
      __typename
      ... on StatDetailsPlayer {
        rank
        playerId
        playerName
        country
        stats { statName statValue }
      }
    }
  }
}
"#;

/// What to ask for. No tournament means season-to-date numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatQuery {
    pub stat_id: StatId,
    pub year: Option<Season>,
    pub tournament_id: Option<TournamentId>,
}

impl StatQuery {
    pub fn new(stat_id: StatId) -> Self {
        Self {
            stat_id,
            year: None,
            tournament_id: None,
        }
    }

    pub fn with_year(mut self, year: Option<Season>) -> Self {
        self.year = year;
        self
    }

    pub fn with_tournament(mut self, tournament_id: Option<TournamentId>) -> Self {
        self.tournament_id = tournament_id;
        self
    }

    pub fn to_request(&self) -> GraphQlRequest<'_> {
        GraphQlRequest {
            operation_name: OPERATION_NAME,
            query: STAT_DETAILS_QUERY,
            variables: StatDetailsVariables {
                tour_code: TOUR_CODE,
                stat_id: self.stat_id.as_str(),
                year: self.year.map(|y| y.as_u16()),
                event_query: self.tournament_id.as_ref().map(|t| EventQuery {
                    tournament_id: t.as_str(),
                }),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
    pub query: &'a str,
    pub variables: StatDetailsVariables<'a>,
}

/// `year` and `eventQuery` serialize as `null` when unset.
#[derive(Debug, Serialize)]
pub struct StatDetailsVariables<'a> {
    #[serde(rename = "tourCode")]
    pub tour_code: &'a str,
    #[serde(rename = "statId")]
    pub stat_id: &'a str,
    pub year: Option<u16>,
    #[serde(rename = "eventQuery")]
    pub event_query: Option<EventQuery<'a>>,
}

#[derive(Debug, Serialize)]
pub struct EventQuery<'a> {
    #[serde(rename = "tournamentId")]
    pub tournament_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_season_to_date_variables_are_null() {
        let query = StatQuery::new(StatId::new("02675").unwrap());
        let body = serde_json::to_value(query.to_request()).unwrap();

        assert_eq!(body["operationName"], "StatDetails");
        assert_eq!(
            body["variables"],
            json!({
                "tourCode": "R",
                "statId": "02675",
                "year": null,
                "eventQuery": null
            })
        );
        assert!(body["query"].as_str().unwrap().contains("statDetails("));
    }

    #[test]
    fn test_tournament_filter_becomes_event_query() {
        let query = StatQuery::new(StatId::new("120").unwrap())
            .with_year(Some(Season::new(2024)))
            .with_tournament(Some(TournamentId::new("R2024014")));
        let body = serde_json::to_value(query.to_request()).unwrap();

        assert_eq!(body["variables"]["year"], 2024);
        assert_eq!(
            body["variables"]["eventQuery"],
            json!({ "tournamentId": "R2024014" })
        );
    }
}
