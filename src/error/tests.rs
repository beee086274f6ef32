//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod golf_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let golf_error = GolfError::from(json_error);

        match golf_error {
            GolfError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let golf_error = GolfError::from(io_error);

        match golf_error {
            GolfError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let golf_error = GolfError::from(header_error);

        match golf_error {
            GolfError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "twenty".parse::<u16>().unwrap_err();
        let golf_error = GolfError::from(parse_error);

        match golf_error {
            GolfError::InvalidYear(_) => (),
            _ => panic!("Expected InvalidYear error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_error = anyhow::anyhow!("disk full").context("writing leaderboard.csv");
        let golf_error = GolfError::from(anyhow_error);

        match golf_error {
            GolfError::Storage { message } => {
                assert!(message.contains("writing leaderboard.csv"));
                assert!(message.contains("disk full"));
            }
            _ => panic!("Expected Storage error variant"),
        }
    }

    #[test]
    fn test_csv_read_failure_becomes_storage_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");
        let golf_error = GolfError::from(crate::storage::read_table(&path).unwrap_err());

        match golf_error {
            GolfError::Storage { message } => assert!(message.contains("absent.csv")),
            other => panic!("Expected Storage error variant, got {other:?}"),
        }
    }

    #[test]
    fn test_season_not_found_message() {
        let err = GolfError::SeasonNotFound { year: 2019 };
        assert_eq!(
            err.to_string(),
            "No season data found for 2019 in tourschedule API"
        );
    }

    #[test]
    fn test_missing_api_key_message() {
        let err = GolfError::MissingApiKey {
            env_var: "PGA_TOUR_API_KEY".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("PGA_TOUR_API_KEY"));
        assert!(msg.contains("not set"));
    }

    #[test]
    fn test_graphql_message_joins_all_errors() {
        let err = GolfError::GraphQl {
            messages: vec!["bad statId".to_string(), "bad year".to_string()],
        };
        assert_eq!(err.to_string(), "GraphQL query failed: bad statId; bad year");
    }

    #[test]
    fn test_invalid_year_range_message() {
        let err = GolfError::InvalidYearRange {
            start: 2025,
            end: 2015,
        };
        assert_eq!(err.to_string(), "Invalid year range: 2025 is after 2015");
    }

    #[test]
    fn test_no_events_fetched_message() {
        assert!(GolfError::NoEventsFetched
            .to_string()
            .contains("check your schedule API"));
    }

    #[test]
    fn test_error_in_result_propagation() {
        fn fails() -> Result<()> {
            Err(GolfError::NoData)
        }

        fn outer() -> Result<u32> {
            fails()?;
            Ok(1)
        }

        match outer().unwrap_err() {
            GolfError::NoData => (),
            _ => panic!("Expected NoData error"),
        }
    }
}
