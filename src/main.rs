//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use std::process::ExitCode;

use golf_stats::{
    cli::{Commands, GetCmd, GolfStats},
    commands::{
        full_season::{handle_full_season, FullSeasonParams},
        schedule::{handle_schedule, handle_scoreboard},
        stat_details::{handle_stat_details, StatDetailsParams},
    },
    logging::setup_logging,
    GolfError, Result,
};

/// Run the CLI. Requests are issued one at a time on a single thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let app = GolfStats::parse();
    setup_logging(app.verbose);

    match run(app.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn failure_message(err: &GolfError) -> String {
    format!("Error: {err}")
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Get { cmd } => match cmd {
            GetCmd::StatDetails {
                stat_id,
                year,
                tournament_id,
                api_key,
                output,
                json,
                list_filters,
            } => {
                handle_stat_details(StatDetailsParams {
                    stat_id,
                    year,
                    tournament_id,
                    api_key,
                    output,
                    as_json: json,
                    list_filters,
                })
                .await?
            }

            GetCmd::Schedule { season, json } => handle_schedule(season, json).await?,

            GetCmd::Scoreboard { date, json } => handle_scoreboard(date, json).await?,

            GetCmd::FullSeason {
                start_year,
                end_year,
                output,
            } => {
                handle_full_season(FullSeasonParams {
                    start_year,
                    end_year,
                    output,
                })
                .await?
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_uses_display_text() {
        let msg = failure_message(&GolfError::SeasonNotFound { year: 2020 });
        assert_eq!(msg, "Error: No season data found for 2020 in tourschedule API");
    }
}
