use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::{ScoreboardDate, Season},
    core::{Record, Table},
    error::GolfError,
    espn::types::{
        Competitor, ScheduleEntry, ScheduleEvent, ScheduleResponse, ScoreboardRecord,
        ScoreboardResponse,
    },
    Result,
};

/// Rounds beyond this (playoff holes) are not reported.
pub const MAX_ROUNDS: usize = 4;

/// First non-empty of `name`, `label`, `displayName`.
pub fn event_name(ev: &ScheduleEvent) -> Option<String> {
    [&ev.name, &ev.label, &ev.display_name]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .cloned()
}

/// Start day from `start`, falling back to `startDate`.
pub fn event_start(ev: &ScheduleEvent) -> Result<ScoreboardDate> {
    let raw = [&ev.start, &ev.start_date]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .ok_or_else(|| GolfError::MissingStartDate {
            event_id: ev.id.to_string(),
        })?;
    ScoreboardDate::from_iso(raw)
}

/// Entries for `season`, or `SeasonNotFound` when the response has no block
/// for that year.
pub fn schedule_entries(resp: &ScheduleResponse, season: Season) -> Result<Vec<ScheduleEntry>> {
    let block = resp
        .seasons
        .iter()
        .find(|s| s.year == Some(season.as_u16()))
        .ok_or(GolfError::SeasonNotFound {
            year: season.as_u16(),
        })?;

    block
        .events
        .iter()
        .map(|ev| {
            Ok(ScheduleEntry {
                espn_id: ev.id.clone(),
                tournament_name: event_name(ev),
                start_date: event_start(ev)?,
                year: season,
            })
        })
        .collect()
}

/// Integer round score, or `None` for anything that is not one ("-", "E",
/// missing). Numeric JSON values are truncated toward zero.
pub fn parse_round(display_value: &Value) -> Option<i64> {
    match display_value {
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        _ => None,
    }
}

fn competitor_record(tournament: &str, comp: &Competitor) -> ScoreboardRecord {
    let person = comp.competitor.as_ref().or(comp.athlete.as_ref());
    let player_id = person
        .and_then(|p| p.id.as_ref())
        .or(comp.id.as_ref())
        .map(|id| id.to_string());
    let player_name = person.and_then(|p| p.display_name.clone());

    let rounds = comp
        .linescores
        .iter()
        .take(MAX_ROUNDS)
        .map(|line| parse_round(&line.display_value))
        .collect();

    let (total, to_par) = match &comp.summary {
        Some(summary) => {
            let total = if summary.score.is_null() {
                comp.score.clone()
            } else {
                summary.score.clone()
            };
            (total, summary.to_par.clone())
        }
        None => (comp.score.clone(), Value::Null),
    };

    ScoreboardRecord {
        tournament: tournament.to_string(),
        player_id,
        player_name,
        position: comp.order.clone(),
        rounds,
        total,
        to_par,
        year: None,
        tournament_name: None,
    }
}

/// One record per competitor of the first competition of every event.
pub fn scoreboard_records(resp: &ScoreboardResponse) -> Vec<ScoreboardRecord> {
    let mut recs = Vec::new();
    for evt in &resp.events {
        let tournament = evt.name.as_deref().unwrap_or("");
        let Some(comp) = evt.competitions.first() else {
            debug!(tournament, "event has no competitions");
            continue;
        };
        recs.extend(
            comp.competitors
                .iter()
                .map(|c| competitor_record(tournament, c)),
        );
    }
    recs
}

impl ScheduleEntry {
    pub fn to_record(&self) -> Record {
        let mut rec = Record::new();
        rec.insert("espnId", self.espn_id.to_string());
        rec.insert("tournamentName", self.tournament_name.clone());
        rec.insert("startDate", self.start_date.to_string());
        rec.insert("year", self.year.as_u16());
        rec
    }
}

impl ScoreboardRecord {
    /// Attach the season and scheduled tournament this row was fetched for.
    pub fn tag(&mut self, year: Season, tournament_name: Option<String>) {
        self.year = Some(year);
        self.tournament_name = tournament_name;
    }

    /// `tournament, playerId, playerName, position, R1.., total, toPar`, plus
    /// `year, tournamentName` once tagged.
    pub fn to_record(&self) -> Record {
        let mut rec = Record::new();
        rec.insert("tournament", self.tournament.clone());
        rec.insert("playerId", self.player_id.clone());
        rec.insert("playerName", self.player_name.clone());
        rec.insert("position", self.position.clone());
        for (i, round) in self.rounds.iter().enumerate() {
            rec.insert(format!("R{}", i + 1), *round);
        }
        rec.insert("total", self.total.clone());
        rec.insert("toPar", self.to_par.clone());
        if let Some(year) = self.year {
            rec.insert("year", year.as_u16());
            rec.insert("tournamentName", self.tournament_name.clone());
        }
        rec
    }
}

pub fn schedule_table(entries: &[ScheduleEntry]) -> Table {
    entries.iter().map(ScheduleEntry::to_record).collect()
}

pub fn scoreboard_table(records: &[ScoreboardRecord]) -> Table {
    records.iter().map(ScoreboardRecord::to_record).collect()
}
