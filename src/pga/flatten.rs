use crate::{
    core::{Record, Table},
    pga::types::{StatDetails, StatFilters, StatRecord, StatRow},
};

/// One record per `StatDetailsPlayer` row; every other row type is dropped.
pub fn flatten_rows(rows: &[StatRow]) -> Vec<StatRecord> {
    rows.iter()
        .filter_map(|row| match row {
            StatRow::StatDetailsPlayer(p) => Some(StatRecord {
                rank: p.rank,
                player_id: p.player_id.clone(),
                player_name: p.player_name.clone(),
                stats: p
                    .stats
                    .iter()
                    .map(|s| (s.stat_name.clone(), s.stat_value.clone()))
                    .collect(),
            }),
            StatRow::Other => None,
        })
        .collect()
}

impl StatRecord {
    /// `rank, playerId, playerName`, then one column per stat name.
    ///
    /// A stat named like a fixed column overwrites it, as a later key would
    /// in any flat mapping.
    pub fn to_record(&self) -> Record {
        let mut rec = Record::new();
        rec.insert("rank", self.rank);
        rec.insert("playerId", self.player_id.clone());
        rec.insert("playerName", self.player_name.clone());
        for (name, value) in &self.stats {
            rec.insert(name.clone(), value.clone());
        }
        rec
    }
}

impl StatDetails {
    pub fn player_records(&self) -> Vec<StatRecord> {
        flatten_rows(&self.rows)
    }

    pub fn filters(&self) -> StatFilters {
        StatFilters {
            tournaments: self.tournament_pills.clone(),
            years: self.year_pills.clone(),
        }
    }

    pub fn to_table(&self) -> Table {
        self.player_records().iter().map(StatRecord::to_record).collect()
    }
}
