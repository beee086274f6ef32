//! CSV persistence for flattened tables

use anyhow::{Context, Result};
use serde_json::Value;
use std::{fs, io, path::Path};

use crate::core::{Record, Table};

/// How a scalar appears in a CSV cell. Null and absent cells are empty.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Write `table` with a header row of its column union. A table without
/// columns writes nothing; a table with columns but no rows writes the header.
pub fn write_table_to<W: io::Write>(writer: W, table: &Table) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if table.columns().is_empty() {
        return Ok(());
    }
    wtr.write_record(table.columns())
        .context("writing CSV header")?;
    for row in table.rows() {
        wtr.write_record(table.columns().iter().map(|c| cell_text(row.get(c))))
            .context("writing CSV row")?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `table` to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_table_to(io::BufWriter::new(file), table)
        .with_context(|| format!("writing {}", path.display()))
}

/// Read a CSV written by [`write_table`]. Cells come back as strings; empty
/// cells come back as null.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut rdr =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let headers = rdr.headers()?.clone();
    let mut table = Table::with_columns(headers.iter());

    for result in rdr.records() {
        let row = result.with_context(|| format!("reading {}", path.display()))?;
        let mut rec = Record::new();
        for (column, cell) in headers.iter().zip(row.iter()) {
            let value = if cell.is_empty() {
                Value::Null
            } else {
                Value::String(cell.to_string())
            };
            rec.insert(column, value);
        }
        table.push(rec);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn leaderboard() -> Table {
        let mut first = Record::new();
        first.insert("playerName", "A Player");
        first.insert("R1", json!(70));
        first.insert("R2", Value::Null);

        let mut second = Record::new();
        second.insert("playerName", "B, Player");
        second.insert("R1", json!(68));
        second.insert("R2", json!(69));
        second.insert("R3", json!(71));

        vec![first, second].into_iter().collect()
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(None), "");
        assert_eq!(cell_text(Some(&Value::Null)), "");
        assert_eq!(cell_text(Some(&json!("-4"))), "-4");
        assert_eq!(cell_text(Some(&json!(70))), "70");
        assert_eq!(cell_text(Some(&json!(true))), "true");
    }

    #[test]
    fn test_write_table_to_buffer() {
        let mut buf = Vec::new();
        write_table_to(&mut buf, &leaderboard()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "playerName,R1,R2,R3\nA Player,70,,\n\"B, Player\",68,69,71\n"
        );
    }

    #[test]
    fn test_round_trip_keeps_rows_and_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        let table = leaderboard();

        write_table(&path, &table).unwrap();
        let back = read_table(&path).unwrap();

        assert_eq!(back.len(), table.len());
        assert_eq!(back.columns(), table.columns());
        assert_eq!(back.cell(0, "R3"), Some(&Value::Null));
        assert_eq!(back.cell(1, "playerName"), Some(&json!("B, Player")));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale,contents\n1,2\n3,4\n5,6\n").unwrap();

        write_table(&path, &leaderboard()).unwrap();

        let back = read_table(&path).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.columns()[0], "playerName");
    }

    #[test]
    fn test_read_missing_file_has_context() {
        let dir = TempDir::new().unwrap();
        let err = read_table(&dir.path().join("missing.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("missing.csv"));
    }

    #[test]
    fn test_header_only_table() {
        let mut buf = Vec::new();
        write_table_to(&mut buf, &Table::with_columns(["year", "tournamentName"])).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "year,tournamentName\n");
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let mut buf = Vec::new();
        write_table_to(&mut buf, &Table::new()).unwrap();
        assert!(buf.is_empty());
    }
}
