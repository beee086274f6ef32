//! Output helpers shared across commands.

use std::io::{self, Write};
use std::path::Path;

use crate::{core::Table, storage, Result};

/// Where a command sends its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Csv
        }
    }
}

/// Render `table` to `out` as CSV or pretty JSON.
pub fn render_table<W: Write>(out: W, table: &Table, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => storage::write_table_to(out, table)?,
        OutputFormat::Json => {
            let mut out = out;
            serde_json::to_writer_pretty(&mut out, table)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write to `path` as CSV when given, otherwise to stdout in `format`.
pub fn emit_table(table: &Table, output: Option<&Path>, format: OutputFormat) -> Result<()> {
    match output {
        Some(path) => {
            storage::write_table(path, table)?;
            println!("Wrote {} rows to {}", table.len(), path.display()); // tarpaulin::skip
        }
        None => {
            let stdout = io::stdout();
            render_table(stdout.lock(), table, format)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;
    use serde_json::json;

    fn one_row() -> Table {
        let mut rec = Record::new();
        rec.insert("playerName", "A Player");
        rec.insert("R1", json!(70));
        std::iter::once(rec).collect()
    }

    #[test]
    fn test_output_format_from_flag() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Csv);
    }

    #[test]
    fn test_render_csv() {
        let mut buf = Vec::new();
        render_table(&mut buf, &one_row(), OutputFormat::Csv).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "playerName,R1\nA Player,70\n");
    }

    #[test]
    fn test_render_json() {
        let mut buf = Vec::new();
        render_table(&mut buf, &one_row(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, json!([{ "playerName": "A Player", "R1": 70 }]));
    }
}
