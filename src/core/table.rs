//! Flat records and the tables built from them.
//!
//! A [`Record`] is one flattened row: an ordered list of column names mapped to
//! JSON scalars. A [`Table`] collects records and tracks the union of their
//! columns in first-seen order, so rows with different shapes (e.g. a player
//! with three rounds next to one with four) can share a single CSV header.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::collections::HashSet;

/// One flattened row. Column order is insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `column` to `value`, replacing an existing value in place.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(c, _)| *c == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(c, _)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Rows plus the union of their columns.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    seen: HashSet<String>,
    rows: Vec<Record>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table with a fixed leading header, e.g. when reading a CSV back.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for column in columns {
            table.add_column(column.into());
        }
        table
    }

    fn add_column(&mut self, column: String) {
        if self.seen.insert(column.clone()) {
            self.columns.push(column);
        }
    }

    pub fn push(&mut self, record: Record) {
        for column in record.columns() {
            if !self.seen.contains(column) {
                self.add_column(column.to_string());
            }
        }
        self.rows.push(record);
    }

    /// Append every row of `other`, widening the column set as needed.
    pub fn append(&mut self, other: Table) {
        for column in other.columns {
            self.add_column(column);
        }
        self.rows.extend(other.rows);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Value of `column` in row `row`; `None` when the row lacks that column.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row)?.get(column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut table = Table::new();
        for record in iter {
            table.push(record);
        }
        table
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> Record {
        let mut r = Record::new();
        for (k, v) in pairs {
            r.insert(*k, v.clone());
        }
        r
    }

    #[test]
    fn test_record_insert_replaces_in_place() {
        let mut r = record(&[("a", json!(1)), ("b", json!(2))]);
        r.insert("a", json!(3));
        assert_eq!(r.columns().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(r.get("a"), Some(&json!(3)));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_table_columns_are_first_seen_union() {
        let table: Table = vec![
            record(&[("player", json!("A")), ("R1", json!(70))]),
            record(&[("player", json!("B")), ("R1", json!(71)), ("R2", json!(69))]),
            record(&[("player", json!("C")), ("year", json!(2020))]),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.columns(), &["player", "R1", "R2", "year"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.cell(0, "R2"), None);
        assert_eq!(table.cell(1, "R2"), Some(&json!(69)));
    }

    #[test]
    fn test_table_append_concatenates() {
        let mut first: Table = vec![record(&[("a", json!(1))])].into_iter().collect();
        let second: Table = vec![record(&[("b", json!(2))]), record(&[("a", json!(3))])]
            .into_iter()
            .collect();

        first.append(second);

        assert_eq!(first.len(), 3);
        assert_eq!(first.columns(), &["a", "b"]);
        assert_eq!(first.cell(2, "a"), Some(&json!(3)));
    }

    #[test]
    fn test_record_serializes_in_column_order() {
        let r = record(&[("z", json!(1)), ("a", Value::Null)]);
        let text = serde_json::to_string(&r).unwrap();
        assert_eq!(text, r#"{"z":1,"a":null}"#);
    }

    #[test]
    fn test_with_columns_deduplicates() {
        let table = Table::with_columns(["a", "b", "a"]);
        assert_eq!(table.columns(), &["a", "b"]);
        assert!(table.is_empty());
    }
}
