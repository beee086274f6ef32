//! Storage layer: flat-file CSV output
//!
//! - `csv`: write a [`Table`](crate::core::Table) with a column-union header
//!   and read it back

pub mod csv;

pub use self::csv::{read_table, write_table, write_table_to};
