//! Core utilities shared by both pipelines
//!
//! - `http`: reqwest client wrapper and per-API headers
//! - `table`: flat records and column-union tables

pub mod http;
pub mod table;

pub use http::{espn_headers, stats_headers, ApiClient};
pub use table::{Record, Table};
