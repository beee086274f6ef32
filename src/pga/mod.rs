//! PGA TOUR stats pipeline: GraphQL request, fetch, and flattening.

pub mod flatten;
pub mod http;
pub mod query;
pub mod types;

pub use http::{fetch_stat_details, fetch_stat_table};
pub use query::StatQuery;
pub use types::{StatDetails, StatFilters, StatRecord};
