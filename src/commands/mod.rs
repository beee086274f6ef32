//! Command implementations for the golf stats CLI

pub mod common;
pub mod full_season;
pub mod schedule;
pub mod stat_details;
