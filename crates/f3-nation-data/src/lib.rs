//! Data access for the F3 Nation tables the generator models.
//!
//! Row types and fetch queries for `beatdowns`, `aos`, and `users`, plus the
//! Unix-timestamp conversions the incremental-sync filters rely on.

pub mod datetime;
pub mod fetch;
pub mod records;

pub use datetime::{from_unix_timestamp, to_unix_timestamp, week_bounds};
pub use fetch::{
    fetch_aos, fetch_beatdowns, fetch_beatdowns_for_date_range, fetch_beatdowns_for_week,
    fetch_users,
};
pub use records::{AoRow, BeatdownRow, UserRow};
