//! Fetch queries for the F3 Nation tables.
//!
//! Sequential, read-only queries over a caller-owned pool, with optional
//! incremental-sync and time-window filters on `beatdowns`.

use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use f3_modelgen_core::{Error, Result};

use crate::datetime::{to_unix_timestamp, week_bounds};
use crate::records::{AoRow, BeatdownRow, UserRow};

const BEATDOWN_COLUMNS: &str =
    "`timestamp`, ts_edited, ao_id, bd_date, q_user_id, coq_user_id, pax_count, backblast, fngs, fng_count";
const AO_COLUMNS: &str = "channel_id, ao, channel_created, archived, backblast, site_q_user_id";
const USER_COLUMNS: &str = "user_id, user_name, real_name, phone, email, start_date, app";

/// Fetch beatdowns, optionally only those created or edited after the cutoff.
///
/// The cutoff matches rows whose message timestamp is newer, or whose edit
/// timestamp exists and is newer, so re-edited backblasts are picked up by
/// incremental syncs.
pub async fn fetch_beatdowns(
    pool: &MySqlPool,
    after: Option<DateTime<Utc>>,
) -> Result<Vec<BeatdownRow>> {
    let Some(after) = after else {
        let sql = format!("select {BEATDOWN_COLUMNS} from beatdowns");
        return sqlx::query_as::<_, BeatdownRow>(&sql)
            .fetch_all(pool)
            .await
            .map_err(db_err);
    };

    let cutoff = to_unix_timestamp(after).to_string();
    let sql = format!(
        "select {BEATDOWN_COLUMNS} from beatdowns \
         where `timestamp` > ? or (ts_edited is not null and ts_edited > ?)"
    );
    sqlx::query_as::<_, BeatdownRow>(&sql)
        .bind(&cutoff)
        .bind(&cutoff)
        .fetch_all(pool)
        .await
        .map_err(db_err)
}

/// Fetch all beatdowns in the Monday-to-Sunday week containing the given
/// moment, whatever weekday it falls on.
pub async fn fetch_beatdowns_for_week(
    pool: &MySqlPool,
    date_in_week: DateTime<Utc>,
) -> Result<Vec<BeatdownRow>> {
    let (week_start, week_end) = week_bounds(date_in_week);
    fetch_beatdowns_for_date_range(pool, week_start, week_end).await
}

/// Fetch all beatdowns with a message timestamp in `[start, end)`.
pub async fn fetch_beatdowns_for_date_range(
    pool: &MySqlPool,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<BeatdownRow>> {
    let start_ts = to_unix_timestamp(start).to_string();
    let end_ts = to_unix_timestamp(end).to_string();

    let sql = format!(
        "select {BEATDOWN_COLUMNS} from beatdowns where `timestamp` >= ? and `timestamp` < ?"
    );
    sqlx::query_as::<_, BeatdownRow>(&sql)
        .bind(&start_ts)
        .bind(&end_ts)
        .fetch_all(pool)
        .await
        .map_err(db_err)
}

/// Fetch users, optionally restricted to the given IDs. An empty ID list
/// applies no filter.
pub async fn fetch_users(pool: &MySqlPool, user_ids: Option<&[String]>) -> Result<Vec<UserRow>> {
    match user_ids {
        Some(ids) if !ids.is_empty() => {
            let sql = format!(
                "select {USER_COLUMNS} from users where user_id in ({})",
                in_placeholders(ids.len())
            );
            let mut query = sqlx::query_as::<_, UserRow>(&sql);
            for id in ids {
                query = query.bind(id);
            }
            query.fetch_all(pool).await.map_err(db_err)
        }
        _ => {
            let sql = format!("select {USER_COLUMNS} from users");
            sqlx::query_as::<_, UserRow>(&sql)
                .fetch_all(pool)
                .await
                .map_err(db_err)
        }
    }
}

/// Fetch AOs, optionally restricted to the given channel IDs.
pub async fn fetch_aos(pool: &MySqlPool, channel_ids: Option<&[String]>) -> Result<Vec<AoRow>> {
    match channel_ids {
        Some(ids) if !ids.is_empty() => {
            let sql = format!(
                "select {AO_COLUMNS} from aos where channel_id in ({})",
                in_placeholders(ids.len())
            );
            let mut query = sqlx::query_as::<_, AoRow>(&sql);
            for id in ids {
                query = query.bind(id);
            }
            query.fetch_all(pool).await.map_err(db_err)
        }
        _ => {
            let sql = format!("select {AO_COLUMNS} from aos");
            sqlx::query_as::<_, AoRow>(&sql)
                .fetch_all(pool)
                .await
                .map_err(db_err)
        }
    }
}

fn db_err(err: sqlx::Error) -> Error {
    Error::Db(err.to_string())
}

/// `?, ?, ...` for an IN list of the given size.
fn in_placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_placeholder_per_value() {
        assert_eq!(in_placeholders(1), "?");
        assert_eq!(in_placeholders(3), "?, ?, ?");
    }

    #[test]
    fn incremental_cutoff_matches_stored_string_format() {
        use chrono::TimeZone;

        let after = Utc.with_ymd_and_hms(2022, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(to_unix_timestamp(after).to_string(), "1642204800");
    }
}
