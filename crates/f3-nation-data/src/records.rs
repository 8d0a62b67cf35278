use chrono::NaiveDate;

/// Row of the `beatdowns` table, limited to the fields sync consumers use.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BeatdownRow {
    /// Slack message timestamp, Unix seconds as a string.
    pub timestamp: Option<String>,
    /// Timestamp of the last edit, when the backblast was edited.
    pub ts_edited: Option<String>,
    pub ao_id: String,
    pub bd_date: NaiveDate,
    pub q_user_id: String,
    pub coq_user_id: Option<String>,
    pub pax_count: Option<i64>,
    pub backblast: Option<String>,
    pub fngs: Option<String>,
    pub fng_count: Option<i64>,
}

/// Row of the `aos` table (one AO per Slack channel).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AoRow {
    pub channel_id: String,
    pub ao: String,
    pub channel_created: i64,
    pub archived: bool,
    pub backblast: Option<bool>,
    pub site_q_user_id: Option<String>,
}

/// Row of the `users` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub user_id: String,
    pub user_name: String,
    pub real_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub app: bool,
}
