/// Integer primary keys (tags) are SQLite INTEGER / AUTOINCREMENT.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
