/// Project identifiers are sequential integers assigned by the store,
/// never reused after deletion.
pub type ProjectId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
