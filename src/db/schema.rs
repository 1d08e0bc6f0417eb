pub const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS user_activity (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    WindowTitle TEXT,
    ApplicationProcess TEXT,
    ActivityCategory TEXT,
    StartTime TEXT,
    EndTime TEXT,
    DurationSec REAL
);

CREATE INDEX IF NOT EXISTS idx_user_activity_start_time ON user_activity(StartTime);
";

/// Columns of `user_activity` in declaration order
pub const ACTIVITY_COLUMNS: &[&str] = &[
    "id",
    "WindowTitle",
    "ApplicationProcess",
    "ActivityCategory",
    "StartTime",
    "EndTime",
    "DurationSec",
];
