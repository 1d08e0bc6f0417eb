// src/constants.rs

/// Name of the activity table
pub const ACTIVITY_TABLE: &str = "user_activity";

/// Marker for deliberately-missing window titles and process names
pub const PLACEHOLDER: &str = "Unknown";

/// Category assigned when no rule matches
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Reported by hour summaries when the window has no rows
pub const NO_DATA: &str = "No Data";

/// Activities whose total time in a window exceeds this are long sessions (1 hour)
pub const LONG_SESSION_SECS: f64 = 3600.0;

/// Default number of top activities returned by a summary query
pub const DEFAULT_QUERY_LIMIT: u32 = 10;

/// Date layout accepted by summary queries
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default HTTP port for `serve`
pub const DEFAULT_PORT: u16 = 8000;

/// Default HTTP bind address for `serve`
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Maximum rule pattern length
pub const MAX_RULE_PATTERN_LEN: usize = 500;

/// Maximum category name length
pub const MAX_CATEGORY_NAME_LEN: usize = 100;
