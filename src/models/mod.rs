pub mod activity;
pub mod rule;

pub use activity::{is_blank_or_placeholder, ActivityRecord};
pub use rule::{CategoryRule, RuleFile};
