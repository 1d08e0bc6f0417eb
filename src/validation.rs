use crate::constants::{
    DATE_FORMAT, DEFAULT_QUERY_LIMIT, MAX_CATEGORY_NAME_LEN, MAX_RULE_PATTERN_LEN,
};
use crate::error::AppError;
use chrono::NaiveDate;

/// Validate the summary query date (YYYY-MM-DD). The date is mandatory.
pub fn validate_query_date(date: Option<&str>) -> Result<NaiveDate, AppError> {
    let err = |reason: &str| AppError::InvalidInput {
        field: "date",
        reason: reason.into(),
    };

    let date = date.map(str::trim).filter(|d| !d.is_empty());
    let Some(date) = date else {
        return Err(err("parameter is required"));
    };

    // chrono accepts unpadded fields; stored timestamps compare lexically so insist on padding
    if date.len() != 10 {
        return Err(err("must be in YYYY-MM-DD format"));
    }

    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| err("must be in YYYY-MM-DD format"))
}

/// Validate the summary result limit, defaulting when absent.
pub fn validate_query_limit(limit: Option<u32>) -> Result<u32, AppError> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT);
    if limit == 0 {
        return Err(AppError::InvalidInput {
            field: "limit",
            reason: "must be positive".into(),
        });
    }
    Ok(limit)
}

/// Validate rule pattern.
pub fn validate_rule_pattern(pattern: &str) -> Result<&str, AppError> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Err(AppError::InvalidInput {
            field: "pattern",
            reason: "cannot be empty".into(),
        });
    }
    if pattern.len() > MAX_RULE_PATTERN_LEN {
        return Err(AppError::InvalidInput {
            field: "pattern",
            reason: format!("cannot exceed {MAX_RULE_PATTERN_LEN} characters"),
        });
    }
    Ok(pattern)
}

/// Validate category name.
pub fn validate_category_name(name: &str) -> Result<&str, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput {
            field: "category",
            reason: "cannot be empty".into(),
        });
    }
    if name.len() > MAX_CATEGORY_NAME_LEN {
        return Err(AppError::InvalidInput {
            field: "category",
            reason: format!("cannot exceed {MAX_CATEGORY_NAME_LEN} characters"),
        });
    }
    Ok(name)
}
