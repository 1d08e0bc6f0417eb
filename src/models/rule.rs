use crate::error::{AppError, AppResult};
use crate::validation::{validate_category_name, validate_rule_pattern};
use serde::Deserialize;
use std::path::Path;

/// A keyword → category rule. Patterns are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRule {
    pub pattern: String,
    pub category: String,
}

impl CategoryRule {
    pub fn new(pattern: &str, category: &str) -> AppResult<Self> {
        let pattern = validate_rule_pattern(pattern)?;
        let category = validate_category_name(category)?;
        Ok(Self {
            pattern: pattern.to_lowercase(),
            category: category.to_string(),
        })
    }
}

/// On-disk rule table: `{"version": 1, "rules": [{"pattern": "...", "category": "..."}]}`.
///
/// Rules are a JSON array so that file order is evaluation order.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleFile {
    pub version: u32,
    pub rules: Vec<CategoryRule>,
}

impl RuleFile {
    pub fn load(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate a rule table, normalizing every pattern.
    pub fn parse(contents: &str) -> AppResult<Self> {
        let raw: RuleFile = serde_json::from_str(contents)?;
        if raw.rules.is_empty() {
            return Err(AppError::InvalidInput {
                field: "rules",
                reason: "rule table cannot be empty".into(),
            });
        }

        let rules = raw
            .rules
            .iter()
            .map(|rule| CategoryRule::new(&rule.pattern, &rule.category))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            version: raw.version,
            rules,
        })
    }
}
