mod defaults;

pub use defaults::{DEFAULT_RULES, DEFAULT_RULES_VERSION};

use crate::constants::UNCATEGORIZED;
use crate::db::{Field, ProcessRow, RecordStore};
use crate::error::AppResult;
use crate::models::{CategoryRule, RuleFile};
use std::path::Path;

/// Maps process names to categories with an ordered list of substring rules.
///
/// Rules are tried in order and the first pattern found anywhere in the lower-cased
/// process name wins, even when a longer pattern later in the list would also match.
#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
    version: u32,
}

/// A category write produced by [`Categorizer::plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryUpdate {
    pub id: i64,
    pub category: String,
}

/// Result of classifying a batch of rows, before anything is written.
#[derive(Debug, Default)]
pub struct CategorizePlan {
    pub updates: Vec<CategoryUpdate>,
    pub scanned: usize,
    pub uncategorized: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategorizeReport {
    pub scanned: usize,
    pub updated: usize,
    pub uncategorized: usize,
}

impl Categorizer {
    pub fn new(rules: Vec<CategoryRule>, version: u32) -> Self {
        Self { rules, version }
    }

    pub fn with_default_rules() -> Self {
        let rules = DEFAULT_RULES
            .iter()
            .map(|(pattern, category)| CategoryRule {
                pattern: pattern.to_lowercase(),
                category: (*category).to_string(),
            })
            .collect();
        Self::new(rules, DEFAULT_RULES_VERSION)
    }

    /// Build from a JSON rule file, or fall back to the built-in table when no path is given.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let Some(path) = path else {
            return Ok(Self::with_default_rules());
        };

        let file = RuleFile::load(path)?;
        log::info!(
            "Loaded {} category rules (version {}) from {}",
            file.rules.len(),
            file.version,
            path.display()
        );
        Ok(Self::new(file.rules, file.version))
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Category for a process name; blank, missing and unmatched names are "Uncategorized".
    pub fn categorize(&self, process_name: Option<&str>) -> &str {
        let Some(name) = process_name.filter(|n| !n.trim().is_empty()) else {
            return UNCATEGORIZED;
        };

        let name_lower = name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| name_lower.contains(rule.pattern.as_str()))
            .map_or(UNCATEGORIZED, |rule| rule.category.as_str())
    }

    /// Classify rows and collect the writes needed to bring them up to date.
    pub fn plan(&self, rows: &[ProcessRow]) -> CategorizePlan {
        let mut plan = CategorizePlan {
            scanned: rows.len(),
            ..CategorizePlan::default()
        };

        for row in rows {
            let category = self.categorize(row.application_process.as_deref());
            if category == UNCATEGORIZED {
                plan.uncategorized += 1;
            }
            if row.activity_category.as_deref() != Some(category) {
                plan.updates.push(CategoryUpdate {
                    id: row.id,
                    category: category.to_string(),
                });
            }
        }

        plan
    }
}

/// Assign a category to every row in the store.
///
/// Rows that already hold the right category are not rewritten.
pub fn categorize_store<S>(store: &S, categorizer: &Categorizer) -> AppResult<CategorizeReport>
where
    S: RecordStore + ?Sized,
{
    let rows = store.select_processes()?;
    let plan = categorizer.plan(&rows);

    for update in &plan.updates {
        store.update_fields(update.id, &[(Field::ActivityCategory, update.category.as_str())])?;
        log::debug!("Categorized activity {} as {}", update.id, update.category);
    }

    let report = CategorizeReport {
        scanned: plan.scanned,
        updated: plan.updates.len(),
        uncategorized: plan.uncategorized,
    };
    log::info!(
        "Categorized {} activities ({} updated, {} uncategorized)",
        report.scanned,
        report.updated,
        report.uncategorized
    );
    Ok(report)
}
