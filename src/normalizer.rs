//! Repairs blank or placeholder window titles and process names.
//!
//! Each row is repaired from its own two fields only, so the pass can run in any order and
//! re-running it on repaired data changes nothing.

use crate::constants::PLACEHOLDER;
use crate::db::{BlankCandidate, Field, RecordStore};
use crate::error::AppResult;
use crate::models::is_blank_or_placeholder;

/// New values for a row's title and process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRepair {
    pub window_title: String,
    pub application_process: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeReport {
    pub scanned: usize,
    pub updated: usize,
}

/// Decide the repaired (title, process) pair, or `None` when nothing would change.
///
/// Both blank → both "Unknown"; one blank → it copies the other; neither blank → untouched.
pub fn normalize_pair(
    window_title: Option<&str>,
    application_process: Option<&str>,
) -> Option<FieldRepair> {
    let title_blank = is_blank_or_placeholder(window_title);
    let process_blank = is_blank_or_placeholder(application_process);

    let (new_title, new_process) = match (window_title, application_process) {
        _ if title_blank && process_blank => (PLACEHOLDER, PLACEHOLDER),
        (_, Some(process)) if title_blank => (process, process),
        (Some(title), _) if process_blank => (title, title),
        (Some(title), Some(process)) => (title, process),
        // a missing value is always blank, so the guards above cover these
        (None, _) | (_, None) => return None,
    };

    if window_title == Some(new_title) && application_process == Some(new_process) {
        return None;
    }

    Some(FieldRepair {
        window_title: new_title.to_string(),
        application_process: new_process.to_string(),
    })
}

/// Repairs for a batch of candidates, keyed by row id.
pub fn plan_repairs(candidates: &[BlankCandidate]) -> Vec<(i64, FieldRepair)> {
    candidates
        .iter()
        .filter_map(|row| {
            normalize_pair(row.window_title.as_deref(), row.application_process.as_deref())
                .map(|repair| (row.id, repair))
        })
        .collect()
}

/// Repair every blank or placeholder title/process pair in the store.
pub fn normalize_store<S>(store: &S) -> AppResult<NormalizeReport>
where
    S: RecordStore + ?Sized,
{
    let candidates = store.select_blank_or_placeholder()?;
    let repairs = plan_repairs(&candidates);

    for (id, repair) in &repairs {
        store.update_fields(
            *id,
            &[
                (Field::WindowTitle, repair.window_title.as_str()),
                (Field::ApplicationProcess, repair.application_process.as_str()),
            ],
        )?;
        log::debug!(
            "Repaired activity {id}: WindowTitle='{}', ApplicationProcess='{}'",
            repair.window_title,
            repair.application_process
        );
    }

    let report = NormalizeReport {
        scanned: candidates.len(),
        updated: repairs.len(),
    };
    log::info!(
        "Normalized {} candidate activities ({} updated)",
        report.scanned,
        report.updated
    );
    Ok(report)
}
