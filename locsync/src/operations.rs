//! High-level catalog operations (merge/apply) reusable by CLI and library
//! users.

use serde::{Deserialize, Serialize};

use crate::types::{Catalog, Entry};

/// Merge report with counters, one per processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MergeReport {
    /// Keys new to the existing table, appended at the end.
    pub inserted: usize,
    /// Existing keys where at least one empty field was filled in.
    pub updated: usize,
    /// Existing keys matched by the incoming table but left as-is.
    pub unchanged: usize,
    /// Keys present only in the existing table, retained untouched.
    pub retained: usize,
}

/// Merges a freshly exported source table into an existing platform table.
///
/// Rules:
/// - An incoming key already in `existing` fills `value` and `comment`
///   only where the existing field is empty. A non-empty existing value is
///   never overwritten, so translated or annotated entries survive
///   re-exports of the source text.
/// - An incoming key not in `existing` is appended in source order.
/// - Keys only in `existing` are retained, never deleted.
pub fn merge_into(existing: &mut Catalog, incoming: Catalog) -> MergeReport {
    let mut report = MergeReport::default();
    let initial_len = existing.len();
    let mut matched = 0usize;

    for entry in incoming {
        match existing.get_mut(&entry.key) {
            Some(current) => {
                matched += 1;
                let mut updated = false;
                if current.value.is_empty() && !entry.value.is_empty() {
                    current.value = entry.value;
                    updated = true;
                }
                if current.comment.is_empty() && !entry.comment.is_empty() {
                    current.comment = entry.comment;
                    updated = true;
                }
                if updated {
                    report.updated += 1;
                } else {
                    report.unchanged += 1;
                }
            }
            None => {
                existing.insert(entry);
                report.inserted += 1;
            }
        }
    }

    report.retained = initial_len - matched;
    report
}

/// Apply report with counters, one per processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplyReport {
    /// Rows processed.
    pub total: usize,
    /// Rows whose value was replaced by a translation.
    pub translated: usize,
    /// Rows left with their source value.
    pub unchanged: usize,
}

/// Replaces each row's value with the mapped translation when the key is in
/// `translations` and the mapped value is non-empty. Comments always stay
/// as authored; translation-map comments are ignored here.
pub fn apply_translations(entries: &mut [Entry], translations: &Catalog) -> ApplyReport {
    let mut report = ApplyReport {
        total: entries.len(),
        ..ApplyReport::default()
    };

    for entry in entries.iter_mut() {
        match translations.get(&entry.key) {
            Some(translated) if !translated.value.is_empty() => {
                entry.value = translated.value.clone();
                report.translated += 1;
            }
            _ => report.unchanged += 1,
        }
    }

    report
}
