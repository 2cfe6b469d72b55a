//! Reconciliation of a remote-suggested order with the caller's collection.

use std::collections::HashMap;

use crate::pdf::SourceFile;

/// Reorder `files` by the suggested identifier sequence.
///
/// Suggested ids that match a file pull it forward in suggestion order; ids
/// that match nothing are ignored; files the suggestion missed keep their
/// original relative order and go at the end. Every input file appears
/// exactly once, so the result is a total, deterministic ordering regardless
/// of map iteration order.
pub fn reconcile_order(files: Vec<SourceFile>, suggested_ids: &[String]) -> Vec<SourceFile> {
    let mut index: HashMap<String, usize> = HashMap::with_capacity(files.len());
    for (position, file) in files.iter().enumerate() {
        index.entry(file.id.clone()).or_insert(position);
    }

    let mut slots: Vec<Option<SourceFile>> = files.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(slots.len());

    for id in suggested_ids {
        if let Some(&position) = index.get(id)
            && let Some(file) = slots[position].take()
        {
            ordered.push(file);
        }
    }

    for slot in slots {
        if let Some(file) = slot {
            ordered.push(file);
        }
    }

    ordered
}
