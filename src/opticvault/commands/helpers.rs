use crate::model::Item;
use std::collections::HashSet;
use uuid::Uuid;

/// Generate an id that no item in `existing` already uses.
///
/// Random v4 ids do not depend on clock resolution; the check against the
/// snapshot also covers ids imported from older timestamp-based records.
pub fn new_id(existing: &[Item]) -> String {
    let taken: HashSet<&str> = existing.iter().map(|item| item.id.as_str()).collect();
    loop {
        let candidate = Uuid::new_v4().to_string();
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
    }
}

pub fn position_of(items: &[Item], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}
