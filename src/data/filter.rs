use super::model::EvaluationRecord;

// ---------------------------------------------------------------------------
// Name search
// ---------------------------------------------------------------------------

/// Return indices of records whose student name contains `term`,
/// ignoring case, in load order.
///
/// An empty term matches nothing: the result list only appears once the
/// user has typed something.
pub fn matching_indices(records: &[EvaluationRecord], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.student_name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}
