use crate::types::entry::LogEntry;

/// Returns the subsequence of `entries` involving any of `selected`.
///
/// An entry matches when its sender is in `selected`, or when it carries a
/// recipient that is. Original relative order is preserved and no entry is
/// ever mutated.
///
/// # Behavior
/// - Empty `selected` is the identity: every entry is returned.
/// - Matching is exact (case-sensitive), against names as they appear in the
///   entries.
pub fn by_players(entries: &[LogEntry], selected: &[String]) -> Vec<LogEntry> {
    if selected.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|entry| {
            selected.iter().any(|name| {
                entry.sender == *name || entry.recipient.as_deref() == Some(name.as_str())
            })
        })
        .cloned()
        .collect()
}
