use super::Entry;

pub fn matches(entry: &Entry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    entry
        .search_text()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Indices of the entries whose search text contains `query`.
pub fn filter(entries: &[Entry], query: &str) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| matches(entry, query))
        .map(|(index, _)| index)
        .collect()
}

/// Next selectable match at or after `from`, wrapping to the start of the list.
pub fn find_next(entries: &[Entry], query: &str, from: usize) -> Option<usize> {
    let len = entries.len();
    if len == 0 {
        return None;
    }
    let start = from % len;
    (0..len)
        .map(|offset| (start + offset) % len)
        .find(|&index| entries[index].is_enabled() && matches(&entries[index], query))
}
