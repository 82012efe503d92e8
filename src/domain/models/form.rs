#[cfg(test)]
#[path = "form_test.rs"]
mod tests;

/// Splits a comma separated flag value into trimmed entries. Empty
/// segments are dropped, so a blank input yields an empty list.
pub fn split_csv(input: &str) -> Vec<String> {
    return input
        .split(',')
        .map(|entry| return entry.trim().to_string())
        .filter(|entry| return !entry.is_empty())
        .collect();
}
