/// Splits a comma-separated form input into trimmed items, dropping blanks.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins stored list items back into the comma-separated editing format.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}
