/// Splits a comma-separated food list into trimmed, non-empty entries.
///
/// Both the ASCII comma and the full-width comma used by CJK keyboards are separators.
pub fn split_food_list(text: &str) -> Vec<String> {
    text.split([',', '，'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
