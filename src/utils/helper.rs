/// Tool names are matched in lowercase.
pub fn normalize_tool_name(name: &str) -> String {
    name.to_lowercase()
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
