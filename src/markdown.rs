/// Swap pictographic status markers for their plain-text equivalents,
/// in table order.
pub fn replace_status_markers(md: &str, markers: &[(&str, &str)]) -> String {
    markers
        .iter()
        .fold(md.to_string(), |acc, (marker, text)| acc.replace(marker, text))
}

/// Collapse 3+ consecutive newlines to a single blank line.
pub fn collapse_blank_lines(md: &str) -> String {
    let mut result = md.to_string();
    while result.contains("\n\n\n") {
        result = result.replace("\n\n\n", "\n\n");
    }
    result
}
