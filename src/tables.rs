pub mod ll;
pub mod lr;

/// Cleans raw delimited file text: one entry per line, spaces removed,
/// control characters stripped
pub(crate) fn clean_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            line.chars()
                .filter(|c| *c != ' ' && !c.is_control())
                .collect()
        })
        .collect()
}
