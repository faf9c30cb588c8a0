//! Small text helpers shared by the cell validators.

/// Maximum number of characters of a cell value quoted in a failure reason.
pub const PREVIEW_LIMIT: usize = 50;

/// Returns `value` truncated to [`PREVIEW_LIMIT`] characters, with `...`
/// appended when something was cut.
pub fn value_preview(value: &str) -> String {
    let mut chars = value.chars();
    let head: String = chars.by_ref().take(PREVIEW_LIMIT).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Returns the header name at `index`, or `Column N` (1-based) when the
/// header is blank or absent.
pub fn column_label(header_row: &[String], index: usize) -> String {
    match header_row.get(index) {
        Some(name) if !name.trim().is_empty() => name.clone(),
        _ => format!("Column {}", index + 1),
    }
}
