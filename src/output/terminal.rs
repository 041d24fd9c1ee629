//! Terminal output utilities.

/// Format a value as a quoted, left-aligned field padded to `width`.
///
/// Embedded double quotes are doubled so the line stays parseable as CSV.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string().replace('"', "\"\"");
    let quoted = format!("\"{value_str}\"");
    format!("{quoted:<width$}")
}
