//! UTF-8 safe string helpers for diagnostics
//!
//! Snapshots are sliced by byte offsets coming from the parser, so any
//! shortening done for log lines or error messages must respect char
//! boundaries.

/// Safely truncate a string at a UTF-8 char boundary.
///
/// Returns a slice at most `max_bytes` long, cut at the last char boundary
/// at or before `max_bytes`.
///
/// ```
/// use jsx_distill::utils::truncate_to_char_boundary;
///
/// assert_eq!(truncate_to_char_boundary("<div>", 3), "<di");
/// assert_eq!(truncate_to_char_boundary("é<p>", 1), "");
/// ```
pub fn truncate_to_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// One-line preview of a source fragment: newlines escaped, shortened with
/// an ellipsis past `max_bytes`.
pub fn preview(s: &str, max_bytes: usize) -> String {
    let head = truncate_to_char_boundary(s, max_bytes).replace('\n', "\\n");
    if s.len() > max_bytes {
        format!("{}...", head)
    } else {
        head
    }
}
