//! Mailbox path splitting and joining.
//!
//! The hierarchy delimiter is configuration-provided and may change between
//! operations, so these helpers take it as a parameter instead of caching it.

/// Split a full mailbox path on the hierarchy delimiter.
///
/// An empty input yields no segments. Empty segments produced by doubled or
/// trailing delimiters are preserved so creation paths can reject them.
pub fn split(full_path: &str, delimiter: &str) -> Vec<String> {
    if full_path.is_empty() {
        return Vec::new();
    }
    if delimiter.is_empty() {
        return vec![full_path.to_string()];
    }
    full_path.split(delimiter).map(str::to_string).collect()
}

/// Join path segments with the hierarchy delimiter.
pub fn join<S: AsRef<str>>(segments: &[S], delimiter: &str) -> String {
    segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(delimiter)
}
