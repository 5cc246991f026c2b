//! # Read-Only Guard
//!
//! A lexical check that stands between model output and the storage provider.
//! It does not parse SQL: a statement is read-only when it starts with one of
//! the allowed keywords.

const READ_ONLY_PREFIXES: [&str; 3] = ["select", "with", "explain"];

/// Returns `true` if the trimmed, lower-cased `sql` starts with `select`,
/// `with`, or `explain`.
pub fn is_read_only(sql: &str) -> bool {
    let normalized = sql.trim().to_lowercase();
    READ_ONLY_PREFIXES
        .iter()
        .any(|prefix| normalized.starts_with(prefix))
}
