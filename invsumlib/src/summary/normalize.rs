//! Value normalization and null-like detection.

/// Tokens that mean "missing" once a value is trimmed. Matching is
/// case-sensitive: `"Null"` is a real label.
pub const NULL_TOKENS: [&str; 5] = ["", "nan", "NaN", "null", "NULL"];

/// Sentinel label for null-like operating system values.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Trim leading and trailing whitespace.
pub fn normalize(raw: &str) -> &str {
    raw.trim()
}

/// Whether a value (raw or normalized) represents a missing cell.
///
/// Whitespace-only values trim to `""` and are therefore null-like.
pub fn is_null_like(value: &str) -> bool {
    NULL_TOKENS.contains(&normalize(value))
}
