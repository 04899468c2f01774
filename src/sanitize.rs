//! Lenient handling of user supplied text and numbers.
//!
//! Invalid input is never fatal: numbers that do not parse are treated as
//! unset and over-long strings are shortened. Every adjustment is logged.

use tracing::warn;

/// Longest fill or border glyph, in bytes.
pub const MAX_GLYPH_LEN: usize = 7;
/// Longest color escape sequence, in bytes.
pub const MAX_COLOR_LEN: usize = 63;
/// Longest message, in bytes.
pub const MAX_MESSAGE_LEN: usize = 255;
/// Longest date format string, in bytes.
pub const MAX_FORMAT_LEN: usize = 127;
/// Largest accepted width or height.
pub const MAX_DIMENSION: usize = 1024;

/// Returns the longest prefix of `value` that fits in `max_bytes` without
/// splitting a character.
pub fn cap_length(value: &str, max_bytes: usize) -> &str {
    if value.len() <= max_bytes {
        return value;
    }
    let mut end = max_bytes;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// Like [`cap_length`], but logs a warning naming `what` when the value is shortened.
pub fn capped(value: &str, max_bytes: usize, what: &str) -> String {
    let kept = cap_length(value, max_bytes);
    if kept.len() < value.len() {
        warn!(
            "{} is longer than {} bytes and was truncated to {:?}",
            what, max_bytes, kept
        );
    }
    kept.to_string()
}

/// Parses a width or height the way C's `atoi` does.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit. Zero, negative and unparsable values yield `None`, meaning
/// "use the preset". Values above [`MAX_DIMENSION`] are clamped.
pub fn parse_dimension(value: &str, what: &str) -> Option<usize> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);

    if digits.len() != rest.len() || digits.is_empty() {
        warn!("{} {:?} is not a whole number", what, value);
    }

    if negative || digits.is_empty() {
        return None;
    }

    // Anything too long for u64 is far above the cap anyway.
    let parsed = digits.parse::<u64>().unwrap_or(u64::MAX);
    if parsed == 0 {
        return None;
    }
    if parsed > MAX_DIMENSION as u64 {
        warn!("{} {} exceeds {} and was clamped", what, parsed, MAX_DIMENSION);
        return Some(MAX_DIMENSION);
    }
    Some(parsed as usize)
}
