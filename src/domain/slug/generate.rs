//! Canonical slug transform shared by every caller in the crate.
//!
//! Any maximal run of characters that are not ASCII letters or digits is a
//! single separator and becomes one hyphen. Separators at either end are
//! dropped. Non-ASCII characters are separators too.

/// Convert arbitrary text into a lowercase, hyphen-delimited path segment.
///
/// Examples:
/// - "Hello World" -> "hello-world"
/// - "O'Brien's Pub" -> "o-brien-s-pub"
/// - "---Already--Hyphenated---" -> "already-hyphenated"
/// - "!!!" -> ""
#[must_use]
pub fn generate_slug(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Return `true` when `value` is already in canonical slug form.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
