//! Small helpers shared across the bot.
//!
//! Mostly string truncation for the fixed-size identity fields taken from
//! the command line.

/// Maximum length, in characters, of the nickname and channel arguments.
pub const MAX_NAME_LEN: usize = 32;

/// Truncates a string to at most `max_chars` characters.
///
/// Counts Unicode codepoints rather than bytes, so a multi-byte character
/// is either kept whole or dropped.
///
/// # Examples
///
/// ```
/// use slirc_bot::util::truncate_chars;
///
/// assert_eq!(truncate_chars("hello", 3), "hel");
/// assert_eq!(truncate_chars("héllo", 3), "hél");
/// assert_eq!(truncate_chars("short", 100), "short");
/// ```
#[inline]
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
