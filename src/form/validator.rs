use std::sync::LazyLock;

use regex::Regex;

// `local@domain.tld` with no whitespace or second `@` in any part. U+FEFF is
// excluded explicitly: the regex crate's `\s` does not cover it.
#[allow(clippy::expect_used)]
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").expect("compile email regex")
});

pub const MIN_PASSWORD_LEN: usize = 8;

/// Loose email shape check. Callers pass already-trimmed input.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

/// Passwords only have a length floor. No character-class rules.
pub fn is_valid_password(s: &str) -> bool {
    s.chars().count() >= MIN_PASSWORD_LEN
}
