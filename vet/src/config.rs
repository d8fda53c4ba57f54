//! Engine defaults: the blank-value message and the default email pattern.

use regex::Regex;

/// Message used when a required value is blank.
pub const BLANK_MESSAGE: &str = "must be provided";

/// Default email pattern: non-empty local and domain parts separated by a
/// single `@`, with no `@` inside either part.
pub const EMAIL_PATTERN: &str = "^[^@]+@[^@]+$";

/// Compile the default email pattern.
pub fn email_pattern() -> Regex {
    Regex::new(EMAIL_PATTERN).expect("Invalid regex pattern")
}
