//! Tests for property-name humanization.

use vet::text::humanize;

#[test]
fn test_humanize_camel_case() {
    assert_eq!(humanize("firstName"), "First name");
}

#[test]
fn test_humanize_snake_case() {
    assert_eq!(humanize("first_name"), "First name");
}

#[test]
fn test_humanize_single_word() {
    assert_eq!(humanize("email"), "Email");
}

#[test]
fn test_humanize_multiple_boundaries() {
    assert_eq!(humanize("homePhoneNumber"), "Home phone number");
}

#[test]
fn test_humanize_digits_split_before_uppercase() {
    assert_eq!(humanize("line2Address"), "Line2 address");
}

#[test]
fn test_humanize_empty() {
    assert_eq!(humanize(""), "");
}
