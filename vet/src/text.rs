//! Text helpers for deriving display names from property names.

/// Turn a property name into a human-readable display name.
///
/// Camel-case boundaries and underscores become spaces, and the first
/// letter is capitalized: `"firstName"` and `"first_name"` both become
/// `"First name"`.
pub fn humanize(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut prev_splittable = false;

    for c in property.chars() {
        if c == '_' {
            out.push(' ');
            prev_splittable = false;
            continue;
        }
        if c.is_ascii_uppercase() && prev_splittable {
            out.push(' ');
        }
        out.extend(c.to_lowercase());
        prev_splittable = c.is_ascii_lowercase() || c.is_ascii_digit();
    }

    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => out,
    }
}
