//! Case name slugs.
//!
//! A slug is the stem of a case's fixture file and the name of its generated
//! test and benchmark functions, so it has to be safe in both places:
//!
//! | Case name | Slug |
//! |-----------|------|
//! | `i64 Variable declaration` | `i64_variable_declaration` |
//! | `Array<i64> Variable declaration empty` | `array_i64_variable_declaration_empty` |
//! | `Struct with impl` | `struct_with_impl` |
//! | `2D array` | `_2d_array` |
//!
//! Slugs are not injective (`A B` and `a-b` both become `a_b`).
//! [`CaseRegistry`](crate::CaseRegistry) rejects collisions at registration.

/// Separator placed between words.
pub const SEPARATOR: char = '_';

/// Turn a case name into its slug.
///
/// Quotes are dropped, ASCII letters are lowercased, and every run of other
/// characters (including any non-ASCII character) collapses to a single
/// [`SEPARATOR`]. Leading and trailing separators are trimmed. A slug that
/// would start with a digit gets a leading separator so it stays a valid
/// identifier.
///
/// Returns an empty string when the name has no ASCII letters or digits.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars() {
        if matches!(ch, '\'' | '"') {
            continue;
        }

        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    if slug.starts_with(|c: char| c.is_ascii_digit()) {
        slug.insert(0, SEPARATOR);
    }

    slug
}
