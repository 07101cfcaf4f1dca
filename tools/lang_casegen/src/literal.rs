//! Rendering case data as Rust source tokens.

/// Keywords a slug cannot be used as verbatim.
///
/// Strict and reserved keywords of the 2021 edition plus `gen`, reserved in
/// 2024. Slugs are lowercase, so `Self` never occurs.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "super"];

/// Escaped Rust string literal for `text`, quotes included.
pub fn string_literal(text: &str) -> String {
    format!("{text:?}")
}

/// Function identifier for a slug.
///
/// Keywords become raw identifiers (`r#struct`). `crate`, `self` and `super`
/// get a trailing `_`, which no slug ends with, so the mapping stays
/// injective. Names in `reserved` are already defined by the surrounding
/// module and get the same trailing `_`.
pub fn ident(slug: &str, reserved: &[&str]) -> String {
    if NON_RAW_KEYWORDS.contains(&slug) || reserved.contains(&slug) {
        format!("{slug}_")
    } else if KEYWORDS.contains(&slug) {
        format!("r#{slug}")
    } else {
        slug.to_string()
    }
}
