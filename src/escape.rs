//! Escaping helpers for Dart source text.
//!
//! Three concerns live here: string literals placed in code, quoted values
//! placed in documentation table cells, and identifiers derived from raw
//! translation keys.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref KEY_SEPARATOR_REGEX: Regex = Regex::new(r"[^A-Za-z0-9]+").unwrap();
}

/// Words that cannot be used as Dart identifiers.
const DART_RESERVED_WORDS: &[&str] = &[
    "assert", "break", "case", "catch", "class", "const", "continue", "default", "do", "else",
    "enum", "extends", "false", "final", "finally", "for", "if", "in", "is", "new", "null",
    "rethrow", "return", "super", "switch", "this", "throw", "true", "try", "var", "void",
    "while", "with",
];

/// Names an accessor body refers to, which a parameter must not shadow.
const ACCESSOR_BODY_NAMES: &[&str] = &["String", "customLookup", "defaultLookup", "_nonEmpty"];

/// Renders `value` as a single-quoted Dart string literal.
pub fn dart_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str(r"\\"),
            '\'' => out.push_str(r"\'"),
            '$' => out.push_str(r"\$"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Renders `value` as a double-quoted, single-line string for a documentation table cell.
pub fn doc_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str(r"\\"),
            '"' => out.push_str("\\\""),
            '|' => out.push_str(r"\|"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Derives a lowerCamelCase Dart identifier from a raw translation key.
///
/// `hello_world`, `hello-world` and `hello.world` all become `helloWorld`;
/// keys are not checked for collisions here.
pub fn escape_key(raw: &str) -> String {
    let mut ident = String::with_capacity(raw.len());

    for (i, segment) in KEY_SEPARATOR_REGEX
        .split(raw)
        .filter(|s| !s.is_empty())
        .enumerate()
    {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                ident.push(first.to_ascii_lowercase());
            } else {
                ident.push(first.to_ascii_uppercase());
            }
            ident.push_str(chars.as_str());
        }
    }

    if ident.is_empty() {
        return "key".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, 'k');
    }
    if is_reserved_word(&ident) {
        ident.push('_');
    }
    ident
}

/// Derives the accessor parameter name for a placeholder.
///
/// Reserved words and names used in the accessor body get a `_` suffix. The
/// dispatch method still reads the argument map by the placeholder's own name.
pub fn escape_parameter(name: &str) -> String {
    if is_reserved_word(name) || ACCESSOR_BODY_NAMES.contains(&name) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}

/// Returns true if `ident` is a Dart reserved word.
pub fn is_reserved_word(ident: &str) -> bool {
    DART_RESERVED_WORDS.contains(&ident)
}
