//! Placeholder extraction for ARB-style message values.
//!
//! A placeholder is a top-level `{name}` argument. ICU arguments such as
//! `{count, plural, one {# item} other {# items}}` contribute their argument
//! name (`count`); anything nested inside them is ignored. Text between single
//! quotes is literal, so `'{'` does not open an argument.

/// Extracts placeholder names from a string in first-occurrence order, without duplicates.
pub fn extract_placeholders(input: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut depth = 0usize;
    let mut quoted = false;
    let mut current = String::new();
    // Only the part of a top-level argument before the first ',' is its name.
    let mut collecting = false;

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\'' {
            match chars.peek() {
                // '' is an escaped apostrophe, inside or outside a quoted run
                Some('\'') => {
                    chars.next();
                }
                _ if quoted => quoted = false,
                Some('{') | Some('}') => quoted = true,
                _ => {}
            }
            continue;
        }
        if quoted {
            continue;
        }
        match ch {
            '{' => {
                depth += 1;
                if depth == 1 {
                    current.clear();
                    collecting = true;
                }
            }
            '}' if depth > 0 => {
                if depth == 1 {
                    push_name(&mut out, &current);
                    collecting = false;
                }
                depth -= 1;
            }
            ',' if depth == 1 && collecting => {
                push_name(&mut out, &current);
                collecting = false;
            }
            c if depth == 1 && collecting => current.push(c),
            _ => {}
        }
    }

    out
}

fn push_name(out: &mut Vec<String>, raw: &str) {
    let name = raw.trim();
    if is_placeholder_name(name) && !out.iter().any(|existing| existing == name) {
        out.push(name.to_string());
    }
}

/// Returns true if `name` can name a placeholder: an ASCII letter or `_`, then
/// ASCII alphanumerics or `_`.
pub fn is_placeholder_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Replaces each top-level `{name}` argument with the value bound to `name`.
///
/// The input is scanned once, with the same quoting and nesting rules as
/// [`extract_placeholders`], so substituted values are never rescanned. Quoted
/// text is emitted without its quotes (`''` becomes `'`). Arguments without a
/// binding, including ICU arguments such as plurals, are kept verbatim.
pub fn substitute_placeholders(input: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(input.len());
    let mut argument = String::new();
    let mut depth = 0usize;
    let mut quoted = false;

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\'' {
            match chars.peek() {
                Some('\'') => {
                    chars.next();
                    if depth == 0 {
                        out.push('\'');
                    } else {
                        argument.push_str("''");
                    }
                }
                _ if quoted => {
                    quoted = false;
                    if depth > 0 {
                        argument.push('\'');
                    }
                }
                Some('{') | Some('}') => {
                    quoted = true;
                    if depth > 0 {
                        argument.push('\'');
                    }
                }
                _ => target(depth, &mut out, &mut argument).push(ch),
            }
            continue;
        }
        if quoted {
            target(depth, &mut out, &mut argument).push(ch);
            continue;
        }
        match ch {
            '{' => {
                if depth == 0 {
                    argument.clear();
                } else {
                    argument.push(ch);
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    render_argument(&mut out, &argument, values);
                } else {
                    argument.push(ch);
                }
            }
            c => target(depth, &mut out, &mut argument).push(c),
        }
    }

    // unterminated argument
    if depth > 0 {
        out.push('{');
        out.push_str(&argument);
    }
    out
}

fn target<'a>(depth: usize, out: &'a mut String, argument: &'a mut String) -> &'a mut String {
    if depth == 0 { out } else { argument }
}

fn render_argument(out: &mut String, argument: &str, values: &[(&str, &str)]) {
    let name = argument.trim();
    match values.iter().find(|(bound, _)| *bound == name) {
        Some((_, value)) => out.push_str(value),
        None => {
            out.push('{');
            out.push_str(argument);
            out.push('}');
        }
    }
}
