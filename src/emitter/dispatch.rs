//! The key-to-string dispatch method.
//!
//! One `case` per default-locale key, calling that key's accessor. Placeholder
//! values are read from the argument map by name and passed in the accessor's
//! declared order. Unknown keys fall through to an empty string.

use indoc::indoc;

use crate::{
    emitter::EmitterOptions,
    escape::dart_string_literal,
    types::{AccessorShape, LocaleTable, StringResource},
};

/// Emits the dispatch method for `defaults`.
pub fn emit_dispatch(defaults: &LocaleTable, options: &EmitterOptions) -> String {
    let mut out = format!(
        indoc! {"
            /// Returns the translation for [key], or an empty string if [key] is unknown.
            ///
            /// Every placeholder of [key] must be present in [args].
            static String {}(String key, [Map<String, String> args = const {{}}]) {{
              switch (key) {{
        "},
        options.dispatch_method
    );

    for resource in &defaults.resources {
        out.push_str(&format!("    case {}:\n", dart_string_literal(&resource.key)));
        out.push_str(&format!("      return {};\n", dispatch_call(resource)));
    }

    out.push_str(indoc! {"
            default:
              return '';
          }
        }
    "});
    out
}

/// The accessor call a dispatch branch returns.
pub fn dispatch_call(resource: &StringResource) -> String {
    match resource.shape() {
        AccessorShape::Plain => resource.escaped_key.clone(),
        AccessorShape::Parameterized(params) => {
            let args = params
                .iter()
                .map(|p| format!("args[{}]!", dart_string_literal(p)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}({})", resource.escaped_key, args)
        }
    }
}
