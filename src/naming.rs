use convert_case::{Case, Casing};

use crate::models::FileKind;

/// Derive the base name of a file: directory components and the final
/// extension removed.
///
/// Splits on `\` and then on `/`, taking the last segment each time, so
/// Windows, Unix and mixed paths all work. Only the last dot-delimited
/// segment is dropped (`foo.bar.h` -> `foo.bar`); a name without a dot is
/// returned unchanged. Returns `None` when no usable name remains, e.g. for
/// a trailing separator or a bare extension like `.hpp`.
pub fn base_name(file_name: &str) -> Option<String> {
    let name = file_name.rsplit('\\').next().unwrap_or("");
    let name = name.rsplit('/').next().unwrap_or("");
    if name.is_empty() {
        return None;
    }

    let parts: Vec<&str> = name.split('.').collect();
    let base = if parts.len() > 1 {
        parts[..parts.len() - 1].join(".")
    } else {
        name.to_string()
    };

    if base.is_empty() {
        None
    } else {
        Some(base)
    }
}

/// Convert a base name to a lower-camel identifier: first word lowercased,
/// later word boundaries uppercased, separators and whitespace removed.
pub fn camelize(s: &str) -> String {
    s.to_case(Case::Camel)
}

/// Class name for a `.hpp` scaffold: camelized base name with the first
/// character uppercased. No validation of identifier legality - this is a
/// convenience heuristic for the stub, not a correctness-critical transform.
pub fn class_name(base_name: &str) -> String {
    capitalize_first(&camelize(base_name))
}

/// Guard macro for a recognized kind: uppercased base name, underscore,
/// kind suffix. `None` for `FileKind::Unknown`.
///
/// The base name is not sanitized; dots and digits pass through into the
/// macro unchanged.
pub fn guard_macro(kind: FileKind, base_name: &str) -> Option<String> {
    let suffix = kind.suffix()?;
    Some(format!("{}_{}", base_name.to_uppercase(), suffix))
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
