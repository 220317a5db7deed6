use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::FileKind;

// Matches a trailing dot-extension made of ASCII letters only, so `foo.h5`
// or a name without any extension stays unrecognized.
static EXT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.([A-Za-z]+)$").unwrap());

/// Classify a file path or name into the guard flavor to apply.
///
/// Only the trailing extension is considered, so dotted directory components
/// (`release.v2/foo.h`) do not affect the result. Matching is
/// case-insensitive; anything other than `.h`/`.hpp` yields
/// `FileKind::Unknown`. Never fails.
pub fn classify(file_name: &str) -> FileKind {
    let ext = match EXT_RE.captures(file_name) {
        Some(caps) => caps[1].to_lowercase(),
        None => return FileKind::Unknown,
    };

    match ext.as_str() {
        "hpp" => FileKind::CppHeader,
        "h" => FileKind::CHeader,
        _ => FileKind::Unknown,
    }
}
