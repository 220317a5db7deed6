use crate::models::{FileKind, GuardBlock};
use crate::naming;

/// Generate the include-guard header and footer for one document.
///
/// Pure: the guard macro is computed once here and embedded in both
/// sequences, so the `#ifndef`/`#define` pair and the footer's closing
/// comment always match. `document_text` is only consulted for the `.hpp`
/// class-scaffold check. Returns `None` for `FileKind::Unknown`.
pub fn generate(kind: FileKind, base_name: &str, document_text: &str) -> Option<GuardBlock> {
    let guard_macro = naming::guard_macro(kind, base_name)?;
    let header = header_fragments(kind, base_name, &guard_macro, document_text);
    let footer = footer_fragments(kind, &guard_macro);

    Some(GuardBlock {
        guard_macro,
        header,
        footer,
    })
}

fn header_fragments(
    kind: FileKind,
    base_name: &str,
    guard_macro: &str,
    document_text: &str,
) -> Vec<String> {
    let mut fragments = vec![
        format!("#ifndef {}\n", guard_macro),
        format!("#define {}\n", guard_macro),
    ];

    match kind {
        FileKind::CHeader => {
            fragments.push("#ifdef __cplusplus\n".to_string());
            fragments.push("\textern \"C\" {\n".to_string());
            fragments.push("#endif //__cplusplus\n".to_string());
            fragments.push("\n".to_string());
        }
        FileKind::CppHeader => {
            // Naive substring check: "class" inside a comment or string also
            // counts and suppresses the scaffold.
            if !document_text.contains("class") {
                let class_name = naming::class_name(base_name);
                fragments.push("\n".to_string());
                fragments.push(format!("class {}\n", class_name));
                fragments.push("{\n\n".to_string());
                fragments.push(format!("}} //{}\n", class_name));
            }
        }
        // Unreachable in practice: guard_macro above returns None first.
        FileKind::Unknown => {}
    }

    fragments
}

fn footer_fragments(kind: FileKind, guard_macro: &str) -> Vec<String> {
    let mut fragments = vec!["\n".to_string()];

    if kind == FileKind::CHeader {
        fragments.push("#ifdef __cplusplus\n".to_string());
        fragments.push("}\n".to_string());
        fragments.push("#endif //__cplusplus\n".to_string());
    }

    fragments.push(format!("#endif //{}\n", guard_macro));
    fragments
}
