//! The host-invocable commands

use crate::classifier;
use crate::document::Position;
use crate::editor::EditorHost;
use crate::generator;
use crate::naming;

/// Error shown when no guard can be generated for the active document
pub const INVALID_FILE_TYPE_MESSAGE: &str = "Invalid file type, cannot insert header";

/// Fixed text shown by the hello command
pub const HELLO_MESSAGE: &str = "Hello World from auto-header!";

/// Result of the insert-header command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Guard inserted; carries the macro that was written
    Inserted { guard_macro: String },
    /// Nothing inserted; the host was shown an error
    Rejected,
}

/// Insert an include-guard header and footer into the host's document.
///
/// Classifies the document by file name, derives the base name, generates
/// the guard text and applies it in a single edit transaction: an extra
/// newline at the end when the last line is non-empty, then every header
/// fragment at the top and every footer fragment at the end. Unrecognized
/// extensions and underivable base names both surface
/// [`INVALID_FILE_TYPE_MESSAGE`] and leave the document untouched.
pub fn insert_header(host: &mut impl EditorHost) -> InsertOutcome {
    let kind = classifier::classify(host.file_name());
    let block = naming::base_name(host.file_name())
        .and_then(|base_name| generator::generate(kind, &base_name, &host.document_text()));

    let block = match block {
        Some(block) => block,
        None => {
            host.show_error(INVALID_FILE_TYPE_MESSAGE);
            return InsertOutcome::Rejected;
        }
    };

    // Both counts are taken against the pre-edit snapshot; inserts at the
    // same position stack in call order, which keeps the footer after the
    // padding newline.
    let line_count = host.line_count();
    let needs_trailing_newline = !host.last_line().is_empty();

    host.edit(|edit| {
        if needs_trailing_newline {
            edit.insert(Position::new(line_count, 0), "\n");
        }
        for fragment in &block.header {
            edit.insert(Position::zero(), fragment);
        }
        for fragment in &block.footer {
            edit.insert(Position::new(line_count, 0), fragment);
        }
    });

    InsertOutcome::Inserted {
        guard_macro: block.guard_macro,
    }
}

/// Greet through the host's informational notification.
pub fn hello(host: &mut impl EditorHost) {
    host.show_info(HELLO_MESSAGE);
}
