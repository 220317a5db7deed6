use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::{Document, EditBuilder};

/// Capabilities the command layer needs from a host editor.
///
/// This is the whole surface: name of the active document, a few read
/// accessors, one transactional edit primitive, and user-visible
/// notifications. Command logic stays independent of any concrete host.
pub trait EditorHost {
    /// Full path or name of the active document
    fn file_name(&self) -> &str;

    /// Complete current text of the document
    fn document_text(&self) -> String;

    /// Number of lines, counting a trailing empty line
    fn line_count(&self) -> usize;

    /// Text of the last line (empty for documents ending in a newline)
    fn last_line(&self) -> &str;

    /// Run one edit transaction against the document
    fn edit(&mut self, build: impl FnOnce(&mut EditBuilder));

    /// Surface an error notification to the user
    fn show_error(&mut self, message: &str);

    /// Surface an informational notification to the user
    fn show_info(&mut self, message: &str);
}

/// File-backed host used by the CLI: loads a document from disk, applies
/// edits in memory and saves the result in place. Notifications map to
/// stderr and stdout.
#[derive(Debug)]
pub struct FileHost {
    path: PathBuf,
    file_name: String,
    document: Document,
}

impl FileHost {
    /// Load a document from `path`
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(FileHost {
            path: path.to_path_buf(),
            file_name: path.to_string_lossy().into_owned(),
            document: Document::from_string(&content),
        })
    }

    /// Write the current document text back to the file it was loaded from
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.document.as_string())
            .with_context(|| format!("Failed to write file: {}", self.path.display()))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl EditorHost for FileHost {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn document_text(&self) -> String {
        self.document.as_string()
    }

    fn line_count(&self) -> usize {
        self.document.line_count()
    }

    fn last_line(&self) -> &str {
        self.document.last_line()
    }

    fn edit(&mut self, build: impl FnOnce(&mut EditBuilder)) {
        self.document.edit(build);
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("Error: {}", message);
    }

    fn show_info(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Host with no backing file: an empty untitled document.
///
/// Serves commands that only notify, like the hello greeting, where nothing
/// is loaded. Notifications map to stderr and stdout exactly as in
/// [`FileHost`].
#[derive(Debug, Default)]
pub struct ConsoleHost {
    document: Document,
}

impl ConsoleHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EditorHost for ConsoleHost {
    fn file_name(&self) -> &str {
        ""
    }

    fn document_text(&self) -> String {
        self.document.as_string()
    }

    fn line_count(&self) -> usize {
        self.document.line_count()
    }

    fn last_line(&self) -> &str {
        self.document.last_line()
    }

    fn edit(&mut self, build: impl FnOnce(&mut EditBuilder)) {
        self.document.edit(build);
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("Error: {}", message);
    }

    fn show_info(&mut self, message: &str) {
        println!("{}", message);
    }
}
