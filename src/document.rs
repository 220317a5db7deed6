//! Text document and edit transaction types

/// Insertion address in a document
///
/// `col` is a byte offset within the row's line; one landing inside a
/// multi-byte character snaps back to the previous character boundary at
/// application time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// In-memory document with line-based addressing
///
/// The buffer always holds at least one line. `from_string` keeps a trailing
/// empty line for text ending in a newline (`"a\n"` is two lines, the second
/// empty), which is what the last-line-empty check in the guard writer
/// depends on. `as_string` round-trips the exact text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    pub fn from_string(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(String::from).collect(),
        }
    }

    pub fn as_string(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    pub fn last_line(&self) -> &str {
        self.lines.last().map(|s| s.as_str()).unwrap_or("")
    }

    /// Apply a batch of insertions as one transaction.
    ///
    /// Every position is resolved against the snapshot the closure saw:
    /// insertions at the same position land in call order, and rows past the
    /// end clamp to the end of the document. All insertions apply together
    /// or, if the closure records none, the document is left untouched.
    pub fn edit(&mut self, build: impl FnOnce(&mut EditBuilder)) {
        let mut builder = EditBuilder::new();
        build(&mut builder);

        if builder.inserts.is_empty() {
            return;
        }

        let mut text = self.as_string();
        let mut resolved: Vec<(usize, String)> = builder
            .inserts
            .into_iter()
            .map(|(pos, fragment)| (self.offset_of(pos, text.len()), fragment))
            .collect();

        // Stable sort keeps call order for equal offsets; applying from the
        // back keeps earlier offsets valid.
        resolved.sort_by_key(|(offset, _)| *offset);
        for (offset, fragment) in resolved.into_iter().rev() {
            text.insert_str(offset, &fragment);
        }

        self.lines = text.split('\n').map(String::from).collect();
    }

    fn offset_of(&self, pos: Position, text_len: usize) -> usize {
        if pos.row >= self.lines.len() {
            return text_len;
        }

        let mut offset = 0;
        for line in &self.lines[..pos.row] {
            offset += line.len() + 1;
        }

        let line = &self.lines[pos.row];
        let mut col = pos.col.min(line.len());
        while !line.is_char_boundary(col) {
            col -= 1;
        }
        offset + col
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects insertions for one `Document::edit` transaction
pub struct EditBuilder {
    inserts: Vec<(Position, String)>,
}

impl EditBuilder {
    fn new() -> Self {
        Self {
            inserts: Vec::new(),
        }
    }

    /// Record an insertion; nothing is applied until the transaction ends.
    pub fn insert(&mut self, pos: Position, text: &str) {
        self.inserts.push((pos, text.to_string()));
    }
}
