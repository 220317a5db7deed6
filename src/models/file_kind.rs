/// Guard flavor determined from a file name's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// C header (`.h`) - guard plus conditional `extern "C"` wrapper
    CHeader,
    /// C++ header (`.hpp`) - guard plus optional class scaffold
    CppHeader,
    /// Unrecognized extension - no guard can be generated
    Unknown,
}

impl FileKind {
    /// Guard macro suffix for this kind, `None` for `Unknown`
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            FileKind::CHeader => Some("H"),
            FileKind::CppHeader => Some("HPP"),
            FileKind::Unknown => None,
        }
    }
}
