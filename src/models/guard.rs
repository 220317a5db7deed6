/// Generated include-guard text for one document
///
/// Header and footer are ordered sequences of fragments; every fragment
/// already carries the newline(s) it needs, so inserting them verbatim in
/// order reproduces the guard exactly. The macro is computed once and shared
/// by the `#ifndef`/`#define` pair and the footer's closing comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardBlock {
    /// Guard macro, e.g. `MYMODULE_H`
    pub guard_macro: String,
    /// Fragments inserted at the top of the document, in order
    pub header: Vec<String>,
    /// Fragments inserted at the end of the document, in order
    pub footer: Vec<String>,
}

impl GuardBlock {
    /// All header fragments joined into one string
    pub fn header_text(&self) -> String {
        self.header.concat()
    }

    /// All footer fragments joined into one string
    pub fn footer_text(&self) -> String {
        self.footer.concat()
    }
}
