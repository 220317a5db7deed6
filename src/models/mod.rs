mod file_kind;
mod guard;

pub use file_kind::FileKind;
pub use guard::GuardBlock;
