pub mod guard_gen;

pub use guard_gen::generate;
