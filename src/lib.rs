//! # auto-header
//!
//! A CLI tool and library for inserting include guards into C/C++ header files.
//!
//! Given a `.h` or `.hpp` file, it derives a guard macro from the file name and
//! wraps the existing content:
//! - **C headers** (`.h`) additionally get an `extern "C"` block guarded by
//!   `__cplusplus` checks.
//! - **C++ headers** (`.hpp`) get an empty class scaffold named after the file,
//!   unless the document already mentions a class.
//!
//! Files with any other extension are rejected with an error message and left
//! untouched.
//!
//! ## Usage
//!
//! Although primarily used as a CLI tool, you can also use it as a library:
//!
//! ```rust,no_run
//! use auto_header::commands::insert_header;
//! use auto_header::editor::FileHost;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut host = FileHost::open("include/widget.hpp".as_ref())?;
//!     insert_header(&mut host);
//!     host.save()?;
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod cli;
pub mod commands;
pub mod document;
pub mod editor;
pub mod generator;
pub mod models;
pub mod naming;
