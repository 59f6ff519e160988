//! Utility modules for DOM and browser storage access.
//!
//! Provides:
//! - [`dom`] - Safe access to window and localStorage
//! - [`storage`] - JSON-serialized localStorage helpers
//! - [`read_file_text`] - Async UTF-8 text read of a user-selected file

pub mod dom;
mod file;
pub mod storage;

pub use file::{FileReadError, read_file_text};
