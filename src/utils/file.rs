//! Async file reading for user-selected files.

use std::fmt;

use wasm_bindgen_futures::JsFuture;

/// File-read errors for the import picker.
#[derive(Debug, Clone)]
pub enum FileReadError {
    /// The browser rejected the read (permission revoked, file gone).
    ReadFailed,
    /// The read completed but produced no text value.
    NotText,
}

impl fmt::Display for FileReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed => write!(f, "failed to read file"),
            Self::NotText => write!(f, "file content is not text"),
        }
    }
}

impl std::error::Error for FileReadError {}

/// Read a user-selected file as UTF-8 text.
pub async fn read_file_text(file: &web_sys::File) -> Result<String, FileReadError> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|_| FileReadError::ReadFailed)?;
    value.as_string().ok_or(FileReadError::NotText)
}
