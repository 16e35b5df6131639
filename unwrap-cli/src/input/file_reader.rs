//! File reading utilities

use crate::encoding;
use crate::error::CliError;
use anyhow::{Context, Result};
use encoding_rs::Encoding;
use std::fs;
use std::path::Path;

/// File reader with explicit character decoding
pub struct FileReader;

impl FileReader {
    /// Read a file and decode it with `encoding`
    pub fn read_text(path: &Path, encoding: &'static Encoding) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        log::debug!("Read {} bytes from {}", bytes.len(), path.display());

        let text = encoding::decode(&bytes, encoding, &path.display().to_string())?;
        Ok(text)
    }

    /// Split decoded text into physical lines
    ///
    /// Both `\n` and `\r\n` terminate a line; a trailing terminator does not
    /// produce an extra empty line.
    pub fn split_lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }
}
