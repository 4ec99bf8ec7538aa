//! File reading utilities

use std::fs;
use std::path::Path;

use crate::error::CliError;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a whole file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String, CliError> {
        fs::read_to_string(path).map_err(|e| CliError::read(path, e))
    }
}
