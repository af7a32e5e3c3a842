//! JSON export of generated artifacts and outcome logs

use std::path::Path;

use serde::Serialize;

use crate::io::error::{GenerationError, Result, file_system_error};

/// Serialize a value to pretty JSON
///
/// # Errors
///
/// Returns a serialization error when the value cannot be encoded.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T, target: &'static str) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| GenerationError::Serialization {
        target,
        source,
    })
}

/// Write a value as pretty JSON to a file
///
/// # Errors
///
/// Returns a serialization error when encoding fails and a file system error
/// when the file cannot be written.
pub fn write_json_file<T: Serialize + ?Sized>(
    value: &T,
    path: &Path,
    target: &'static str,
) -> Result<()> {
    let encoded = to_json_string(value, target)?;
    std::fs::write(path, encoded).map_err(|source| file_system_error(path, "write", source))
}
