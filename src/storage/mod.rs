//! Persistent storage
//!
//! This module handles persistence of the presentation history.

use std::path::PathBuf;
use thiserror::Error;

pub mod presentations;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access data directory: {0}")]
    DataDirError(String),
    #[error("Failed to read file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to serialize/deserialize JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Presentation not found: {0}")]
    PresentationNotFound(String),
}

/// Get the application data directory
///
/// Returns the platform-specific application data directory:
/// - Windows: `C:\Users\{user}\AppData\Roaming\SlideDeck\SlideDeck`
/// - macOS: `/Users/{user}/Library/Application Support/com.SlideDeck.SlideDeck`
/// - Linux: `/home/{user}/.local/share/SlideDeck`
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "SlideDeck", "SlideDeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StorageError::DataDirError("Could not determine data directory".to_string()))
}

/// Initialize the storage directory structure
///
/// Creates `{data_dir}/presentations/` for presentation JSON files.
pub fn init_storage() -> Result<(), StorageError> {
    let data_dir = get_data_dir()?;

    let presentations_dir = data_dir.join("presentations");
    std::fs::create_dir_all(&presentations_dir)?;

    tracing::info!("Initialized storage at: {}", data_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_retrieval() {
        let result = get_data_dir();
        assert!(result.is_ok());
        let path = result.unwrap();
        assert!(path.to_string_lossy().contains("SlideDeck"));
    }
}
