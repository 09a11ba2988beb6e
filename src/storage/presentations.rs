//! Presentation history storage
//!
//! One pretty-printed JSON file per presentation under the platform data
//! directory. The on-disk layout is serde's derived form and is not a
//! compatibility surface.

use crate::storage::{get_data_dir, StorageError};
use crate::types::presentation::PresentationData;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the presentations directory
fn get_presentations_dir() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("presentations"))
}

fn presentation_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{}.json", id))
}

/// Save a presentation to disk
pub fn save_presentation(presentation: &PresentationData) -> Result<(), StorageError> {
    save_presentation_in(&get_presentations_dir()?, presentation)
}

pub(crate) fn save_presentation_in(
    dir: &Path,
    presentation: &PresentationData,
) -> Result<(), StorageError> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(presentation)?;
    fs::write(presentation_path(dir, &presentation.id), json)?;
    tracing::debug!("Saved presentation: {}", presentation.id);
    Ok(())
}

/// Load a presentation from disk
pub fn load_presentation(id: &str) -> Result<PresentationData, StorageError> {
    load_presentation_in(&get_presentations_dir()?, id)
}

pub(crate) fn load_presentation_in(dir: &Path, id: &str) -> Result<PresentationData, StorageError> {
    let path = presentation_path(dir, id);

    if !path.exists() {
        return Err(StorageError::PresentationNotFound(id.to_string()));
    }

    let json = fs::read_to_string(&path)?;
    let presentation: PresentationData = serde_json::from_str(&json)?;
    tracing::debug!("Loaded presentation: {}", id);
    Ok(presentation)
}

/// List all presentations, most recently created first.
///
/// Unreadable or unparseable files are skipped with a warning so one corrupt
/// entry never hides the rest of the history.
pub fn list_presentations() -> Result<Vec<PresentationData>, StorageError> {
    list_presentations_in(&get_presentations_dir()?)
}

pub(crate) fn list_presentations_in(dir: &Path) -> Result<Vec<PresentationData>, StorageError> {
    if !dir.exists() {
        return Ok(vec![]);
    }

    let mut presentations = vec![];

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            match fs::read_to_string(&path) {
                Ok(json) => match serde_json::from_str::<PresentationData>(&json) {
                    Ok(presentation) => presentations.push(presentation),
                    Err(e) => {
                        tracing::warn!("Failed to parse presentation file {:?}: {}", path, e);
                        continue;
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read presentation file {:?}: {}", path, e);
                    continue;
                }
            }
        }
    }

    crate::types::presentation::sort_by_recency(&mut presentations);

    Ok(presentations)
}

/// Delete a presentation
pub fn delete_presentation(id: &str) -> Result<(), StorageError> {
    delete_presentation_in(&get_presentations_dir()?, id)
}

pub(crate) fn delete_presentation_in(dir: &Path, id: &str) -> Result<(), StorageError> {
    let path = presentation_path(dir, id);

    if !path.exists() {
        return Err(StorageError::PresentationNotFound(id.to_string()));
    }

    fs::remove_file(path)?;
    tracing::debug!("Deleted presentation: {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::presentation::SlideData;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut deck = PresentationData::new("Kept on disk");
        deck.slides.push(SlideData::new("One", "A foggy harbor"));

        save_presentation_in(dir.path(), &deck).unwrap();
        let loaded = load_presentation_in(dir.path(), &deck.id).unwrap();

        assert_eq!(deck, loaded);
    }

    #[test]
    fn test_load_missing_presentation() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_presentation_in(dir.path(), "no-such-id");
        assert!(matches!(result, Err(StorageError::PresentationNotFound(_))));
    }

    #[test]
    fn test_list_sorted_and_skips_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();

        for (topic, ts) in [("old", 100), ("newest", 300), ("middle", 200)] {
            let mut deck = PresentationData::new(topic);
            deck.created_at = Utc.timestamp_opt(ts, 0).unwrap();
            save_presentation_in(dir.path(), &deck).unwrap();
        }
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        fs::write(dir.path().join("ignored.txt"), "not a presentation").unwrap();

        let listed = list_presentations_in(dir.path()).unwrap();
        let topics: Vec<&str> = listed.iter().map(|p| p.topic.as_str()).collect();
        assert_eq!(topics, vec!["newest", "middle", "old"]);
    }

    #[test]
    fn test_delete_presentation() {
        let dir = tempfile::tempdir().unwrap();
        let deck = PresentationData::new("Doomed");
        save_presentation_in(dir.path(), &deck).unwrap();

        delete_presentation_in(dir.path(), &deck.id).unwrap();
        assert!(list_presentations_in(dir.path()).unwrap().is_empty());

        let again = delete_presentation_in(dir.path(), &deck.id);
        assert!(matches!(again, Err(StorageError::PresentationNotFound(_))));
    }

    #[test]
    fn test_list_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("never-created");
        assert!(list_presentations_in(&missing).unwrap().is_empty());
    }
}
