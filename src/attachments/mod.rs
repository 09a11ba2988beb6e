//! Attachment ingestion
//!
//! Turns user-supplied files into base64 payloads for the generation request,
//! filtering them through a fixed MIME-type allow-list.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// MIME types accepted as generation input
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/webp",
    "image/heic",
    "image/heif",
    "audio/wav",
    "audio/mp3",
    "audio/aiff",
    "audio/aac",
    "audio/ogg",
    "audio/flac",
    "application/pdf",
];

/// A user-supplied file reduced to name, declared MIME type, and
/// base64-encoded payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub mime_type: String,
    /// Base64-encoded file content
    pub data: String,
}

impl Attachment {
    /// Encode raw file bytes into an attachment
    pub fn from_bytes(name: impl Into<String>, mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data: BASE64_STANDARD.encode(bytes),
        }
    }
}

/// A file that passed the allow-list and is waiting to be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingFile {
    pub name: String,
    pub mime_type: String,
}

/// Result of screening one batch of file names against the allow-list
#[derive(Debug, Default)]
pub struct FileTriage {
    pub accepted: Vec<IncomingFile>,
    /// Rejected files keep the declared type so the notice can name it
    pub rejected: Vec<IncomingFile>,
}

/// Match a declared MIME type against one allow-list pattern.
///
/// A trailing `*` in the pattern matches any suffix. No shipped entry carries
/// one today, but the mechanism is kept so e.g. `image/*` would work.
pub fn mime_matches(pattern: &str, mime_type: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => mime_type.starts_with(prefix),
        None => mime_type == pattern,
    }
}

/// Whether a declared MIME type is accepted as generation input
pub fn is_allowed(mime_type: &str) -> bool {
    ALLOWED_MIME_TYPES
        .iter()
        .any(|pattern| mime_matches(pattern, mime_type))
}

/// Declared MIME type for a file name, from its extension.
///
/// The desktop file engine reports names rather than types, so the extension
/// is the only declaration we have.
pub fn mime_for_name(name: &str) -> Option<&'static str> {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext)?;
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        "wav" => Some("audio/wav"),
        "mp3" => Some("audio/mp3"),
        "aiff" | "aif" => Some("audio/aiff"),
        "aac" => Some("audio/aac"),
        "ogg" => Some("audio/ogg"),
        "flac" => Some("audio/flac"),
        "pdf" => Some("application/pdf"),
        // Common types outside the allow-list, so rejection notices can name
        // what the user actually dropped
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        "mp4" => Some("video/mp4"),
        "mov" => Some("video/quicktime"),
        "txt" => Some("text/plain"),
        "md" => Some("text/markdown"),
        "json" => Some("application/json"),
        _ => None,
    }
}

/// Screen a batch of file names, splitting them into accepted files (to be
/// read and encoded) and rejections (to be surfaced to the user).
///
/// Order within each list follows the input order. One bad file never affects
/// its siblings.
pub fn triage_files<I>(names: I) -> FileTriage
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut triage = FileTriage::default();
    for name in names {
        let name = name.into();
        let mime_type = mime_for_name(&name)
            .unwrap_or("application/octet-stream")
            .to_string();
        let file = IncomingFile { name, mime_type };
        if is_allowed(&file.mime_type) {
            triage.accepted.push(file);
        } else {
            tracing::debug!("Rejected attachment {} ({})", file.name, file.mime_type);
            triage.rejected.push(file);
        }
    }
    triage
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_exact_match() {
        assert!(is_allowed("image/png"));
        assert!(is_allowed("audio/flac"));
        assert!(is_allowed("application/pdf"));
        assert!(!is_allowed("video/mp4"));
        assert!(!is_allowed("text/plain"));
        // Prefixes of allowed types are not allowed types
        assert!(!is_allowed("image/pn"));
    }

    #[test]
    fn test_wildcard_suffix_matching() {
        assert!(mime_matches("image/*", "image/png"));
        assert!(mime_matches("image/*", "image/x-obscure"));
        assert!(!mime_matches("image/*", "audio/wav"));
        assert!(mime_matches("*", "anything/at-all"));
        assert!(!mime_matches("image/png", "image/jpeg"));
    }

    #[test]
    fn test_mime_for_name() {
        assert_eq!(mime_for_name("photo.PNG"), Some("image/png"));
        assert_eq!(mime_for_name("track.aif"), Some("audio/aiff"));
        assert_eq!(mime_for_name("slides.pdf"), Some("application/pdf"));
        assert_eq!(mime_for_name("archive.tar.gz"), None);
        assert_eq!(mime_for_name("no_extension"), None);
    }

    #[test]
    fn test_encode_round_trip() {
        use base64::{engine::general_purpose::STANDARD, Engine as _};

        let bytes = [0u8, 1, 2, 250, 255];
        let att = Attachment::from_bytes("blob.png", "image/png", &bytes);
        assert_eq!(att.name, "blob.png");
        assert_eq!(att.mime_type, "image/png");
        assert_eq!(STANDARD.decode(&att.data).unwrap(), bytes);
    }

    #[test]
    fn test_triage_splits_batch() {
        let triage = triage_files(vec![
            "cover.png".to_string(),
            "notes.txt".to_string(),
            "voiceover.mp3".to_string(),
            "clip.mp4".to_string(),
            "mystery.xyz".to_string(),
        ]);

        let accepted: Vec<&str> = triage.accepted.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(accepted, vec!["cover.png", "voiceover.mp3"]);

        // One rejection per disallowed file, carrying the declared type
        assert_eq!(triage.rejected.len(), 3);
        assert_eq!(triage.rejected[0].mime_type, "text/plain");
        assert_eq!(triage.rejected[1].mime_type, "video/mp4");
        assert_eq!(triage.rejected[2].mime_type, "application/octet-stream");
    }

    #[test]
    fn test_triage_empty_batch() {
        let triage = triage_files(Vec::<String>::new());
        assert!(triage.accepted.is_empty());
        assert!(triage.rejected.is_empty());
    }
}
