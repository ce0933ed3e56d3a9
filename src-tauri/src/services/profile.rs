//! Profile store and avatar ingestion.
//!
//! The profile is a single record overwritten on every save. The avatar is
//! whatever image is currently previewed in the profile form, carried as a
//! `data:` URI so the page can display it without file access.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;

use crate::error::AppError;
use crate::models::profile::Profile;
use crate::storage::{self, KeyValueStore};

pub struct ProfileStore {
    storage: Arc<dyn KeyValueStore>,
    saved: Option<Profile>,
    avatar_preview: Option<String>,
}

impl ProfileStore {
    /// Load the saved profile and preview its avatar, if it has one.
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Self {
        let saved = storage::profile::load(storage.as_ref());
        let avatar_preview = saved
            .as_ref()
            .map(|p| p.avatar.clone())
            .filter(|a| !a.is_empty());
        Self {
            storage,
            saved,
            avatar_preview,
        }
    }

    /// The last saved profile, re-read from the store.
    pub fn load(&self) -> Option<Profile> {
        storage::profile::load(self.storage.as_ref())
    }

    pub fn saved(&self) -> Option<&Profile> {
        self.saved.as_ref()
    }

    /// Overwrite the saved profile.
    pub fn save(&mut self, profile: Profile) -> crate::error::Result<()> {
        storage::profile::save(self.storage.as_ref(), &profile)?;
        self.saved = Some(profile);
        Ok(())
    }

    pub fn avatar_preview(&self) -> Option<&str> {
        self.avatar_preview.as_deref()
    }

    /// Replace the preview. `None` clears it. The latest call wins.
    pub fn set_avatar_preview(&mut self, data_uri: Option<String>) {
        self.avatar_preview = data_uri;
    }

    /// Profile record built from form input plus the current preview.
    pub fn compose(&self, name: String, email: String) -> Profile {
        Profile {
            name,
            email,
            avatar: self.avatar_preview.clone().unwrap_or_default(),
        }
    }
}

/// Read an image file and encode it as a `data:` URI.
///
/// The read runs on the blocking pool so other commands keep flowing while a
/// large image loads.
pub async fn read_avatar(path: PathBuf) -> crate::error::Result<String> {
    tokio::task::spawn_blocking(move || {
        let bytes = std::fs::read(&path)?;
        Ok(encode_data_uri(&bytes, mime_for_path(&path)))
    })
    .await
    .map_err(|e| AppError::Internal(format!("spawn_blocking join error: {}", e)))?
}

pub fn encode_data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, B64.encode(bytes))
}

/// MIME type guessed from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn restore_without_saved_profile_has_no_preview() {
        let store = ProfileStore::restore(Arc::new(MemoryStore::new()));
        assert!(store.saved().is_none());
        assert!(store.load().is_none());
        assert!(store.avatar_preview().is_none());
    }

    #[test]
    fn save_then_restore_brings_back_avatar_preview() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = ProfileStore::restore(storage.clone());
        store.set_avatar_preview(Some("data:image/png;base64,iVBORw0=".into()));
        let profile = store.compose("Ada".into(), "ada@example.com".into());
        store.save(profile.clone()).unwrap();

        let reloaded = ProfileStore::restore(storage);
        assert_eq!(reloaded.saved(), Some(&profile));
        assert_eq!(reloaded.avatar_preview(), Some("data:image/png;base64,iVBORw0="));
    }

    #[test]
    fn compose_without_preview_leaves_avatar_empty() {
        let store = ProfileStore::restore(Arc::new(MemoryStore::new()));
        let profile = store.compose("Ada".into(), "ada@example.com".into());
        assert_eq!(profile.avatar, "");
    }

    #[test]
    fn clearing_preview_drops_avatar() {
        let mut store = ProfileStore::restore(Arc::new(MemoryStore::new()));
        store.set_avatar_preview(Some("data:image/gif;base64,R0lG".into()));
        store.set_avatar_preview(None);
        assert!(store.avatar_preview().is_none());
    }

    #[test]
    fn encode_data_uri_uses_standard_base64() {
        assert_eq!(encode_data_uri(b"hi?", "image/png"), "data:image/png;base64,aGk/");
        assert_eq!(encode_data_uri(b"", "image/png"), "data:image/png;base64,");
    }

    #[test]
    fn mime_is_guessed_from_extension() {
        assert_eq!(mime_for_path(Path::new("me.PNG")), "image/png");
        assert_eq!(mime_for_path(Path::new("me.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("me.svg")), "image/svg+xml");
        assert_eq!(mime_for_path(Path::new("me")), "application/octet-stream");
    }

    #[tokio::test]
    async fn read_avatar_encodes_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let uri = read_avatar(path).await.unwrap();
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[tokio::test]
    async fn read_avatar_missing_file_is_io_error() {
        let result = read_avatar(PathBuf::from("/nonexistent/avatar.png")).await;
        match result.unwrap_err() {
            AppError::Io(_) => {}
            other => panic!("Expected AppError::Io, got: {:?}", other),
        }
    }
}
