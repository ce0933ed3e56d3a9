use std::path::PathBuf;

use super::StorefrontState;
use crate::services::profile;
use crate::services::render::ProfileView;

#[tauri::command]
pub fn get_profile(state: tauri::State<'_, StorefrontState>) -> Result<ProfileView, String> {
    state.with_session(|s| Ok(s.profile_view()))
}

#[tauri::command]
pub fn open_profile(state: tauri::State<'_, StorefrontState>) -> Result<ProfileView, String> {
    state.with_session(|s| Ok(s.open_profile()))
}

#[tauri::command]
pub fn close_profile(state: tauri::State<'_, StorefrontState>) -> Result<(), String> {
    state.with_session(|s| {
        s.close_profile();
        Ok(())
    })
}

#[tauri::command]
pub fn save_profile(
    name: String,
    email: String,
    state: tauri::State<'_, StorefrontState>,
) -> Result<ProfileView, String> {
    state.with_session(|s| s.save_profile(name, email))
}

/// Avatar file chosen (or cleared) in the profile form.
///
/// The file is read without holding the session lock; whichever selection
/// finishes last sets the preview.
#[tauri::command]
pub async fn select_avatar(
    path: Option<String>,
    state: tauri::State<'_, StorefrontState>,
) -> Result<ProfileView, String> {
    let data_uri = match path {
        Some(path) => Some(
            profile::read_avatar(PathBuf::from(&path))
                .await
                .map_err(|e| {
                    log::warn!("Failed to read avatar '{}': {}", path, e);
                    e.to_string()
                })?,
        ),
        None => None,
    };
    state.with_session(|s| Ok(s.set_avatar_preview(data_uri)))
}
