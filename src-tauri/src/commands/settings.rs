use super::StorefrontState;
use crate::models::settings::StorefrontSettings;

#[tauri::command]
pub fn get_settings(state: tauri::State<'_, StorefrontState>) -> Result<StorefrontSettings, String> {
    state.with_session(|s| Ok(s.settings().clone()))
}

#[tauri::command]
pub fn save_settings(
    settings_data: StorefrontSettings,
    state: tauri::State<'_, StorefrontState>,
) -> Result<(), String> {
    state.with_session(|s| s.update_settings(settings_data))
}
