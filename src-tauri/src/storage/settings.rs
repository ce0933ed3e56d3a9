use super::KeyValueStore;
use crate::models::settings::StorefrontSettings;

const SETTINGS_KEY: &str = "settings";

/// Read storefront settings. Returns defaults if none are saved.
pub fn get_settings(store: &dyn KeyValueStore) -> StorefrontSettings {
    store
        .read_value(SETTINGS_KEY)
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

/// Save storefront settings. Persists to disk immediately.
pub fn save_settings(
    store: &dyn KeyValueStore,
    settings: &StorefrontSettings,
) -> crate::error::Result<()> {
    store.write_value(SETTINGS_KEY, serde_json::to_value(settings)?)
}
