use serde::{Deserialize, Serialize};

/// Default lifetime of a toast notification.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 1800;

/// Storefront settings persisted in the plugin store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontSettings {
    /// How long a toast stays on screen before the page removes it.
    pub toast_duration_ms: u64,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}
