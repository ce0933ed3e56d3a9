use serde::{Deserialize, Serialize};

/// Card descriptor as read from the page markup at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCard {
    pub title: String,
    /// Value of the card's `data-service` attribute.
    pub key: String,
    /// Value of the card's `data-details` attribute.
    #[serde(default)]
    pub details: String,
    /// Comma-separated image URLs from `data-imgs`.
    #[serde(default)]
    pub images: String,
}

/// Indexed catalog entry, immutable for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub title: String,
    pub key: String,
    pub details: String,
    pub image_urls: Vec<String>,
}
