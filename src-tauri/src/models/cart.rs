use serde::{Deserialize, Serialize};

/// One line in the cart. Lines have no identity beyond their position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Display title of the service card.
    pub name: String,
    /// Catalog key of the service (e.g. "shirt").
    #[serde(rename = "type")]
    pub service_type: String,
}

impl CartItem {
    pub fn new(name: impl Into<String>, service_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            service_type: service_type.into(),
        }
    }
}
