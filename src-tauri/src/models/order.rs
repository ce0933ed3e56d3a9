use serde::{Deserialize, Serialize};

/// Order form values as submitted by the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderForm {
    pub name: String,
    pub email: String,
    pub fabric: String,
    pub details: String,
    /// Current value of the service selector.
    pub service: String,
}

/// Per-field validation messages. `None` clears any message shown earlier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub fabric: Option<&'static str>,
    pub details: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.fabric.is_none()
            && self.details.is_none()
    }
}
