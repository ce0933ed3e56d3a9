use serde::Serialize;

/// A single body-measurement input in the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementField {
    pub label: &'static str,
    /// `name` attribute of the generated input.
    pub field_name: &'static str,
}
