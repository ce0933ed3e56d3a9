//! Measurement schema — which body-measurement inputs the order form shows
//! for each service type.

use serde::Serialize;

use crate::models::measurement::MeasurementField;
use crate::services::render::escape_html;

const SHIRT_FIELDS: &[MeasurementField] = &[
    MeasurementField { label: "Chest (inches)", field_name: "chest" },
    MeasurementField { label: "Shoulder (inches)", field_name: "shoulder" },
    MeasurementField { label: "Sleeve Length (inches)", field_name: "sleeve" },
    MeasurementField { label: "Shirt Length (inches)", field_name: "shirtLength" },
];

const DRESS_FIELDS: &[MeasurementField] = &[
    MeasurementField { label: "Bust (inches)", field_name: "bust" },
    MeasurementField { label: "Waist (inches)", field_name: "waist" },
    MeasurementField { label: "Hip (inches)", field_name: "hip" },
    MeasurementField { label: "Dress Length (inches)", field_name: "dressLength" },
];

const PANT_FIELDS: &[MeasurementField] = &[
    MeasurementField { label: "Waist (inches)", field_name: "pantWaist" },
    MeasurementField { label: "Hip (inches)", field_name: "pantHip" },
    MeasurementField { label: "Inseam (inches)", field_name: "inseam" },
    MeasurementField { label: "Pant Length (inches)", field_name: "pantLength" },
];

/// Ordered fields for `service_key`; empty for unknown keys.
pub fn fields_for(service_key: &str) -> &'static [MeasurementField] {
    match service_key {
        "shirt" => SHIRT_FIELDS,
        "dress" => DRESS_FIELDS,
        "pant" => PANT_FIELDS,
        _ => &[],
    }
}

/// The measurement part of the order form for one service selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSection {
    pub service: String,
    /// `false` hides the whole section.
    pub visible: bool,
    pub fields: &'static [MeasurementField],
    pub markup: String,
}

impl MeasurementSection {
    pub fn for_service(service_key: &str) -> Self {
        let fields = fields_for(service_key);
        Self {
            service: service_key.to_string(),
            visible: !fields.is_empty(),
            fields,
            markup: render_fragment(fields),
        }
    }
}

/// One labelled numeric input per field.
pub fn render_fragment(fields: &[MeasurementField]) -> String {
    fields
        .iter()
        .map(|m| {
            format!(
                "<div class=\"measurement-input\"><label>{}</label>\
                 <input type=\"number\" name=\"{}\" min=\"0\" step=\"0.1\"></div>",
                escape_html(m.label),
                escape_html(m.field_name)
            )
        })
        .collect()
}
