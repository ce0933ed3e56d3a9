use super::StorefrontState;
use crate::models::order::OrderForm;
use crate::services::measurement::MeasurementSection;
use crate::services::session::SubmitView;

/// Service selector `change` event.
#[tauri::command]
pub fn measurement_fields(
    service: String,
    state: tauri::State<'_, StorefrontState>,
) -> Result<MeasurementSection, String> {
    state.with_session(|s| Ok(s.select_service(service)))
}

#[tauri::command]
pub fn submit_order(
    form: OrderForm,
    state: tauri::State<'_, StorefrontState>,
) -> Result<SubmitView, String> {
    state.with_session(|s| s.submit_order(&form))
}
