use super::StorefrontState;
use crate::services::measurement::MeasurementSection;
use crate::services::render::{DetailsView, SearchView, SuggestionDropdown};

/// Search button: returns the per-card emphasis flags.
#[tauri::command]
pub fn search_services(
    query: String,
    state: tauri::State<'_, StorefrontState>,
) -> Result<SearchView, String> {
    state.with_session(|s| Ok(s.search(query)))
}

/// Search box `input` event.
#[tauri::command]
pub fn suggest_services(
    query: String,
    state: tauri::State<'_, StorefrontState>,
) -> Result<SuggestionDropdown, String> {
    state.with_session(|s| Ok(s.suggest(query)))
}

#[tauri::command]
pub fn select_suggestion(
    title: String,
    state: tauri::State<'_, StorefrontState>,
) -> Result<SearchView, String> {
    state.with_session(|s| Ok(s.select_suggestion(title)))
}

#[tauri::command]
pub fn dismiss_suggestions(
    state: tauri::State<'_, StorefrontState>,
) -> Result<SuggestionDropdown, String> {
    state.with_session(|s| Ok(s.dismiss_suggestions()))
}

#[tauri::command]
pub fn service_details(
    card_index: usize,
    state: tauri::State<'_, StorefrontState>,
) -> Result<DetailsView, String> {
    state.with_session(|s| s.service_details(card_index))
}

/// Close button or backdrop click on the details modal.
#[tauri::command]
pub fn close_details(state: tauri::State<'_, StorefrontState>) -> Result<(), String> {
    state.with_session(|s| {
        s.close_details();
        Ok(())
    })
}

/// "Order Now" on a card.
#[tauri::command]
pub fn order_service(
    card_index: usize,
    state: tauri::State<'_, StorefrontState>,
) -> Result<MeasurementSection, String> {
    state.with_session(|s| s.order_service(card_index))
}
