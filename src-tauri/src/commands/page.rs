use super::StorefrontState;
use crate::models::catalog::ServiceCard;
use crate::services::session::PageSnapshot;

/// Called once the page's markup is in place: indexes the service cards and
/// returns the restored cart, profile and initial measurement section.
#[tauri::command]
pub fn page_ready(
    cards: Vec<ServiceCard>,
    selected_service: String,
    state: tauri::State<'_, StorefrontState>,
) -> Result<PageSnapshot, String> {
    state.with_session(|s| Ok(s.page_ready(&cards, selected_service)))
}
