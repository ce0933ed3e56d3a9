use super::StorefrontState;
use crate::services::render::CartView;
use crate::services::session::CheckoutView;

#[tauri::command]
pub fn add_to_cart(
    card_index: usize,
    state: tauri::State<'_, StorefrontState>,
) -> Result<CartView, String> {
    state.with_session(|s| s.add_to_cart(card_index))
}

#[tauri::command]
pub fn remove_cart_item(
    index: usize,
    state: tauri::State<'_, StorefrontState>,
) -> Result<CartView, String> {
    state.with_session(|s| s.remove_cart_item(index))
}

#[tauri::command]
pub fn open_cart(state: tauri::State<'_, StorefrontState>) -> Result<CartView, String> {
    state.with_session(|s| Ok(s.open_cart()))
}

#[tauri::command]
pub fn close_cart(state: tauri::State<'_, StorefrontState>) -> Result<(), String> {
    state.with_session(|s| {
        s.close_cart();
        Ok(())
    })
}

#[tauri::command]
pub fn checkout(state: tauri::State<'_, StorefrontState>) -> Result<Option<CheckoutView>, String> {
    state.with_session(|s| Ok(s.checkout()))
}
