use std::sync::Arc;

use tauri::Manager;

pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

use services::render::Presenter;
use services::session::Storefront;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_store::Builder::new().build())
        .setup(|app| {
            let store = storage::open(app.handle())?;
            let presenter: Arc<dyn Presenter> = Arc::new(app.handle().clone());
            let session = Storefront::restore(store, presenter)?;
            app.manage(commands::StorefrontState::new(session));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::page::page_ready,
            commands::cart::add_to_cart,
            commands::cart::remove_cart_item,
            commands::cart::open_cart,
            commands::cart::close_cart,
            commands::cart::checkout,
            commands::catalog::search_services,
            commands::catalog::suggest_services,
            commands::catalog::select_suggestion,
            commands::catalog::dismiss_suggestions,
            commands::catalog::service_details,
            commands::catalog::close_details,
            commands::catalog::order_service,
            commands::order::measurement_fields,
            commands::order::submit_order,
            commands::profile::get_profile,
            commands::profile::open_profile,
            commands::profile::close_profile,
            commands::profile::save_profile,
            commands::profile::select_avatar,
            commands::settings::get_settings,
            commands::settings::save_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
