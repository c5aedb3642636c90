mod commands;
mod ident;
mod models;
mod receipt;
mod store;

#[cfg(test)]
mod tests;

use commands::{auth, backup, bill, customers, measurements, orders, settings};
use store::Store;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .setup(|app| {
            let store = Store::open(&app.handle()).expect("Failed to open store");
            app.manage(store);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Auth
            auth::login,
            auth::logout,
            auth::check_auth,
            // Customers
            customers::get_customers,
            customers::create_customer,
            customers::search_customers,
            // Measurements
            measurements::get_measurement,
            measurements::save_measurement,
            // Orders
            orders::create_order,
            orders::get_orders,
            orders::get_customer_orders,
            orders::search_orders,
            orders::order_stats,
            // Settings
            settings::get_settings,
            settings::save_settings,
            // Backup
            backup::export_backup,
            backup::import_backup,
            // Bill
            bill::render_bill,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
