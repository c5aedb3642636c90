use tauri::AppHandle;

use crate::models::ShopSettings;
use crate::store::StoreExt;

#[tauri::command]
pub fn get_settings(app: AppHandle) -> Result<ShopSettings, String> {
    app.store().settings().map_err(|e| e.to_string())
}

/// Settings are a singleton replaced wholesale; the price list that arrives
/// here is stored verbatim.
#[tauri::command]
pub fn save_settings(app: AppHandle, settings: ShopSettings) -> Result<(), String> {
    if settings.name.trim().is_empty() {
        return Err("Shop name is required".to_string());
    }
    if settings.pin.trim().is_empty() {
        return Err("Login PIN is required".to_string());
    }
    if settings.price_list.values().any(|price| *price < 0.0) {
        return Err("Prices cannot be negative".to_string());
    }

    app.store()
        .save_settings(&settings)
        .map_err(|e| e.to_string())?;

    log::info!("settings saved");
    Ok(())
}
