use chrono::{DateTime, Local};
use tauri::AppHandle;

use crate::ident;
use crate::store::{Store, StoreExt};

#[tauri::command]
pub fn login(app: AppHandle, pin: String) -> Result<bool, String> {
    login_with_pin(app.store(), &pin, Local::now())
}

#[tauri::command]
pub fn logout(app: AppHandle) -> Result<(), String> {
    app.store().clear_auth().map_err(|e| e.to_string())?;
    log::info!("logged out");
    Ok(())
}

#[tauri::command]
pub fn check_auth(app: AppHandle) -> Result<bool, String> {
    is_authenticated_now(app.store(), Local::now())
}

/// Plain string equality against the stored PIN. This is a convenience
/// gate for a single-operator shop, not real authentication; the PIN is
/// stored in clear and there is no rate limiting.
pub fn login_with_pin(store: &Store, pin: &str, now: DateTime<Local>) -> Result<bool, String> {
    let settings = store.settings().map_err(|e| e.to_string())?;
    if settings.pin != pin {
        log::warn!("failed login attempt");
        return Ok(false);
    }
    store
        .set_auth_date(&ident::auth_day(now))
        .map_err(|e| e.to_string())?;
    log::info!("logged in");
    Ok(true)
}

/// The login flag expires implicitly at local-date rollover.
pub fn is_authenticated_now(store: &Store, now: DateTime<Local>) -> Result<bool, String> {
    let stored = store.auth_date().map_err(|e| e.to_string())?;
    Ok(ident::is_authenticated(
        stored.as_deref(),
        &ident::auth_day(now),
    ))
}
