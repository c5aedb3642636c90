use std::fs;
use std::path::Path;

use chrono::Utc;
use tauri::AppHandle;

use crate::models::Backup;
use crate::store::{Store, StoreExt};

#[tauri::command]
pub fn export_backup(app: AppHandle, path: String) -> Result<(), String> {
    export_to_path(app.store(), Path::new(&path))
}

#[tauri::command]
pub fn import_backup(app: AppHandle, path: String) -> Result<(), String> {
    import_from_path(app.store(), Path::new(&path))
}

pub fn export_to_path(store: &Store, path: &Path) -> Result<(), String> {
    let backup = Backup {
        customers: Some(store.customers().map_err(|e| e.to_string())?),
        measurements: Some(store.measurements().map_err(|e| e.to_string())?),
        orders: Some(store.orders().map_err(|e| e.to_string())?),
        settings: Some(store.settings().map_err(|e| e.to_string())?),
        export_date: Utc::now().to_rfc3339(),
    };

    let json = serde_json::to_string_pretty(&backup).map_err(|e| e.to_string())?;
    fs::write(path, json).map_err(|e| format!("Failed to write backup: {}", e))?;

    log::info!("exported backup to {}", path.display());
    Ok(())
}

/// The whole file is parsed before anything is written, so a malformed
/// backup leaves existing data untouched. Each collection present in the
/// file replaces the stored one; missing collections are left alone.
pub fn import_from_path(store: &Store, path: &Path) -> Result<(), String> {
    let text = fs::read_to_string(path).map_err(|e| format!("Failed to read backup: {}", e))?;
    let backup: Backup =
        serde_json::from_str(&text).map_err(|_| "Invalid backup file format".to_string())?;

    if let Some(customers) = &backup.customers {
        store.save_customers(customers).map_err(|e| e.to_string())?;
    }
    if let Some(measurements) = &backup.measurements {
        store
            .save_measurements(measurements)
            .map_err(|e| e.to_string())?;
    }
    if let Some(orders) = &backup.orders {
        store.save_orders(orders).map_err(|e| e.to_string())?;
    }
    if let Some(settings) = &backup.settings {
        store.save_settings(settings).map_err(|e| e.to_string())?;
    }

    log::info!("imported backup from {}", path.display());
    Ok(())
}
