use chrono::{DateTime, Local};
use tauri::AppHandle;

use crate::models::Measurement;
use crate::store::{Store, StoreExt};

#[tauri::command]
pub fn get_measurement(
    app: AppHandle,
    customer_id: String,
) -> Result<Option<Measurement>, String> {
    let measurements = app.store().measurements().map_err(|e| e.to_string())?;
    Ok(measurements
        .into_iter()
        .find(|m| m.customer_id == customer_id))
}

#[tauri::command]
pub fn save_measurement(app: AppHandle, measurement: Measurement) -> Result<Measurement, String> {
    upsert_measurement(app.store(), measurement, Local::now())
}

/// Saves are upserts keyed by `customer_id`: an existing sheet is replaced
/// in place (its original `created_at` kept), never duplicated.
pub fn upsert_measurement(
    store: &Store,
    mut measurement: Measurement,
    now: DateTime<Local>,
) -> Result<Measurement, String> {
    if measurement.customer_id.trim().is_empty() {
        return Err("Customer ID is required".to_string());
    }

    let mut measurements = store.measurements().map_err(|e| e.to_string())?;
    measurement.updated_at = now.to_rfc3339();

    match measurements
        .iter_mut()
        .find(|m| m.customer_id == measurement.customer_id)
    {
        Some(existing) => {
            measurement.created_at = existing.created_at.clone();
            *existing = measurement.clone();
        }
        None => {
            measurement.created_at = now.to_rfc3339();
            measurements.push(measurement.clone());
        }
    }

    store
        .save_measurements(&measurements)
        .map_err(|e| e.to_string())?;

    log::info!("saved measurements for customer {}", measurement.customer_id);
    Ok(measurement)
}
