use tauri::AppHandle;

use crate::receipt;
use crate::store::{Store, StoreExt};

#[tauri::command]
pub fn render_bill(app: AppHandle, order_id: String) -> Result<String, String> {
    render_bill_html(app.store(), &order_id)
}

pub fn render_bill_html(store: &Store, order_id: &str) -> Result<String, String> {
    let orders = store.orders().map_err(|e| e.to_string())?;
    let order = orders
        .iter()
        .find(|o| o.id == order_id)
        .ok_or_else(|| format!("Order {} not found", order_id))?;

    let customers = store.customers().map_err(|e| e.to_string())?;
    let customer = customers
        .iter()
        .find(|c| c.id == order.customer_id)
        .ok_or_else(|| format!("Customer {} not found", order.customer_id))?;

    let settings = store.settings().map_err(|e| e.to_string())?;
    Ok(receipt::render(order, customer, &settings))
}
