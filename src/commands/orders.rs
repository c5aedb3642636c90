use chrono::{DateTime, Local};
use tauri::AppHandle;

use crate::ident;
use crate::models::{CreateOrder, Order, OrderStats, PaymentStatus};
use crate::store::{Store, StoreExt};

#[tauri::command]
pub fn create_order(app: AppHandle, order: CreateOrder) -> Result<Order, String> {
    create_order_record(app.store(), order, Local::now())
}

#[tauri::command]
pub fn get_orders(app: AppHandle) -> Result<Vec<Order>, String> {
    app.store().orders().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_customer_orders(app: AppHandle, customer_id: String) -> Result<Vec<Order>, String> {
    let orders = app.store().orders().map_err(|e| e.to_string())?;
    Ok(orders
        .into_iter()
        .filter(|o| o.customer_id == customer_id)
        .collect())
}

#[tauri::command]
pub fn search_orders(
    app: AppHandle,
    query: String,
    status: Option<PaymentStatus>,
) -> Result<Vec<Order>, String> {
    let orders = app.store().orders().map_err(|e| e.to_string())?;
    Ok(filter_orders(orders, &query, status))
}

#[tauri::command]
pub fn order_stats(
    app: AppHandle,
    query: String,
    status: Option<PaymentStatus>,
) -> Result<OrderStats, String> {
    let orders = app.store().orders().map_err(|e| e.to_string())?;
    Ok(stats_for(&filter_orders(orders, &query, status)))
}

/// Orders are written once at bill-generation time and never edited, so all
/// derived amounts are computed here and nowhere else.
pub fn create_order_record(
    store: &Store,
    order: CreateOrder,
    now: DateTime<Local>,
) -> Result<Order, String> {
    if order.items.is_empty() {
        return Err("Order must contain at least one item".to_string());
    }
    for item in &order.items {
        if item.clothing_type.trim().is_empty() {
            return Err("Clothing type is required for every item".to_string());
        }
        if item.quantity == 0 {
            return Err("Item quantity must be at least 1".to_string());
        }
        if item.price < 0.0 {
            return Err("Item price cannot be negative".to_string());
        }
    }
    if order.extra_charges < 0.0 || order.material_charges < 0.0 || order.discount < 0.0 {
        return Err("Charges and discount cannot be negative".to_string());
    }

    let customers = store.customers().map_err(|e| e.to_string())?;
    let customer = customers
        .iter()
        .find(|c| c.id == order.customer_id)
        .ok_or_else(|| format!("Customer {} not found", order.customer_id))?;

    let items = ident::build_order_items(&order.items);
    let subtotal = ident::subtotal(&items);
    let total = ident::order_total(
        subtotal,
        order.extra_charges,
        order.material_charges,
        order.discount,
    );

    let record = Order {
        id: ident::generate_order_id(now),
        customer_id: customer.id.clone(),
        customer_name: customer.name.clone(),
        items,
        subtotal,
        extra_charges: order.extra_charges,
        material_charges: order.material_charges,
        discount: order.discount,
        total,
        payment_status: order.payment_status,
        delivery_date: order.delivery_date,
        created_at: now.to_rfc3339(),
    };

    let mut orders = store.orders().map_err(|e| e.to_string())?;
    orders.push(record.clone());
    store.save_orders(&orders).map_err(|e| e.to_string())?;

    log::info!("created order {} for customer {}", record.id, record.customer_id);
    Ok(record)
}

/// Order-history filter: substring match on order ID or customer name,
/// optionally narrowed to one payment status.
pub fn filter_orders(
    orders: Vec<Order>,
    query: &str,
    status: Option<PaymentStatus>,
) -> Vec<Order> {
    let needle = query.to_lowercase();
    orders
        .into_iter()
        .filter(|o| {
            let matches_search = needle.is_empty()
                || o.id.to_lowercase().contains(&needle)
                || o.customer_name.to_lowercase().contains(&needle);
            let matches_status = status.map_or(true, |s| o.payment_status == s);
            matches_search && matches_status
        })
        .collect()
}

pub fn stats_for(orders: &[Order]) -> OrderStats {
    OrderStats {
        order_count: orders.len(),
        total_revenue: orders.iter().map(|o| o.total).sum(),
        paid_count: orders
            .iter()
            .filter(|o| o.payment_status == PaymentStatus::Paid)
            .count(),
        pending_amount: orders
            .iter()
            .filter(|o| o.payment_status == PaymentStatus::Pending)
            .map(|o| o.total)
            .sum(),
    }
}
