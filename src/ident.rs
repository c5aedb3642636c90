//! Identity generation and derived-amount rules.
//!
//! Everything here is a pure function of its inputs; callers pass the
//! current date/time in so the rules stay testable against fixed clocks.

use chrono::{DateTime, Local, NaiveDate};

use crate::models::{CreateOrderItem, Order, OrderItem};

/// Customer IDs are `YYYYMMDD-NNN`: today's local date plus a 1-based
/// sequence over customers already created today. The sequence is padded
/// to three digits; past 999 in one day it simply widens (`-1000`), it is
/// never truncated. Relies on the single-writer assumption, no lock.
pub fn generate_customer_id<'a, I>(existing_ids: I, today: NaiveDate) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let date_str = today.format("%Y%m%d").to_string();
    let today_count = existing_ids
        .into_iter()
        .filter(|id| id.starts_with(&date_str))
        .count();
    format!("{}-{:03}", date_str, today_count + 1)
}

/// `ORD-<epoch-millis>`. Two orders in the same millisecond would collide;
/// accepted as negligible for a single-operator shop.
pub fn generate_order_id(now: DateTime<Local>) -> String {
    format!("ORD-{}", now.timestamp_millis())
}

pub fn build_order_items(items: &[CreateOrderItem]) -> Vec<OrderItem> {
    items
        .iter()
        .map(|item| OrderItem {
            clothing_type: item.clothing_type.clone(),
            quantity: item.quantity,
            price: item.price,
            total: item.quantity as f64 * item.price,
        })
        .collect()
}

pub fn subtotal(items: &[OrderItem]) -> f64 {
    items.iter().map(|item| item.total).sum()
}

/// `total = subtotal + extraCharges + materialCharges - discount`.
/// A discount larger than the rest goes negative; that is allowed through.
pub fn order_total(subtotal: f64, extra_charges: f64, material_charges: f64, discount: f64) -> f64 {
    subtotal + extra_charges + material_charges - discount
}

pub fn verify_order_totals(order: &Order) -> bool {
    let sub = subtotal(&order.items);
    (order.subtotal - sub).abs() < 1e-9
        && (order.total
            - order_total(
                sub,
                order.extra_charges,
                order.material_charges,
                order.discount,
            ))
        .abs()
            < 1e-9
}

/// Login is valid for the rest of the calendar day it happened on.
pub fn auth_day(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d").to_string()
}

pub fn is_authenticated(stored_day: Option<&str>, today: &str) -> bool {
    stored_day == Some(today)
}
