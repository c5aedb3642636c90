use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Wire form is camelCase so exported backup files stay interchangeable
/// with backups taken from earlier versions of the app.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub gender: Gender,
    pub age: u32,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Gents,
    Ladies,
    Kids,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub gender: Gender,
    pub age: u32,
}

/// One measurement sheet per customer. Fields are grouped by garment
/// category but nothing stops any field being filled for any customer;
/// absence means "not yet measured".
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub customer_id: String,
    // Gents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoulder_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleeve_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shirt_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pant_waist: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pant_length: Option<f64>,
    // Ladies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bust: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blouse_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lehenga_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kurti_length: Option<f64>,
    // Kids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dress_length: Option<f64>,
    // Common
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    /// Snapshot at billing time; not kept in sync with the customer record.
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub extra_charges: f64,
    pub material_charges: f64,
    pub discount: f64,
    pub total: f64,
    pub payment_status: PaymentStatus,
    pub delivery_date: String,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub clothing_type: String,
    pub quantity: u32,
    pub price: f64,
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItem {
    pub clothing_type: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub customer_id: String,
    pub items: Vec<CreateOrderItem>,
    pub extra_charges: f64,
    pub material_charges: f64,
    pub discount: f64,
    pub payment_status: PaymentStatus,
    pub delivery_date: String,
}

/// Summary block for the order history screen.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub order_count: usize,
    pub total_revenue: f64,
    pub paid_count: usize,
    pub pending_amount: f64,
}

/// Singleton shop configuration, replaced wholesale on save.
/// BTreeMap keeps the price list in a stable order on disk.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopSettings {
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub price_list: BTreeMap<String, f64>,
    pub pin: String,
}

impl Default for ShopSettings {
    fn default() -> Self {
        let price_list = [
            ("Shirt", 500.0),
            ("Pant", 400.0),
            ("Blouse", 600.0),
            ("Kurti", 800.0),
            ("Lehenga", 2000.0),
            ("Frock", 700.0),
            ("Suit", 1200.0),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        ShopSettings {
            name: "Your Tailoring Shop".to_string(),
            address: "Shop Address".to_string(),
            phone: "+1234567890".to_string(),
            logo: None,
            price_list,
            pin: "1234".to_string(),
        }
    }
}

/// Full-snapshot backup file: all four collections plus the export timestamp.
/// Missing collections are skipped on import (last write wins per collection).
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customers: Option<Vec<Customer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Vec<Measurement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Order>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ShopSettings>,
    pub export_date: String,
}
