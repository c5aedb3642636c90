use chrono::{DateTime, Local};
use tauri::AppHandle;

use crate::ident;
use crate::models::{CreateCustomer, Customer};
use crate::store::{Store, StoreExt};

#[tauri::command]
pub fn get_customers(app: AppHandle) -> Result<Vec<Customer>, String> {
    app.store().customers().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn create_customer(app: AppHandle, customer: CreateCustomer) -> Result<Customer, String> {
    create_customer_record(app.store(), customer, Local::now())
}

#[tauri::command]
pub fn search_customers(app: AppHandle, query: String) -> Result<Vec<Customer>, String> {
    let customers = app.store().customers().map_err(|e| e.to_string())?;
    Ok(filter_customers(customers, &query))
}

pub fn create_customer_record(
    store: &Store,
    customer: CreateCustomer,
    now: DateTime<Local>,
) -> Result<Customer, String> {
    if customer.name.trim().is_empty() {
        return Err("Customer name is required".to_string());
    }
    if customer.phone.trim().is_empty() {
        return Err("Phone number is required".to_string());
    }
    if customer.address.trim().is_empty() {
        return Err("Address is required".to_string());
    }
    if customer.age == 0 {
        return Err("Age must be a positive number".to_string());
    }

    let mut customers = store.customers().map_err(|e| e.to_string())?;
    let id = ident::generate_customer_id(
        customers.iter().map(|c| c.id.as_str()),
        now.date_naive(),
    );

    let record = Customer {
        id,
        name: customer.name,
        phone: customer.phone,
        address: customer.address,
        gender: customer.gender,
        age: customer.age,
        created_at: now.to_rfc3339(),
    };

    customers.push(record.clone());
    store.save_customers(&customers).map_err(|e| e.to_string())?;

    log::info!("created customer {}", record.id);
    Ok(record)
}

/// Name and address match case-insensitively; phone and ID match as typed.
pub fn filter_customers(customers: Vec<Customer>, query: &str) -> Vec<Customer> {
    if query.is_empty() {
        return customers;
    }
    let needle = query.to_lowercase();
    customers
        .into_iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.phone.contains(query)
                || c.id.contains(query)
                || c.address.to_lowercase().contains(&needle)
        })
        .collect()
}
