use std::path::PathBuf;
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tauri::AppHandle;
use thiserror::Error;

use crate::models::{Customer, Measurement, Order, ShopSettings};

/// Fixed collection keys. These are part of the on-disk contract and must
/// not change: backup files and existing databases reference them.
pub const CUSTOMERS_KEY: &str = "tailor_customers";
pub const MEASUREMENTS_KEY: &str = "tailor_measurements";
pub const ORDERS_KEY: &str = "tailor_orders";
pub const SETTINGS_KEY: &str = "tailor_settings";
pub const AUTH_KEY: &str = "tailor_auth";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("corrupt data under '{key}': {source}")]
    Corrupt {
        key: String,
        source: serde_json::Error,
    },
    #[error("store lock poisoned")]
    Poisoned,
}

/// Key/value persistence over a single SQLite table. Each collection is
/// stored whole as one JSON document; every mutation is a read-whole,
/// modify, write-whole cycle driven by the caller. Single writer assumed.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    pub fn open(app_handle: &AppHandle) -> Result<Self, StoreError> {
        use tauri::Manager;

        let app_dir = app_handle
            .path()
            .app_data_dir()
            .expect("Failed to get app data dir");

        std::fs::create_dir_all(&app_dir).expect("Failed to create app data directory");

        let db_path: PathBuf = app_dir.join("tailor_desk.db");
        let conn = Connection::open(db_path)?;
        let store = Store {
            conn: Mutex::new(conn),
        };
        store.initialize()?;
        Ok(store)
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let store = Store {
            conn: Mutex::new(Connection::open_in_memory()?),
        };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, value],
        )?;
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<(), StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    /// Never-written collections read back as empty.
    fn get_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.get_raw(key)? {
            Some(json) => serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrites the entire collection.
    fn set_collection<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        self.set_raw(key, &json)
    }

    pub fn customers(&self) -> Result<Vec<Customer>, StoreError> {
        self.get_collection(CUSTOMERS_KEY)
    }

    pub fn save_customers(&self, customers: &[Customer]) -> Result<(), StoreError> {
        self.set_collection(CUSTOMERS_KEY, customers)
    }

    pub fn measurements(&self) -> Result<Vec<Measurement>, StoreError> {
        self.get_collection(MEASUREMENTS_KEY)
    }

    pub fn save_measurements(&self, measurements: &[Measurement]) -> Result<(), StoreError> {
        self.set_collection(MEASUREMENTS_KEY, measurements)
    }

    pub fn orders(&self) -> Result<Vec<Order>, StoreError> {
        self.get_collection(ORDERS_KEY)
    }

    pub fn save_orders(&self, orders: &[Order]) -> Result<(), StoreError> {
        self.set_collection(ORDERS_KEY, orders)
    }

    /// Falls back to the fixed shop defaults when nothing has been saved yet.
    /// The defaults are observable contract (first-run behavior and backups).
    pub fn settings(&self) -> Result<ShopSettings, StoreError> {
        match self.get_raw(SETTINGS_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
                key: SETTINGS_KEY.to_string(),
                source,
            }),
            None => Ok(ShopSettings::default()),
        }
    }

    pub fn save_settings(&self, settings: &ShopSettings) -> Result<(), StoreError> {
        let json = serde_json::to_string(settings).map_err(|source| StoreError::Corrupt {
            key: SETTINGS_KEY.to_string(),
            source,
        })?;
        self.set_raw(SETTINGS_KEY, &json)
    }

    /// The login flag is just the local date string recorded at login.
    pub fn auth_date(&self) -> Result<Option<String>, StoreError> {
        self.get_raw(AUTH_KEY)
    }

    pub fn set_auth_date(&self, date: &str) -> Result<(), StoreError> {
        self.set_raw(AUTH_KEY, date)
    }

    pub fn clear_auth(&self) -> Result<(), StoreError> {
        self.remove_raw(AUTH_KEY)
    }
}

pub trait StoreExt {
    fn store(&self) -> &Store;
}

impl StoreExt for AppHandle {
    fn store(&self) -> &Store {
        use tauri::Manager;
        self.state::<Store>().inner()
    }
}
