//! Integration tests for store operations and derivation rules.
//! These run against an in-memory store so nothing touches disk except
//! the backup round-trip tests, which use a temp directory.

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone};

    use crate::commands::{auth, backup, bill, customers, measurements, orders};
    use crate::ident;
    use crate::models::{
        CreateCustomer, CreateOrder, CreateOrderItem, Gender, Measurement, PaymentStatus,
        ShopSettings,
    };
    use crate::store::Store;

    fn setup_store() -> Store {
        Store::open_in_memory().expect("Failed to create in-memory store")
    }

    fn jan15() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap()
    }

    fn jan16() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 16, 9, 30, 0).unwrap()
    }

    fn sample_customer() -> CreateCustomer {
        CreateCustomer {
            name: "Anita Rao".to_string(),
            phone: "9876543210".to_string(),
            address: "12 Market Street".to_string(),
            gender: Gender::Ladies,
            age: 32,
        }
    }

    fn sample_order(customer_id: &str) -> CreateOrder {
        CreateOrder {
            customer_id: customer_id.to_string(),
            items: vec![
                CreateOrderItem {
                    clothing_type: "Shirt".to_string(),
                    quantity: 2,
                    price: 500.0,
                },
                CreateOrderItem {
                    clothing_type: "Blouse".to_string(),
                    quantity: 1,
                    price: 600.0,
                },
            ],
            extra_charges: 100.0,
            material_charges: 50.0,
            discount: 200.0,
            payment_status: PaymentStatus::Pending,
            delivery_date: "2025-01-25".to_string(),
        }
    }

    // ===== CUSTOMER ID TESTS =====

    #[test]
    fn test_customer_ids_sequence_within_day() {
        let store = setup_store();

        let first = customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();
        let second = customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();
        let third = customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();

        assert_eq!(first.id, "20250115-001");
        assert_eq!(second.id, "20250115-002");
        assert_eq!(third.id, "20250115-003");
    }

    #[test]
    fn test_customer_id_sequence_resets_next_day() {
        let store = setup_store();

        customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();
        let next_day = customers::create_customer_record(&store, sample_customer(), jan16()).unwrap();

        assert_eq!(next_day.id, "20250116-001");
    }

    #[test]
    fn test_customer_id_widens_past_999() {
        let date = jan15().date_naive();
        let ids: Vec<String> = (1..=999).map(|n| format!("20250115-{:03}", n)).collect();

        let id = ident::generate_customer_id(ids.iter().map(|s| s.as_str()), date);
        assert_eq!(id, "20250115-1000", "Sequence must widen, not truncate");
    }

    #[test]
    fn test_create_customer_validation_rejects_and_writes_nothing() {
        let store = setup_store();

        let mut no_name = sample_customer();
        no_name.name = "  ".to_string();
        assert!(customers::create_customer_record(&store, no_name, jan15()).is_err());

        let mut zero_age = sample_customer();
        zero_age.age = 0;
        assert!(customers::create_customer_record(&store, zero_age, jan15()).is_err());

        assert!(store.customers().unwrap().is_empty(), "No partial writes");
    }

    #[test]
    fn test_search_customers_matches_name_phone_id_address() {
        let store = setup_store();
        let created = customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();

        let all = store.customers().unwrap();
        assert_eq!(customers::filter_customers(all.clone(), "anita").len(), 1);
        assert_eq!(customers::filter_customers(all.clone(), "98765").len(), 1);
        assert_eq!(customers::filter_customers(all.clone(), &created.id).len(), 1);
        assert_eq!(customers::filter_customers(all.clone(), "market").len(), 1);
        assert_eq!(customers::filter_customers(all, "nobody").len(), 0);
    }

    // ===== ORDER TESTS =====

    #[test]
    fn test_order_totals_follow_derivation_formula() {
        let store = setup_store();
        let customer = customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();

        let order = orders::create_order_record(&store, sample_order(&customer.id), jan15()).unwrap();

        assert!((order.items[0].total - 1000.0).abs() < 0.01);
        assert!((order.items[1].total - 600.0).abs() < 0.01);
        assert!((order.subtotal - 1600.0).abs() < 0.01);
        // 1600 + 100 + 50 - 200
        assert!((order.total - 1550.0).abs() < 0.01);
        assert!(ident::verify_order_totals(&order));
    }

    #[test]
    fn test_order_totals_with_zero_charges() {
        let store = setup_store();
        let customer = customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();

        let mut input = sample_order(&customer.id);
        input.extra_charges = 0.0;
        input.material_charges = 0.0;
        input.discount = 0.0;

        let order = orders::create_order_record(&store, input, jan15()).unwrap();
        assert!((order.total - order.subtotal).abs() < 0.01);
    }

    #[test]
    fn test_discount_exceeding_subtotal_goes_negative() {
        let store = setup_store();
        let customer = customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();

        let mut input = sample_order(&customer.id);
        input.extra_charges = 0.0;
        input.material_charges = 0.0;
        input.discount = 2000.0;

        let order = orders::create_order_record(&store, input, jan15()).unwrap();
        assert!((order.total - (-400.0)).abs() < 0.01, "Negative totals pass through");
    }

    #[test]
    fn test_order_id_format() {
        let now = jan15();
        let id = ident::generate_order_id(now);
        assert_eq!(id, format!("ORD-{}", now.timestamp_millis()));
    }

    #[test]
    fn test_order_snapshots_customer_name() {
        let store = setup_store();
        let customer = customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();

        let order = orders::create_order_record(&store, sample_order(&customer.id), jan15()).unwrap();
        assert_eq!(order.customer_name, "Anita Rao");
        assert_eq!(order.customer_id, customer.id);
    }

    #[test]
    fn test_create_order_validation() {
        let store = setup_store();
        let customer = customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();

        let mut empty = sample_order(&customer.id);
        empty.items.clear();
        assert!(orders::create_order_record(&store, empty, jan15()).is_err());

        let mut zero_qty = sample_order(&customer.id);
        zero_qty.items[0].quantity = 0;
        assert!(orders::create_order_record(&store, zero_qty, jan15()).is_err());

        let mut negative = sample_order(&customer.id);
        negative.discount = -5.0;
        assert!(orders::create_order_record(&store, negative, jan15()).is_err());

        let unknown = sample_order("20990101-001");
        assert!(orders::create_order_record(&store, unknown, jan15()).is_err());

        assert!(store.orders().unwrap().is_empty(), "No partial writes");
    }

    #[test]
    fn test_order_filter_and_stats() {
        let store = setup_store();
        let customer = customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();

        let mut paid = sample_order(&customer.id);
        paid.payment_status = PaymentStatus::Paid;
        orders::create_order_record(&store, paid, jan15()).unwrap();
        orders::create_order_record(&store, sample_order(&customer.id), jan16()).unwrap();

        let all = store.orders().unwrap();
        assert_eq!(all.len(), 2);

        let by_name = orders::filter_orders(all.clone(), "anita", None);
        assert_eq!(by_name.len(), 2);

        let pending_only = orders::filter_orders(all.clone(), "", Some(PaymentStatus::Pending));
        assert_eq!(pending_only.len(), 1);

        let stats = orders::stats_for(&all);
        assert_eq!(stats.order_count, 2);
        assert_eq!(stats.paid_count, 1);
        assert!((stats.total_revenue - 3100.0).abs() < 0.01);
        assert!((stats.pending_amount - 1550.0).abs() < 0.01);
    }

    // ===== MEASUREMENT TESTS =====

    #[test]
    fn test_save_measurement_upserts_instead_of_appending() {
        let store = setup_store();

        let first = Measurement {
            customer_id: "20250115-001".to_string(),
            chest: Some(38.0),
            waist: Some(32.0),
            ..Default::default()
        };
        let saved = measurements::upsert_measurement(&store, first, jan15()).unwrap();
        assert_eq!(store.measurements().unwrap().len(), 1);

        let replacement = Measurement {
            customer_id: "20250115-001".to_string(),
            chest: Some(39.5),
            ..Default::default()
        };
        let updated = measurements::upsert_measurement(&store, replacement, jan16()).unwrap();

        let stored = store.measurements().unwrap();
        assert_eq!(stored.len(), 1, "Replace, never duplicate");
        assert_eq!(stored[0].chest, Some(39.5));
        assert_eq!(stored[0].waist, None, "New sheet wins wholesale");
        assert_eq!(updated.created_at, saved.created_at, "Original created_at kept");
        assert_ne!(updated.updated_at, saved.updated_at);
    }

    #[test]
    fn test_measurements_for_different_customers_coexist() {
        let store = setup_store();

        for id in ["20250115-001", "20250115-002"] {
            let m = Measurement {
                customer_id: id.to_string(),
                height: Some(120.0),
                ..Default::default()
            };
            measurements::upsert_measurement(&store, m, jan15()).unwrap();
        }

        assert_eq!(store.measurements().unwrap().len(), 2);
    }

    // ===== SETTINGS TESTS =====

    #[test]
    fn test_default_settings_contract() {
        let store = setup_store();
        let settings = store.settings().unwrap();

        assert_eq!(settings.name, "Your Tailoring Shop");
        assert_eq!(settings.address, "Shop Address");
        assert_eq!(settings.phone, "+1234567890");
        assert_eq!(settings.pin, "1234");
        assert_eq!(settings.logo, None);

        assert_eq!(settings.price_list.len(), 7);
        let expected = [
            ("Shirt", 500.0),
            ("Pant", 400.0),
            ("Blouse", 600.0),
            ("Kurti", 800.0),
            ("Lehenga", 2000.0),
            ("Frock", 700.0),
            ("Suit", 1200.0),
        ];
        for (name, price) in expected {
            assert_eq!(settings.price_list.get(name), Some(&price), "{}", name);
        }
    }

    #[test]
    fn test_settings_round_trip() {
        let store = setup_store();

        let mut settings = ShopSettings::default();
        settings.name = "Vasanthi Maggam Works".to_string();
        settings.pin = "9999".to_string();
        settings.price_list.insert("Saree Fall".to_string(), 150.0);

        store.save_settings(&settings).unwrap();
        assert_eq!(store.settings().unwrap(), settings);
    }

    // ===== AUTH TESTS =====

    #[test]
    fn test_login_with_wrong_pin_rejected() {
        let store = setup_store();

        assert!(!auth::login_with_pin(&store, "0000", jan15()).unwrap());
        assert!(!auth::is_authenticated_now(&store, jan15()).unwrap());
    }

    #[test]
    fn test_login_valid_for_rest_of_day_only() {
        let store = setup_store();

        assert!(auth::login_with_pin(&store, "1234", jan15()).unwrap());
        assert!(auth::is_authenticated_now(&store, jan15()).unwrap());

        // Date rollover invalidates the flag implicitly
        assert!(!auth::is_authenticated_now(&store, jan16()).unwrap());
    }

    #[test]
    fn test_logout_clears_auth() {
        let store = setup_store();

        auth::login_with_pin(&store, "1234", jan15()).unwrap();
        store.clear_auth().unwrap();
        assert!(!auth::is_authenticated_now(&store, jan15()).unwrap());
    }

    #[test]
    fn test_login_uses_saved_pin() {
        let store = setup_store();

        let mut settings = ShopSettings::default();
        settings.pin = "4321".to_string();
        store.save_settings(&settings).unwrap();

        assert!(!auth::login_with_pin(&store, "1234", jan15()).unwrap());
        assert!(auth::login_with_pin(&store, "4321", jan15()).unwrap());
    }

    // ===== BACKUP TESTS =====

    #[test]
    fn test_backup_round_trip_reproduces_collections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup.json");

        let store = setup_store();
        let customer = customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();
        measurements::upsert_measurement(
            &store,
            Measurement {
                customer_id: customer.id.clone(),
                bust: Some(36.0),
                extra_notes: Some("prefers loose fit".to_string()),
                ..Default::default()
            },
            jan15(),
        )
        .unwrap();
        orders::create_order_record(&store, sample_order(&customer.id), jan15()).unwrap();

        let mut settings = ShopSettings::default();
        settings.name = "Vasanthi Maggam Works".to_string();
        store.save_settings(&settings).unwrap();

        backup::export_to_path(&store, &path).unwrap();

        let fresh = setup_store();
        backup::import_from_path(&fresh, &path).unwrap();

        assert_eq!(fresh.customers().unwrap(), store.customers().unwrap());
        assert_eq!(fresh.measurements().unwrap(), store.measurements().unwrap());
        assert_eq!(fresh.orders().unwrap(), store.orders().unwrap());
        assert_eq!(fresh.settings().unwrap(), store.settings().unwrap());
    }

    #[test]
    fn test_backup_file_carries_export_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup.json");

        let store = setup_store();
        backup::export_to_path(&store, &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(json.get("exportDate").is_some());
        assert!(json.get("customers").is_some());
    }

    #[test]
    fn test_malformed_backup_aborts_and_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json at all {{{").unwrap();

        let store = setup_store();
        customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();

        let result = backup::import_from_path(&store, &path);
        assert!(result.is_err());
        assert_eq!(store.customers().unwrap().len(), 1, "Existing data untouched");
    }

    #[test]
    fn test_partial_backup_replaces_only_present_collections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(
            &path,
            r#"{"customers": [], "exportDate": "2025-01-15T00:00:00Z"}"#,
        )
        .unwrap();

        let store = setup_store();
        let customer = customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();
        orders::create_order_record(&store, sample_order(&customer.id), jan15()).unwrap();

        backup::import_from_path(&store, &path).unwrap();

        assert!(store.customers().unwrap().is_empty(), "Customers replaced");
        assert_eq!(store.orders().unwrap().len(), 1, "Orders left alone");
    }

    // ===== BILL RENDERING TESTS =====

    #[test]
    fn test_render_bill_contains_order_and_shop_details() {
        let store = setup_store();
        let customer = customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();

        let mut input = sample_order(&customer.id);
        input.payment_status = PaymentStatus::Paid;
        let order = orders::create_order_record(&store, input, jan15()).unwrap();

        let html = bill::render_bill_html(&store, &order.id).unwrap();
        assert!(html.contains("Your Tailoring Shop"));
        assert!(html.contains(&order.id));
        assert!(html.contains("Anita Rao"));
        assert!(html.contains("Shirt"));
        assert!(html.contains("₹1550"));
        assert!(html.contains("PAID"));
    }

    #[test]
    fn test_render_bill_omits_paid_stamp_when_pending() {
        let store = setup_store();
        let customer = customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();
        let order = orders::create_order_record(&store, sample_order(&customer.id), jan15()).unwrap();

        let html = bill::render_bill_html(&store, &order.id).unwrap();
        assert!(!html.contains("paid-stamp\">PAID"));
        assert!(html.contains("Pending"));
    }

    #[test]
    fn test_render_bill_unknown_order_errors() {
        let store = setup_store();
        assert!(bill::render_bill_html(&store, "ORD-0").is_err());
    }

    // ===== STORE CONTRACT TESTS =====

    #[test]
    fn test_unwritten_collections_read_back_empty() {
        let store = setup_store();
        assert!(store.customers().unwrap().is_empty());
        assert!(store.measurements().unwrap().is_empty());
        assert!(store.orders().unwrap().is_empty());
        assert!(store.auth_date().unwrap().is_none());
    }

    #[test]
    fn test_set_collection_overwrites_whole_collection() {
        let store = setup_store();

        customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();
        customers::create_customer_record(&store, sample_customer(), jan15()).unwrap();
        assert_eq!(store.customers().unwrap().len(), 2);

        store.save_customers(&[]).unwrap();
        assert!(store.customers().unwrap().is_empty());
    }
}
