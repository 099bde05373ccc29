use chrono::NaiveDate;
use tempfile::tempdir;

use farm_model::{Customer, SenderProfile};
use farm_store::{CUSTOMERS_FILE, CsvStore, StoreError};

fn customer(name: &str, phone: &str, qty: u32) -> Customer {
    Customer::new(name, phone, "제주시", qty, "").expect("build customer")
}

#[test]
fn round_trips_all_three_tables() {
    let dir = tempdir().expect("temp dir");
    let mut store = CsvStore::open(dir.path()).expect("open");
    store.add_customer(customer("홍길동", "010-1111-2222", 2)).expect("add");
    store.set_sender(SenderProfile {
        name: "우리농장".to_string(),
        phone: "010-9999-8888".to_string(),
        addr: "제주 서귀포".to_string(),
    });
    store.close_orders(NaiveDate::from_ymd_opt(2026, 8, 23).expect("date"));
    store.save().expect("save");

    let reloaded = CsvStore::open(dir.path()).expect("reopen");
    assert_eq!(reloaded.customers().len(), 1);
    assert_eq!(reloaded.customers()[0].name, "홍길동");
    assert!(!reloaded.customers()[0].ordered);
    assert_eq!(reloaded.history().len(), 1);
    assert_eq!(reloaded.history()[0].qty, 2);
    assert_eq!(reloaded.sender().name, "우리농장");
}

#[test]
fn missing_files_read_as_empty_state_with_default_sender() {
    let dir = tempdir().expect("temp dir");
    let store = CsvStore::open(dir.path()).expect("open");
    assert!(store.customers().is_empty());
    assert!(store.history().is_empty());
    assert_eq!(store.sender(), &SenderProfile::default());
}

#[test]
fn merge_suppresses_existing_name_phone_pairs() {
    let dir = tempdir().expect("temp dir");
    let mut store = CsvStore::open(dir.path()).expect("open");
    store.add_customer(customer("홍길동", "010-1111-2222", 0)).expect("add");

    let outcome = store.append_customers(vec![
        customer("홍길동", "010-1111-2222", 2),
        customer("홍길동", "010-7777-0000", 1),
        customer("김영희", "010-3333-4444", 1),
        customer("김영희", "010-3333-4444", 5),
    ]);
    assert_eq!(outcome.added, 2);
    assert_eq!(outcome.skipped, 2);
    assert_eq!(store.customers().len(), 3);
}

#[test]
fn duplicate_manual_add_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let mut store = CsvStore::open(dir.path()).expect("open");
    store.add_customer(customer("홍길동", "010-1111-2222", 0)).expect("add");
    let err = store.add_customer(customer("홍길동", "010-1111-2222", 1)).unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { .. }));
}

#[test]
fn order_state_rules_keep_checkbox_and_qty_consistent() {
    let dir = tempdir().expect("temp dir");
    let mut store = CsvStore::open(dir.path()).expect("open");
    store.add_customer(customer("홍길동", "010-1111-2222", 0)).expect("add");
    let id = store.find_customer("홍길동", None).expect("find");

    // Checking an order with zero qty bumps it to one.
    store.mark_ordered(id, true).expect("mark");
    assert_eq!(store.customers()[0].qty, 1);
    assert!(store.customers()[0].ordered);

    // Unchecking zeroes the qty.
    store.mark_ordered(id, false).expect("mark");
    assert_eq!(store.customers()[0].qty, 0);

    // A positive qty marks the order, zero clears it.
    store.set_order(id, 3).expect("set");
    assert!(store.customers()[0].ordered);
    store.set_order(id, 0).expect("set");
    assert!(!store.customers()[0].ordered);
}

#[test]
fn close_moves_active_orders_into_history_and_resets() {
    let dir = tempdir().expect("temp dir");
    let mut store = CsvStore::open(dir.path()).expect("open");
    store.add_customer(customer("홍길동", "010-1111-2222", 2)).expect("add");
    store.add_customer(customer("김영희", "010-3333-4444", 0)).expect("add");

    let date = NaiveDate::from_ymd_opt(2026, 8, 23).expect("date");
    assert_eq!(store.close_orders(date), 1);
    assert_eq!(store.history().len(), 1);
    assert_eq!(store.history()[0].name, "홍길동");
    assert_eq!(store.history()[0].date, date);
    assert!(store.active_orders().is_empty());
}

#[test]
fn ambiguous_name_requires_phone() {
    let dir = tempdir().expect("temp dir");
    let mut store = CsvStore::open(dir.path()).expect("open");
    store.add_customer(customer("홍길동", "010-1111-2222", 0)).expect("add");
    store.add_customer(customer("홍길동", "010-7777-0000", 0)).expect("add");

    assert!(matches!(
        store.find_customer("홍길동", None),
        Err(StoreError::AmbiguousCustomer(_))
    ));
    assert!(store.find_customer("홍길동", Some("010-7777-0000")).is_ok());
    assert!(matches!(
        store.find_customer("없는사람", None),
        Err(StoreError::UnknownCustomer(_))
    ));
}

#[test]
fn corrupt_customer_rows_surface_as_errors_on_open() {
    let dir = tempdir().expect("temp dir");
    // Well-formed header, but qty is not a number.
    std::fs::write(
        dir.path().join(CUSTOMERS_FILE),
        "id,ordered,name,phone,address,qty,memo,sender_name,sender_phone,sender_addr\n\
         3fa85f64-5717-4562-b3fc-2c963f66afa6,true,홍길동,010-1111-2222,제주시,많이,,,,\n",
    )
    .expect("write corrupt file");

    let err = CsvStore::open(dir.path()).unwrap_err();
    assert!(matches!(err, StoreError::Csv(_)));
}

#[test]
fn truncated_customer_rows_surface_as_errors_on_open() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join(CUSTOMERS_FILE),
        "id,ordered,name,phone,address,qty,memo,sender_name,sender_phone,sender_addr\n\
         3fa85f64-5717-4562-b3fc-2c963f66afa6,true,홍길동\n",
    )
    .expect("write corrupt file");

    let err = CsvStore::open(dir.path()).unwrap_err();
    assert!(matches!(err, StoreError::Csv(_)));
}

#[test]
fn second_save_leaves_a_backup_of_the_previous_version() {
    let dir = tempdir().expect("temp dir");
    let mut store = CsvStore::open(dir.path()).expect("open");
    store.add_customer(customer("홍길동", "010-1111-2222", 0)).expect("add");
    store.save().expect("first save");
    store.add_customer(customer("김영희", "010-3333-4444", 0)).expect("add");
    store.save().expect("second save");

    let backup = dir.path().join(format!("{CUSTOMERS_FILE}.bak"));
    assert!(backup.exists());
    let previous = std::fs::read_to_string(&backup).expect("read backup");
    assert!(previous.contains("홍길동"));
    assert!(!previous.contains("김영희"));
}

#[test]
fn customers_are_sorted_by_name_on_save() {
    let dir = tempdir().expect("temp dir");
    let mut store = CsvStore::open(dir.path()).expect("open");
    store.add_customer(customer("다람쥐", "1", 0)).expect("add");
    store.add_customer(customer("가나다", "2", 0)).expect("add");
    store.save().expect("save");
    let names: Vec<&str> = store.customers().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["가나다", "다람쥐"]);
}
