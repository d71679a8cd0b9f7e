#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use lounge_store::models::{DeviceCategory, NewDeviceConfig};
use lounge_store::storage::{create_storage, Storage};
use lounge_store::LocalRecordStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    // Unique app id per run to avoid clashing with earlier runs
    let app_id = format!("test_{}", js_sys::Date::now());
    let storage = create_storage(&app_id);

    storage.write("bookings", "[]").expect("Failed to write");
    assert_eq!(storage.read("bookings").unwrap().as_deref(), Some("[]"));
    assert!(storage.get_path("bookings").starts_with("localStorage::lounge_test_"));

    storage.remove("bookings").expect("Failed to remove");
    assert_eq!(storage.read("bookings").unwrap(), None);
}

#[wasm_bindgen_test]
fn test_store_persists_in_local_storage() {
    let app_id = format!("test_store_{}", js_sys::Date::now());

    {
        let store = LocalRecordStore::open(create_storage(&app_id)).expect("Failed to open store");
        assert_eq!(store.bookings().get_all().len(), 1);
        store
            .device_configs()
            .save(NewDeviceConfig::numbered(DeviceCategory::Ps5, 2))
            .expect("Failed to save");
    }

    let reopened = LocalRecordStore::open(create_storage(&app_id)).expect("Failed to reopen");
    let ps5 = reopened
        .device_configs()
        .get_by_category(DeviceCategory::Ps5)
        .unwrap();
    assert_eq!(ps5.seats, vec!["PS5 1", "PS5 2"]);

    reopened.clear_all_data().unwrap();
}
