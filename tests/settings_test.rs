use std::collections::HashSet;

use lounge_store::models::{
    DeviceCategory, NewDeviceConfig, NewHappyHoursConfig, NewHappyHoursPricing, NewPricingConfig,
    PricingConfig,
};
use lounge_store::storage::MemoryStorage;
use lounge_store::LocalRecordStore;

use DeviceCategory::{Pc, Ps5};

fn empty_store() -> LocalRecordStore {
    LocalRecordStore::new(Box::new(MemoryStorage::new()))
}

fn serialized(rows: &[PricingConfig]) -> Vec<String> {
    rows.iter()
        .map(|r| serde_json::to_string(r).unwrap())
        .collect()
}

#[test]
fn test_device_config_new_category_appends() {
    let store = empty_store();

    let pc = store.device_configs().save(NewDeviceConfig::numbered(Pc, 10)).unwrap();
    assert_eq!(store.device_configs().get_all().len(), 1);

    let ps5 = store.device_configs().save(NewDeviceConfig::numbered(Ps5, 4)).unwrap();
    assert_eq!(store.device_configs().get_all().len(), 2);
    assert_ne!(pc.id, ps5.id);
    assert_eq!(store.device_configs().get_by_category(Ps5), Some(ps5));
}

#[test]
fn test_device_config_existing_category_updates_in_place() {
    let store = empty_store();
    let original = store.device_configs().save(NewDeviceConfig::numbered(Pc, 10)).unwrap();
    store.device_configs().save(NewDeviceConfig::numbered(Ps5, 4)).unwrap();

    let resized = store
        .device_configs()
        .save(NewDeviceConfig {
            category: Pc,
            count: 2,
            seats: vec!["PC-A".to_string(), "PC-B".to_string()],
        })
        .unwrap();

    assert_eq!(resized.id, original.id);
    assert_eq!(resized.count, 2);
    assert_eq!(resized.seats, vec!["PC-A", "PC-B"]);

    let all = store.device_configs().get_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], resized);
}

#[test]
fn test_device_config_delete_by_category() {
    let store = empty_store();
    store.device_configs().save(NewDeviceConfig::numbered(Pc, 3)).unwrap();

    assert!(!store.device_configs().delete_by_category(Ps5).unwrap());
    assert!(store.device_configs().delete_by_category(Pc).unwrap());
    assert!(store.device_configs().get_by_category(Pc).is_none());
}

#[test]
fn test_pricing_replace_leaves_other_categories_untouched() {
    let store = empty_store();
    let old_pc = store
        .pricing_configs()
        .save_for_category(
            Pc,
            vec![
                NewPricingConfig::single(Pc, "1h", "50"),
                NewPricingConfig::single(Pc, "2h", "90"),
            ],
        )
        .unwrap();
    store
        .pricing_configs()
        .save_for_category(
            Ps5,
            vec![
                NewPricingConfig::single(Ps5, "1h", "70"),
                NewPricingConfig::single(Ps5, "2h", "130"),
            ],
        )
        .unwrap();
    let ps5_before = serialized(&store.pricing_configs().get_by_category(Ps5));

    let new_pc = store
        .pricing_configs()
        .save_for_category(
            Pc,
            vec![
                NewPricingConfig::single(Pc, "30m", "30"),
                NewPricingConfig::single(Pc, "1h", "45"),
                NewPricingConfig::single(Pc, "3h", "120"),
            ],
        )
        .unwrap();

    assert_eq!(serialized(&store.pricing_configs().get_by_category(Ps5)), ps5_before);

    let pc_now = store.pricing_configs().get_by_category(Pc);
    assert_eq!(pc_now, new_pc);
    assert_eq!(pc_now.len(), 3);
    let old_ids: HashSet<_> = old_pc.iter().map(|r| r.id.clone()).collect();
    assert!(pc_now.iter().all(|r| !old_ids.contains(&r.id)));

    // Replaced rows move to the end
    let order: Vec<DeviceCategory> = store
        .pricing_configs()
        .get_all()
        .iter()
        .map(|r| r.category)
        .collect();
    assert_eq!(order, vec![Ps5, Ps5, Pc, Pc, Pc]);
}

#[test]
fn test_pricing_replace_stamps_partition_category() {
    let store = empty_store();
    let saved = store
        .pricing_configs()
        .save_for_category(Ps5, vec![NewPricingConfig::single(Pc, "1h", "70")])
        .unwrap();

    assert_eq!(saved[0].category, Ps5);
    assert!(store.pricing_configs().get_by_category(Pc).is_empty());
}

#[test]
fn test_replace_with_no_rows_empties_category() {
    let store = empty_store();
    store
        .happy_hours_pricing()
        .save_for_category(Pc, vec![NewHappyHoursPricing::single(Pc, "1h", "40")])
        .unwrap();

    let saved = store.happy_hours_pricing().save_for_category(Pc, Vec::new()).unwrap();
    assert!(saved.is_empty());
    assert!(store.happy_hours_pricing().get_all().is_empty());
}

#[test]
fn test_happy_hours_windows() {
    let store = empty_store();
    let windows = store
        .happy_hours_configs()
        .save_for_category(
            Pc,
            vec![
                NewHappyHoursConfig::window(Pc, "11:00", "14:00", true),
                NewHappyHoursConfig::window(Pc, "22:00", "23:30", false),
            ],
        )
        .unwrap();
    assert_eq!(windows.len(), 2);
    assert!(windows[0].is_enabled());
    assert!(!windows[1].is_enabled());

    assert!(store.happy_hours_configs().delete_by_category(Pc).unwrap());
    assert!(!store.happy_hours_configs().delete_by_category(Pc).unwrap());
    assert!(store.happy_hours_configs().get_by_category(Pc).is_empty());
}
