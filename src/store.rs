//! CRUD façade over a [`Storage`] area.
//!
//! Every collection occupies one storage key holding its full JSON array. Each
//! operation reads the whole collection, changes it in memory and writes the
//! whole collection back, so cost is linear in collection size.
//!
//! There is no locking or version check between the read and the write: two
//! writers interleaving on the same collection lose the first writer's change.
//! The store is meant for a single interactive user in a single process (or
//! browser tab) and must not be shared between independent writers.

use std::marker::PhantomData;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::demo::DemoSeeder;
use crate::error::StoreError;
use crate::models::{
    Booking, Categorized, DeviceCategory, DeviceConfig, Expense, FoodItem, HappyHoursConfig,
    HappyHoursPricing, NewDeviceConfig, PricingConfig, Record, RecordPatch,
};
use crate::storage::Storage;

/// Storage keys, one per collection plus the seeding flag.
pub mod keys {
    pub const BOOKINGS: &str = "bookings";
    pub const FOOD_ITEMS: &str = "food_items";
    pub const EXPENSES: &str = "expenses";
    pub const DEVICE_CONFIGS: &str = "device_configs";
    pub const PRICING_CONFIGS: &str = "pricing_configs";
    pub const HAPPY_HOURS_CONFIGS: &str = "happy_hours_configs";
    pub const HAPPY_HOURS_PRICING: &str = "happy_hours_pricing";
    pub const DEMO_INITIALIZED: &str = "demo_initialized";

    /// Every key, seeding flag first.
    pub const ALL: [&str; 8] = [
        DEMO_INITIALIZED,
        BOOKINGS,
        FOOD_ITEMS,
        EXPENSES,
        DEVICE_CONFIGS,
        PRICING_CONFIGS,
        HAPPY_HOURS_CONFIGS,
        HAPPY_HOURS_PRICING,
    ];
}

/// Record store for every lounge collection.
#[derive(Debug)]
pub struct LocalRecordStore {
    storage: Box<dyn Storage>,
}

impl LocalRecordStore {
    /// Wraps `storage` without touching its contents.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Wraps `storage` and seeds the demo fixtures if it has never been seeded.
    pub fn open(storage: Box<dyn Storage>) -> Result<Self, StoreError> {
        let store = Self::new(storage);
        DemoSeeder::new(&store).seed_if_needed()?;
        Ok(store)
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Reads the collection under `key`.
    ///
    /// Never fails: an absent, unreadable or undecodable value yields `default`.
    pub fn read_collection<T: DeserializeOwned>(&self, key: &str, default: Vec<T>) -> Vec<T> {
        let contents = match self.storage.read(key) {
            Ok(Some(contents)) if !contents.is_empty() => contents,
            Ok(_) => return default,
            Err(e) => {
                tracing::error!(
                    "Failed to read {}, using default: {}",
                    self.storage.get_path(key),
                    e
                );
                return default;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(
                    "Failed to deserialize {}, using default: {}",
                    self.storage.get_path(key),
                    e
                );
                default
            }
        }
    }

    /// Serializes `rows` and replaces the collection under `key`.
    pub fn write_collection<T: Serialize>(&self, key: &str, rows: &[T]) -> Result<(), StoreError> {
        let data = serde_json::to_string(rows).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.write_raw(key, &data)?;
        tracing::debug!(key, rows = rows.len(), "collection persisted");
        Ok(())
    }

    fn read_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.read(key).map_err(|source| {
            let location = self.storage.get_path(key);
            tracing::error!("Failed to read {}: {}", location, source);
            StoreError::Read {
                key: key.to_string(),
                location,
                source,
            }
        })
    }

    pub(crate) fn write_raw(&self, key: &str, data: &str) -> Result<(), StoreError> {
        self.storage.write(key, data).map_err(|source| {
            let location = self.storage.get_path(key);
            tracing::error!("Failed to persist {}: {}", location, source);
            StoreError::Persist {
                key: key.to_string(),
                location,
                source,
            }
        })
    }

    fn remove_raw(&self, key: &str) -> Result<(), StoreError> {
        self.storage.remove(key).map_err(|source| StoreError::Persist {
            key: key.to_string(),
            location: self.storage.get_path(key),
            source,
        })
    }

    pub fn bookings(&self) -> Entries<'_, Booking> {
        Entries::new(self, keys::BOOKINGS)
    }

    pub fn food_items(&self) -> Entries<'_, FoodItem> {
        Entries::new(self, keys::FOOD_ITEMS)
    }

    pub fn expenses(&self) -> Entries<'_, Expense> {
        Entries::new(self, keys::EXPENSES)
    }

    pub fn device_configs(&self) -> DeviceConfigs<'_> {
        DeviceConfigs { store: self }
    }

    pub fn pricing_configs(&self) -> Partitions<'_, PricingConfig> {
        Partitions::new(self, keys::PRICING_CONFIGS)
    }

    pub fn happy_hours_configs(&self) -> Partitions<'_, HappyHoursConfig> {
        Partitions::new(self, keys::HAPPY_HOURS_CONFIGS)
    }

    pub fn happy_hours_pricing(&self) -> Partitions<'_, HappyHoursPricing> {
        Partitions::new(self, keys::HAPPY_HOURS_PRICING)
    }

    /// True once the demo fixtures have been written.
    ///
    /// Unlike collection reads, an unreadable flag is an error, never `false`.
    pub fn is_seeded(&self) -> Result<bool, StoreError> {
        Ok(self.read_raw(keys::DEMO_INITIALIZED)?.as_deref() == Some("true"))
    }

    /// Removes every known key, including the seeding flag. Does not reseed.
    ///
    /// The flag goes first, so an interrupted clear is reseeded on the next
    /// open. Every key is attempted; the first failure is returned.
    pub fn clear_all_data(&self) -> Result<(), StoreError> {
        let mut first_error = None;
        for key in keys::ALL {
            if let Err(e) = self.remove_raw(key) {
                tracing::error!("{}", e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => {
                tracing::info!("All lounge data cleared");
                Ok(())
            }
        }
    }

    /// Factory reset: clears everything and seeds the demo fixtures again.
    pub fn reset_demo_data(&self) -> Result<(), StoreError> {
        self.clear_all_data()?;
        DemoSeeder::new(self).seed()
    }
}

/// An id not used by any record in `taken`.
fn fresh_id<T: Record>(taken: &[T]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !taken.iter().any(|r| r.id() == id) {
            return id;
        }
    }
}

/// List-style collection addressed by record id.
#[derive(Debug)]
pub struct Entries<'a, T> {
    store: &'a LocalRecordStore,
    key: &'static str,
    _record: PhantomData<T>,
}

impl<'a, T: Record> Entries<'a, T> {
    fn new(store: &'a LocalRecordStore, key: &'static str) -> Self {
        Self {
            store,
            key,
            _record: PhantomData,
        }
    }

    pub fn get_all(&self) -> Vec<T> {
        self.store.read_collection(self.key, Vec::new())
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.get_all().into_iter().find(|r| r.id() == id)
    }

    /// Assigns a fresh id (and creation time), appends and persists.
    pub fn create(&self, new: T::New) -> Result<T, StoreError> {
        let mut rows = self.get_all();
        let record = T::from_new(new, fresh_id(&rows), Utc::now());
        rows.push(record.clone());
        self.store.write_collection(self.key, &rows)?;
        tracing::debug!(kind = T::KIND, id = record.id(), "record created");
        Ok(record)
    }

    /// Merges `patch` over the record in place. `Ok(None)` when `id` is unknown.
    ///
    /// An empty patch returns the stored record without writing.
    pub fn update(&self, id: &str, patch: T::Patch) -> Result<Option<T>, StoreError> {
        let mut rows = self.get_all();
        let Some(record) = rows.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(record.clone()));
        }
        record.apply(patch);
        let updated = record.clone();
        self.store.write_collection(self.key, &rows)?;
        Ok(Some(updated))
    }

    /// Removes the record; `Ok(false)` when nothing matched.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut rows = self.get_all();
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        if rows.len() == before {
            return Ok(false);
        }
        self.store.write_collection(self.key, &rows)?;
        Ok(true)
    }
}

/// Seat layouts, at most one per category.
#[derive(Debug)]
pub struct DeviceConfigs<'a> {
    store: &'a LocalRecordStore,
}

impl DeviceConfigs<'_> {
    pub fn get_all(&self) -> Vec<DeviceConfig> {
        self.store.read_collection(keys::DEVICE_CONFIGS, Vec::new())
    }

    pub fn get_by_category(&self, category: DeviceCategory) -> Option<DeviceConfig> {
        self.get_all().into_iter().find(|c| c.category == category)
    }

    /// Upsert keyed on category: an existing layout is updated in place and
    /// keeps its id, otherwise a new one is appended.
    pub fn save(&self, config: NewDeviceConfig) -> Result<DeviceConfig, StoreError> {
        if config.seats.len() != config.count as usize {
            tracing::warn!(
                category = %config.category,
                count = config.count,
                seats = config.seats.len(),
                "device config seat list does not match count"
            );
        }

        let mut rows = self.get_all();
        let saved = match rows.iter_mut().find(|c| c.category == config.category) {
            Some(existing) => {
                existing.apply(config.into());
                existing.clone()
            }
            None => {
                let created = DeviceConfig::from_new(config, fresh_id(&rows), Utc::now());
                rows.push(created.clone());
                created
            }
        };
        self.store.write_collection(keys::DEVICE_CONFIGS, &rows)?;
        Ok(saved)
    }

    pub fn delete_by_category(&self, category: DeviceCategory) -> Result<bool, StoreError> {
        let mut rows = self.get_all();
        let before = rows.len();
        rows.retain(|c| c.category != category);
        if rows.len() == before {
            return Ok(false);
        }
        self.store.write_collection(keys::DEVICE_CONFIGS, &rows)?;
        Ok(true)
    }
}

/// Multi-row tables partitioned by category and replaced wholesale per category.
#[derive(Debug)]
pub struct Partitions<'a, T> {
    store: &'a LocalRecordStore,
    key: &'static str,
    _record: PhantomData<T>,
}

impl<'a, T> Partitions<'a, T>
where
    T: Record + Categorized,
    T::New: Categorized,
{
    fn new(store: &'a LocalRecordStore, key: &'static str) -> Self {
        Self {
            store,
            key,
            _record: PhantomData,
        }
    }

    pub fn get_all(&self) -> Vec<T> {
        self.store.read_collection(self.key, Vec::new())
    }

    pub fn get_by_category(&self, category: DeviceCategory) -> Vec<T> {
        self.get_all()
            .into_iter()
            .filter(|r| r.category() == category)
            .collect()
    }

    /// Drops every row of `category` and appends `rows` with fresh ids.
    ///
    /// Rows of other categories keep their content and relative order. Each
    /// new row is stamped with `category`. Returns only the new rows.
    pub fn save_for_category(
        &self,
        category: DeviceCategory,
        rows: Vec<T::New>,
    ) -> Result<Vec<T>, StoreError> {
        let mut all = self.get_all();
        all.retain(|r| r.category() != category);

        let now = Utc::now();
        let mut created = Vec::with_capacity(rows.len());
        for mut new in rows {
            if new.category() != category {
                tracing::warn!(
                    kind = T::KIND,
                    "row for {} saved under {}",
                    new.category(),
                    category
                );
                new.set_category(category);
            }
            let record = T::from_new(new, fresh_id(&all), now);
            all.push(record.clone());
            created.push(record);
        }

        self.store.write_collection(self.key, &all)?;
        Ok(created)
    }

    pub fn delete_by_category(&self, category: DeviceCategory) -> Result<bool, StoreError> {
        let mut all = self.get_all();
        let before = all.len();
        all.retain(|r| r.category() != category);
        if all.len() == before {
            return Ok(false);
        }
        self.store.write_collection(self.key, &all)?;
        Ok(true)
    }
}
