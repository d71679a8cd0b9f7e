//! Demo fixtures, written once so a fresh store is immediately usable.

use chrono::{DateTime, Duration, Utc};

use crate::error::StoreError;
use crate::models::{
    Booking, BookingStatus, DeviceCategory, DeviceConfig, Expense, FoodCategory, FoodItem,
    HappyHoursConfig, HappyHoursPricing, NewBooking, NewDeviceConfig, NewExpense, NewFoodItem,
    NewHappyHoursConfig, NewHappyHoursPricing, NewPricingConfig, PricingConfig, Record,
};
use crate::store::{keys, LocalRecordStore};

/// Seeds a store with the demo fixture set, guarded by a persisted flag.
#[derive(Debug)]
pub struct DemoSeeder<'a> {
    store: &'a LocalRecordStore,
}

impl<'a> DemoSeeder<'a> {
    pub fn new(store: &'a LocalRecordStore) -> Self {
        Self { store }
    }

    /// Seeds unless the flag says it already happened. Returns whether it seeded.
    ///
    /// Fails without writing anything when the flag cannot be read.
    pub fn seed_if_needed(&self) -> Result<bool, StoreError> {
        if self.store.is_seeded()? {
            tracing::debug!("Demo data already present");
            return Ok(false);
        }
        self.seed()?;
        Ok(true)
    }

    /// Writes every fixture collection, then sets the flag.
    ///
    /// A failed write leaves the flag unset so the next open tries again.
    pub fn seed(&self) -> Result<(), StoreError> {
        let fixtures = Fixtures::build(today());

        self.store
            .write_collection(keys::DEVICE_CONFIGS, &fixtures.device_configs)?;
        self.store
            .write_collection(keys::PRICING_CONFIGS, &fixtures.pricing_configs)?;
        self.store
            .write_collection(keys::HAPPY_HOURS_CONFIGS, &fixtures.happy_hours_configs)?;
        self.store
            .write_collection(keys::HAPPY_HOURS_PRICING, &fixtures.happy_hours_pricing)?;
        self.store.write_collection(keys::FOOD_ITEMS, &fixtures.food_items)?;
        self.store.write_collection(keys::BOOKINGS, &fixtures.bookings)?;
        self.store.write_collection(keys::EXPENSES, &fixtures.expenses)?;
        self.store.write_raw(keys::DEMO_INITIALIZED, "true")?;

        tracing::info!(
            bookings = fixtures.bookings.len(),
            food_items = fixtures.food_items.len(),
            "Demo data seeded"
        );
        Ok(())
    }
}

/// Midnight (UTC) of the current day.
fn today() -> DateTime<Utc> {
    let now = Utc::now();
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .unwrap_or(now)
}

fn id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// The full fixture set, anchored on `today`.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub device_configs: Vec<DeviceConfig>,
    pub pricing_configs: Vec<PricingConfig>,
    pub happy_hours_configs: Vec<HappyHoursConfig>,
    pub happy_hours_pricing: Vec<HappyHoursPricing>,
    pub food_items: Vec<FoodItem>,
    pub bookings: Vec<Booking>,
    pub expenses: Vec<Expense>,
}

impl Fixtures {
    pub fn build(today: DateTime<Utc>) -> Self {
        use DeviceCategory::{Pc, Ps5};

        let device_configs = [(Pc, 15), (Ps5, 8)]
            .into_iter()
            .map(|(category, count)| {
                DeviceConfig::from_new(NewDeviceConfig::numbered(category, count), id(), today)
            })
            .collect();

        let pricing_configs = [
            (Pc, "30m", "30"),
            (Pc, "1h", "50"),
            (Pc, "2h", "90"),
            (Pc, "3h", "130"),
            (Pc, "6h", "240"),
            (Ps5, "30m", "40"),
            (Ps5, "1h", "70"),
            (Ps5, "2h", "130"),
            (Ps5, "3h", "180"),
            (Ps5, "6h", "320"),
        ]
        .into_iter()
        .map(|(category, duration, price)| {
            PricingConfig::from_new(NewPricingConfig::single(category, duration, price), id(), today)
        })
        .collect();

        let happy_hours_configs = [(Pc, "14:00", "18:00"), (Ps5, "11:00", "14:00")]
            .into_iter()
            .map(|(category, start, end)| {
                HappyHoursConfig::from_new(
                    NewHappyHoursConfig::window(category, start, end, true),
                    id(),
                    today,
                )
            })
            .collect();

        let happy_hours_pricing = [(Pc, "1h", "40"), (Pc, "2h", "70"), (Ps5, "1h", "60")]
            .into_iter()
            .map(|(category, duration, price)| {
                HappyHoursPricing::from_new(
                    NewHappyHoursPricing::single(category, duration, price),
                    id(),
                    today,
                )
            })
            .collect();

        Self {
            device_configs,
            pricing_configs,
            happy_hours_configs,
            happy_hours_pricing,
            food_items: food_items(today),
            bookings: bookings(today),
            expenses: expenses(today),
        }
    }
}

fn food_items(today: DateTime<Utc>) -> Vec<FoodItem> {
    let stocked = |name: &str, price: &str, cost: &str, stock, min, inventory, supplier: &str| {
        NewFoodItem {
            name: name.to_string(),
            price: price.to_string(),
            cost_price: Some(cost.to_string()),
            current_stock: stock,
            min_stock_level: min,
            in_inventory: inventory,
            category: FoodCategory::Trackable,
            supplier: Some(supplier.to_string()),
            expiry_date: None,
        }
    };

    vec![
        stocked("Coca Cola", "30", "15", 50, 20, 100, "Local Distributor"),
        stocked("Pepsi", "30", "15", 45, 20, 90, "Local Distributor"),
        stocked("Potato Chips", "20", "10", 60, 30, 120, "Snacks Supplier"),
        NewFoodItem {
            name: "Sandwich".to_string(),
            price: "50".to_string(),
            cost_price: None,
            current_stock: 0,
            min_stock_level: 10,
            in_inventory: 0,
            category: FoodCategory::NonTrackable,
            supplier: None,
            expiry_date: None,
        },
        stocked("Energy Drink", "60", "30", 30, 15, 60, "Beverage Supplier"),
    ]
    .into_iter()
    .map(|new| FoodItem::from_new(new, id(), today))
    .collect()
}

fn bookings(today: DateTime<Utc>) -> Vec<Booking> {
    let start = today + Duration::hours(10);
    let end = today + Duration::hours(12);
    let mut booking = NewBooking::walk_in(DeviceCategory::Pc, 5, "Demo Customer", start, end, "90");
    booking.whatsapp_number = Some("9876543210".to_string());
    booking.status = BookingStatus::Running;

    vec![Booking::from_new(booking, id(), start)]
}

fn expenses(today: DateTime<Utc>) -> Vec<Expense> {
    [
        ("Utilities", "Monthly electricity bill", "5000", 5),
        ("Maintenance", "PC keyboard replacement", "1500", 2),
    ]
    .into_iter()
    .map(|(category, description, amount, days_ago)| {
        let date = today - Duration::days(days_ago);
        Expense::from_new(
            NewExpense {
                category: category.to_string(),
                description: description.to_string(),
                amount: amount.to_string(),
                date,
            },
            id(),
            date,
        )
    })
    .collect()
}
