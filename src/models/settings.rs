//! Seat layout, pricing tables and happy-hour windows.

use super::DeviceCategory;

lounge_record! {
    /// Seat layout of one device category; at most one per category.
    pub struct DeviceConfig {
        pub category: DeviceCategory => "category",
        pub count: u32 => "count",
        /// Seat names in display order; expected to hold `count` entries.
        pub seats: Vec<String> => "seats",
    },
    "device config"
}

lounge_record! {
    /// One standard price tier, e.g. PC for `"1h"` at `"50"`.
    pub struct PricingConfig {
        pub category: DeviceCategory => "category",
        /// Duration label such as `"30m"` or `"2h"`.
        pub duration: String => "duration",
        pub price: String => "price",
        pub person_count: u32 => "personCount",
    },
    "pricing config"
}

lounge_record! {
    /// A daily discount window, `"HH:MM"` to `"HH:MM"`.
    pub struct HappyHoursConfig {
        pub category: DeviceCategory => "category",
        pub start_time: String => "startTime",
        pub end_time: String => "endTime",
        /// 1 when the window is active, 0 otherwise.
        pub enabled: u8 => "enabled",
    },
    "happy hours config"
}

lounge_record! {
    /// A discounted price tier applied inside happy-hour windows.
    pub struct HappyHoursPricing {
        pub category: DeviceCategory => "category",
        pub duration: String => "duration",
        pub price: String => "price",
        pub person_count: u32 => "personCount",
    },
    "happy hours pricing"
}

categorized!(
    DeviceConfig,
    NewDeviceConfig,
    PricingConfig,
    NewPricingConfig,
    HappyHoursConfig,
    NewHappyHoursConfig,
    HappyHoursPricing,
    NewHappyHoursPricing,
);

impl NewDeviceConfig {
    /// `count` seats named `"<category> 1"` .. `"<category> <count>"`.
    pub fn numbered(category: DeviceCategory, count: u32) -> Self {
        Self {
            category,
            count,
            seats: (1..=count).map(|i| format!("{} {}", category, i)).collect(),
        }
    }
}

impl NewPricingConfig {
    pub fn single(category: DeviceCategory, duration: &str, price: &str) -> Self {
        Self {
            category,
            duration: duration.to_string(),
            price: price.to_string(),
            person_count: 1,
        }
    }
}

impl NewHappyHoursPricing {
    pub fn single(category: DeviceCategory, duration: &str, price: &str) -> Self {
        Self {
            category,
            duration: duration.to_string(),
            price: price.to_string(),
            person_count: 1,
        }
    }
}

impl NewHappyHoursConfig {
    pub fn window(category: DeviceCategory, start_time: &str, end_time: &str, enabled: bool) -> Self {
        Self {
            category,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            enabled: u8::from(enabled),
        }
    }
}

impl HappyHoursConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled != 0
    }
}
