use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether stock levels are tracked for a food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Trackable,
    NonTrackable,
}

lounge_record! {
    /// A food or drink item sold at the counter.
    pub struct FoodItem {
        pub name: String => "name",
        pub price: String => "price",
        pub cost_price: Option<String> => "costPrice",
        pub current_stock: i32 => "currentStock",
        pub min_stock_level: i32 => "minStockLevel",
        pub in_inventory: i32 => "inInventory",
        pub category: FoodCategory => "category",
        pub supplier: Option<String> => "supplier",
        pub expiry_date: Option<DateTime<Utc>> => "expiryDate",
    },
    "food item"
}

impl FoodItem {
    /// Tracked items at or below their minimum stock level.
    pub fn needs_restock(&self) -> bool {
        self.category == FoodCategory::Trackable && self.current_stock <= self.min_stock_level
    }
}
