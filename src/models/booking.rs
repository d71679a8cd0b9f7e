use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::DeviceCategory;

/// Lifecycle of a seat booking.
///
/// The front desk and server may use statuses beyond the known ones; those
/// are kept verbatim in [`BookingStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Running,
    Paused,
    Expired,
    Completed,
    Cancelled,
    #[serde(untagged)]
    Other(String),
}

/// A food item ordered against a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodOrder {
    pub food_id: String,
    pub food_name: String,
    pub price: String,
    pub quantity: u32,
}

lounge_record! {
    /// A timed seat booking.
    pub struct Booking {
        pub category: DeviceCategory => "category",
        pub seat_number: u32 => "seatNumber",
        pub seat_name: String => "seatName",
        pub customer_name: String => "customerName",
        pub whatsapp_number: Option<String> => "whatsappNumber",
        pub start_time: DateTime<Utc> => "startTime",
        pub end_time: DateTime<Utc> => "endTime",
        /// Decimal amount as a string, e.g. `"90"`.
        pub price: String => "price",
        pub status: BookingStatus => "status",
        pub booking_type: Vec<String> => "bookingType",
        /// Milliseconds left on the clock while paused.
        pub paused_remaining_time: Option<i64> => "pausedRemainingTime",
        pub person_count: u32 => "personCount",
        pub payment_method: Option<String> => "paymentMethod",
        pub cash_amount: Option<String> => "cashAmount",
        pub upi_amount: Option<String> => "upiAmount",
        pub payment_status: String => "paymentStatus",
        pub last_payment_action: Option<Value> => "lastPaymentAction",
        pub food_orders: Vec<FoodOrder> => "foodOrders",
        pub original_price: Option<String> => "originalPrice",
        pub discount_applied: Option<String> => "discountApplied",
        pub bonus_hours_applied: Option<String> => "bonusHoursApplied",
        pub promotion_details: Option<Value> => "promotionDetails",
        pub is_promotional_discount: u8 => "isPromotionalDiscount",
        pub is_promotional_bonus: u8 => "isPromotionalBonus",
        pub manual_discount_percentage: Option<u32> => "manualDiscountPercentage",
        pub manual_free_hours: Option<String> => "manualFreeHours",
        pub discount: Option<String> => "discount",
        pub bonus: Option<String> => "bonus",
    },
    "booking",
    created_at => "createdAt"
}

impl NewBooking {
    /// A walk-in booking with no payment, promotion or food attached yet.
    pub fn walk_in(
        category: DeviceCategory,
        seat_number: u32,
        customer_name: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            category,
            seat_number,
            seat_name: format!("{} {}", category, seat_number),
            customer_name: customer_name.into(),
            whatsapp_number: None,
            start_time,
            end_time,
            price: price.into(),
            status: BookingStatus::Running,
            booking_type: vec!["Regular".to_string()],
            paused_remaining_time: None,
            person_count: 1,
            payment_method: None,
            cash_amount: None,
            upi_amount: None,
            payment_status: "unpaid".to_string(),
            last_payment_action: None,
            food_orders: Vec::new(),
            original_price: None,
            discount_applied: None,
            bonus_hours_applied: None,
            promotion_details: None,
            is_promotional_discount: 0,
            is_promotional_bonus: 0,
            manual_discount_percentage: None,
            manual_free_hours: None,
            discount: None,
            bonus: None,
        }
    }
}
