//! Record kinds persisted by the store.
//!
//! Every kind `X` is declared through [`lounge_record!`], which generates three
//! types sharing one field list:
//!
//! - `X`, the stored record, carrying its generated `id` (and `createdAt` where
//!   the kind has one);
//! - `NewX`, the creation input: every field except `id`/`createdAt`;
//! - `XPatch`, a partial update where each field is optional. For fields that
//!   are themselves nullable, an explicit JSON `null` clears the value while an
//!   absent key leaves it untouched.
//!
//! All three serialize with the camelCase names used on the wire and in storage.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Declares a record kind together with its `New*` and `*Patch` companions.
///
/// ```ignore
/// lounge_record! {
///     /// An outgoing payment.
///     pub struct Expense {
///         pub category: String => "category",
///         pub amount: String => "amount",
///     },
///     "expense",
///     created_at => "createdAt"
/// }
/// ```
macro_rules! lounge_record {
    (
        $(#[$outer:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$inner:meta])*
                $field_vis:vis $field:ident: $type:ty => $saved_name:literal,
            )*
        },
        $kind:literal
        $(, $created:ident => $created_name:literal)?
    ) => {
        paste::paste! {
            $(#[$outer])*
            #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
            $vis struct $name {
                /// Generated once at creation, never reassigned.
                pub id: String,
                $(
                    $(#[$inner])*
                    #[serde(rename = $saved_name)]
                    $field_vis $field: $type,
                )*
                $(
                    /// Set once at creation.
                    #[serde(rename = $created_name)]
                    pub $created: chrono::DateTime<chrono::Utc>,
                )?
            }

            #[doc = concat!("Creation input for [`", stringify!($name), "`].")]
            #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
            $vis struct [<New $name>] {
                $(
                    $(#[$inner])*
                    #[serde(rename = $saved_name)]
                    $field_vis $field: $type,
                )*
            }

            #[doc = concat!("Partial update for [`", stringify!($name), "`]; `None` keeps the stored value.")]
            #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
            $vis struct [<$name Patch>] {
                $(
                    #[serde(
                        rename = $saved_name,
                        default,
                        skip_serializing_if = "Option::is_none",
                        deserialize_with = "crate::models::deserialize_some"
                    )]
                    pub $field: Option<$type>,
                )*
            }

            impl [<$name Patch>] {
                $(
                    pub fn $field(mut self, value: $type) -> Self {
                        self.$field = Some(value);
                        self
                    }
                )*
            }

            impl $crate::models::RecordPatch for [<$name Patch>] {
                fn is_empty(&self) -> bool {
                    true $(&& self.$field.is_none())*
                }
            }

            impl From<[<New $name>]> for [<$name Patch>] {
                fn from(new: [<New $name>]) -> Self {
                    Self {
                        $($field: Some(new.$field),)*
                    }
                }
            }

            impl $crate::models::Record for $name {
                type New = [<New $name>];
                type Patch = [<$name Patch>];

                const KIND: &'static str = $kind;

                fn id(&self) -> &str {
                    &self.id
                }

                #[allow(unused_variables)]
                fn from_new(new: Self::New, id: String, now: chrono::DateTime<chrono::Utc>) -> Self {
                    $name {
                        id,
                        $($field: new.$field,)*
                        $($created: now,)?
                    }
                }

                fn apply(&mut self, patch: Self::Patch) {
                    $(
                        if let Some(value) = patch.$field {
                            self.$field = value;
                        }
                    )*
                }
            }
        }
    };
}

/// Implements [`Categorized`] for record kinds and their creation inputs.
macro_rules! categorized {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::models::Categorized for $ty {
                fn category(&self) -> $crate::models::DeviceCategory {
                    self.category
                }

                fn set_category(&mut self, category: $crate::models::DeviceCategory) {
                    self.category = category;
                }
            }
        )*
    };
}

mod booking;
mod expense;
mod food;
mod settings;

pub use booking::{Booking, BookingPatch, BookingStatus, FoodOrder, NewBooking};
pub use expense::{Expense, ExpensePatch, NewExpense};
pub use food::{FoodCategory, FoodItem, FoodItemPatch, NewFoodItem};
pub use settings::{
    DeviceConfig, DeviceConfigPatch, HappyHoursConfig, HappyHoursConfigPatch, HappyHoursPricing,
    HappyHoursPricingPatch, NewDeviceConfig, NewHappyHoursConfig, NewHappyHoursPricing,
    NewPricingConfig, PricingConfig, PricingConfigPatch,
};

/// A persisted record kind with a generated string identifier.
pub trait Record: Serialize + DeserializeOwned + Clone + fmt::Debug {
    /// Creation input: every field except the generated ones.
    type New;
    /// Partial update merged over an existing record.
    type Patch: RecordPatch;

    /// Human-readable kind, used in logs and errors.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Builds a record from its creation input, the freshly generated id and
    /// the creation time (ignored by kinds without `createdAt`).
    fn from_new(new: Self::New, id: String, now: DateTime<Utc>) -> Self;

    /// Merges `patch` over `self`; fields missing from the patch are retained.
    fn apply(&mut self, patch: Self::Patch);
}

/// Partial update of a [`Record`].
pub trait RecordPatch {
    /// True when applying this patch would change nothing.
    fn is_empty(&self) -> bool;
}

/// Records partitioned or keyed by device category.
pub trait Categorized {
    fn category(&self) -> DeviceCategory;
    fn set_category(&mut self, category: DeviceCategory);
}

/// Device class a seat, price or window belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceCategory {
    #[serde(rename = "PC")]
    Pc,
    #[serde(rename = "PS5")]
    Ps5,
}

impl DeviceCategory {
    pub const ALL: [DeviceCategory; 2] = [DeviceCategory::Pc, DeviceCategory::Ps5];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceCategory::Pc => "PC",
            DeviceCategory::Ps5 => "PS5",
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wraps any present value in `Some`, so that patch fields can tell an
/// explicit `null` (`Some(None)`) from an absent key (`None`).
pub(crate) fn deserialize_some<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
