//! # lounge_store
//!
//! Record store behind a gaming-lounge front desk: seat bookings (PC/PS5),
//! food inventory, expenses, seat layouts, pricing tiers and happy-hour
//! windows.
//!
//! Records are kept in a small key-value area: one file per collection on
//! native targets, `localStorage` in the browser (feature `wasm`), or memory.
//! A fresh store is seeded once with demo data so the front desk is usable
//! without a server.
//!
//! **Note:** Every operation rewrites the whole collection it touches, and
//! there is no locking between the read and the write. This is meant for one
//! operator in one process or tab, not for concurrent writers.
//!
//! **Error Handling:** Collection reads never fail; a missing or corrupt
//! collection is logged and read as empty. Writes return [`StoreError`] so a
//! full or disabled storage area can be reported to the operator. An
//! unreadable seeding flag also fails [`LocalRecordStore::open`] rather than
//! reseeding over existing data.
//!
//! ## Example
//!
//! ```rust
//! use lounge_store::models::{BookingPatch, BookingStatus, DeviceCategory, NewBooking};
//! use lounge_store::storage::MemoryStorage;
//! use lounge_store::LocalRecordStore;
//!
//! let store = LocalRecordStore::open(Box::new(MemoryStorage::new())).unwrap();
//! let seats = store.device_configs().get_by_category(DeviceCategory::Pc).unwrap();
//! assert_eq!(seats.count, 15);
//!
//! let now = chrono::Utc::now();
//! let booking = store
//!     .bookings()
//!     .create(NewBooking::walk_in(DeviceCategory::Pc, 3, "Asha", now, now, "50"))
//!     .unwrap();
//! store
//!     .bookings()
//!     .update(&booking.id, BookingPatch::default().status(BookingStatus::Completed))
//!     .unwrap();
//! ```

pub mod api;
pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;

pub use api::{connect, LocalApi, LoungeApi, RemoteApi};
pub use config::{Mode, RemoteConfig, StoreConfig};
pub use error::{ApiError, ApiResult, ConfigError, StoreError};
pub use store::LocalRecordStore;
