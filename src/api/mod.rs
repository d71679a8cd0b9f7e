//! The booking API consumed by the front desk, independent of where records live.
//!
//! [`LocalApi`] answers from a [`LocalRecordStore`](crate::store::LocalRecordStore);
//! [`RemoteApi`] forwards every call to the lounge server over HTTP. Callers
//! hold a `Box<dyn LoungeApi>` from [`connect`] and never branch on the mode.

mod local;
mod remote;

pub use local::LocalApi;
pub use remote::RemoteApi;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::config::{Mode, StoreConfig};
use crate::error::{ApiResult, ConfigError};
use crate::models::{Booking, BookingPatch, DeviceConfig, NewBooking, PricingConfig};

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait LoungeApi: Send + Sync {
    async fn fetch_bookings(&self) -> ApiResult<Vec<Booking>>;

    async fn create_booking(&self, booking: NewBooking) -> ApiResult<Booking>;

    /// Fails with [`ApiError::NotFound`](crate::error::ApiError::NotFound) for an unknown id.
    async fn update_booking(&self, id: &str, patch: BookingPatch) -> ApiResult<Booking>;

    /// Fails with [`ApiError::NotFound`](crate::error::ApiError::NotFound) for an unknown id.
    async fn delete_booking(&self, id: &str) -> ApiResult<()>;

    async fn fetch_device_configs(&self) -> ApiResult<Vec<DeviceConfig>>;

    async fn fetch_pricing_configs(&self) -> ApiResult<Vec<PricingConfig>>;

    /// Reference clock for booking timers: the server's in remote mode, the local clock otherwise.
    async fn get_server_time(&self) -> ApiResult<DateTime<Utc>>;
}

/// Builds the API implementation selected by `config.mode`.
pub fn connect(config: &StoreConfig) -> Result<Box<dyn LoungeApi>, ConfigError> {
    match config.mode {
        Mode::Local => Ok(Box::new(LocalApi::new(config.open_store()?))),
        Mode::Remote => {
            let remote = config.remote.as_ref().ok_or(ConfigError::MissingRemote)?;
            Ok(Box::new(RemoteApi::new(remote)?))
        }
    }
}
