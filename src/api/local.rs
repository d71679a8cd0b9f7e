use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::LoungeApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{Booking, BookingPatch, DeviceConfig, NewBooking, PricingConfig};
use crate::store::LocalRecordStore;

/// Serves the lounge API from the local record store.
///
/// Every call completes synchronously; the futures are ready on first poll.
#[derive(Debug)]
pub struct LocalApi {
    store: LocalRecordStore,
}

impl LocalApi {
    pub fn new(store: LocalRecordStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &LocalRecordStore {
        &self.store
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl LoungeApi for LocalApi {
    async fn fetch_bookings(&self) -> ApiResult<Vec<Booking>> {
        Ok(self.store.bookings().get_all())
    }

    async fn create_booking(&self, booking: NewBooking) -> ApiResult<Booking> {
        Ok(self.store.bookings().create(booking)?)
    }

    async fn update_booking(&self, id: &str, patch: BookingPatch) -> ApiResult<Booking> {
        self.store
            .bookings()
            .update(id, patch)?
            .ok_or_else(|| ApiError::NotFound(format!("booking {}", id)))
    }

    async fn delete_booking(&self, id: &str) -> ApiResult<()> {
        if self.store.bookings().delete(id)? {
            Ok(())
        } else {
            Err(ApiError::NotFound(format!("booking {}", id)))
        }
    }

    async fn fetch_device_configs(&self) -> ApiResult<Vec<DeviceConfig>> {
        Ok(self.store.device_configs().get_all())
    }

    async fn fetch_pricing_configs(&self) -> ApiResult<Vec<PricingConfig>> {
        Ok(self.store.pricing_configs().get_all())
    }

    async fn get_server_time(&self) -> ApiResult<DateTime<Utc>> {
        Ok(Utc::now())
    }
}
