use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::LoungeApi;
use crate::config::RemoteConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Booking, BookingPatch, DeviceConfig, NewBooking, PricingConfig};

/// Error body returned by the lounge server.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Deserialize)]
struct ServerTime {
    time: DateTime<Utc>,
}

/// Lounge API over HTTP; session credentials accompany every request.
#[derive(Debug, Clone)]
pub struct RemoteApi {
    client: Client,
    base_url: String,
}

impl RemoteApi {
    pub fn new(config: &RemoteConfig) -> Result<Self, reqwest::Error> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .cookie_store(true);

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }

    /// Sends `request`, turning non-2xx responses into errors.
    async fn send(request: RequestBuilder, action: &str) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                format!(
                    "Failed to {}: {}",
                    action,
                    status.canonical_reason().unwrap_or("unknown status")
                )
            });
        tracing::warn!(status = status.as_u16(), "{}", message);

        Err(match status {
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            _ => ApiError::Status {
                status: status.as_u16(),
                message,
            },
        })
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder, action: &str) -> ApiResult<T> {
        Self::send(request, action)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{}: {}", action, e)))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl LoungeApi for RemoteApi {
    async fn fetch_bookings(&self) -> ApiResult<Vec<Booking>> {
        Self::send_json(self.request(Method::GET, "/api/bookings"), "fetch bookings").await
    }

    async fn create_booking(&self, booking: NewBooking) -> ApiResult<Booking> {
        let request = self.request(Method::POST, "/api/bookings").json(&booking);
        Self::send_json(request, "create booking").await
    }

    async fn update_booking(&self, id: &str, patch: BookingPatch) -> ApiResult<Booking> {
        let request = self
            .request(Method::PATCH, &format!("/api/bookings/{}", id))
            .json(&patch);
        Self::send_json(request, "update booking").await
    }

    async fn delete_booking(&self, id: &str) -> ApiResult<()> {
        let request = self.request(Method::DELETE, &format!("/api/bookings/{}", id));
        Self::send(request, "delete booking").await?;
        Ok(())
    }

    async fn fetch_device_configs(&self) -> ApiResult<Vec<DeviceConfig>> {
        Self::send_json(self.request(Method::GET, "/api/device-config"), "fetch device configs").await
    }

    async fn fetch_pricing_configs(&self) -> ApiResult<Vec<PricingConfig>> {
        Self::send_json(
            self.request(Method::GET, "/api/pricing-config"),
            "fetch pricing configs",
        )
        .await
    }

    async fn get_server_time(&self) -> ApiResult<DateTime<Utc>> {
        let body: ServerTime =
            Self::send_json(self.request(Method::GET, "/api/server-time"), "fetch server time")
                .await?;
        Ok(body.time)
    }
}
