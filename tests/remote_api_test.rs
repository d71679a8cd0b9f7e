#![cfg(not(target_arch = "wasm32"))]

//! Drives `RemoteApi` against an in-process axum server backed by a memory store.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, patch};
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use lounge_store::models::{
    Booking, BookingPatch, BookingStatus, DeviceCategory, DeviceConfig, NewBooking, PricingConfig,
};
use lounge_store::storage::MemoryStorage;
use lounge_store::{ApiError, LocalRecordStore, LoungeApi, RemoteApi, RemoteConfig};
use serde_json::{json, Value};

type Shared = Arc<LocalRecordStore>;
type Failure = (StatusCode, Json<Value>);

fn not_found() -> Failure {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Booking not found" })),
    )
}

fn internal(e: impl std::fmt::Display) -> Failure {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": e.to_string() })),
    )
}

async fn list_bookings(State(store): State<Shared>) -> Json<Vec<Booking>> {
    Json(store.bookings().get_all())
}

async fn create_booking(
    State(store): State<Shared>,
    Json(new): Json<NewBooking>,
) -> Result<(StatusCode, Json<Booking>), Failure> {
    let created = store.bookings().create(new).map_err(internal)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_booking(
    State(store): State<Shared>,
    Path(id): Path<String>,
    Json(patch): Json<BookingPatch>,
) -> Result<Json<Booking>, Failure> {
    match store.bookings().update(&id, patch).map_err(internal)? {
        Some(updated) => Ok(Json(updated)),
        None => Err(not_found()),
    }
}

async fn delete_booking(
    State(store): State<Shared>,
    Path(id): Path<String>,
) -> Result<StatusCode, Failure> {
    if store.bookings().delete(&id).map_err(internal)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found())
    }
}

async fn device_config(State(store): State<Shared>) -> Json<Vec<DeviceConfig>> {
    Json(store.device_configs().get_all())
}

async fn pricing_config(State(store): State<Shared>) -> Json<Vec<PricingConfig>> {
    Json(store.pricing_configs().get_all())
}

async fn server_time() -> Json<Value> {
    Json(json!({ "time": "2026-05-01T12:30:00Z" }))
}

fn lounge_router(store: Shared) -> Router {
    Router::new()
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route(
            "/api/bookings/{id}",
            patch(update_booking).delete(delete_booking),
        )
        .route("/api/device-config", get(device_config))
        .route("/api/pricing-config", get(pricing_config))
        .route("/api/server-time", get(server_time))
        .with_state(store)
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn remote(base_url: String) -> RemoteApi {
    RemoteApi::new(&RemoteConfig {
        base_url,
        timeout_secs: 5,
    })
    .unwrap()
}

async fn seeded_server() -> (RemoteApi, Shared) {
    let store = Arc::new(LocalRecordStore::open(Box::new(MemoryStorage::new())).unwrap());
    let base_url = serve(lounge_router(store.clone())).await;
    // Trailing slash is tolerated
    (remote(format!("{}/", base_url)), store)
}

#[tokio::test]
async fn test_remote_booking_lifecycle() {
    let (api, store) = seeded_server().await;
    assert_eq!(api.fetch_bookings().await.unwrap().len(), 1);

    let start = Utc::now();
    let created = api
        .create_booking(NewBooking::walk_in(
            DeviceCategory::Pc,
            9,
            "Farhan",
            start,
            start + chrono::Duration::hours(3),
            "130",
        ))
        .await
        .unwrap();
    assert_eq!(store.bookings().get(&created.id), Some(created.clone()));

    let paused = api
        .update_booking(
            &created.id,
            BookingPatch::default()
                .status(BookingStatus::Paused)
                .paused_remaining_time(Some(5_400_000)),
        )
        .await
        .unwrap();
    assert_eq!(paused.status, BookingStatus::Paused);
    assert_eq!(paused.paused_remaining_time, Some(5_400_000));
    assert_eq!(paused.customer_name, "Farhan");

    api.delete_booking(&created.id).await.unwrap();
    assert!(store.bookings().get(&created.id).is_none());
}

#[tokio::test]
async fn test_remote_not_found_carries_message() {
    let (api, _store) = seeded_server().await;

    match api.update_booking("missing", BookingPatch::default()).await {
        Err(ApiError::NotFound(message)) => assert_eq!(message, "Booking not found"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
    assert!(matches!(
        api.delete_booking("missing").await,
        Err(ApiError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_remote_configuration_and_time() {
    let (api, _store) = seeded_server().await;

    assert_eq!(api.fetch_device_configs().await.unwrap().len(), 2);
    assert_eq!(api.fetch_pricing_configs().await.unwrap().len(), 10);
    assert_eq!(
        api.get_server_time().await.unwrap(),
        Utc.with_ymd_and_hms(2026, 5, 1, 12, 30, 0).unwrap()
    );
}

#[tokio::test]
async fn test_remote_error_status_and_fallback_message() {
    let router = Router::new()
        .route(
            "/api/bookings",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "database offline" })),
                )
            }),
        )
        .route(
            "/api/device-config",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
    let api = remote(serve(router).await);

    match api.fetch_bookings().await {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database offline");
        }
        other => panic!("Expected Status, got {:?}", other),
    }

    match api.fetch_device_configs().await {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "Failed to fetch device configs: Service Unavailable");
        }
        other => panic!("Expected Status, got {:?}", other),
    }
}

#[tokio::test]
async fn test_remote_malformed_body_is_decode_error() {
    let router = Router::new().route(
        "/api/server-time",
        get(|| async { Json(json!({ "now": "soon" })) }),
    );
    let api = remote(serve(router).await);

    assert!(matches!(
        api.get_server_time().await,
        Err(ApiError::Decode(_))
    ));
}

#[tokio::test]
async fn test_remote_sends_session_cookie() {
    let router = Router::new()
        .route(
            "/api/server-time",
            get(|| async {
                (
                    [(header::SET_COOKIE, "session=front-desk; Path=/")],
                    Json(json!({ "time": "2026-05-01T12:30:00Z" })),
                )
            }),
        )
        .route(
            "/api/bookings",
            get(|headers: HeaderMap| async move {
                let has_session = headers
                    .get(header::COOKIE)
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|v| v.contains("session=front-desk"));
                if has_session {
                    (StatusCode::OK, Json(json!([])))
                } else {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "message": "Not authenticated" })),
                    )
                }
            }),
        );
    let api = remote(serve(router).await);

    assert!(matches!(
        api.fetch_bookings().await,
        Err(ApiError::Status { status: 401, .. })
    ));
    api.get_server_time().await.unwrap();
    assert!(api.fetch_bookings().await.unwrap().is_empty());
}
