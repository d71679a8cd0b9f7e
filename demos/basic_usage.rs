use chrono::{Duration, Utc};
use lounge_store::models::{BookingPatch, BookingStatus, DeviceCategory, NewBooking, NewPricingConfig};
use lounge_store::StoreConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // On native platforms, this will use one file per collection
    // On WASM, this will use localStorage
    let config = StoreConfig::from_toml_str(
        r#"
        app_id = "com.example.lounge"
        seed_demo_data = true
        "#,
    )
    .expect("Invalid config");
    let store = config.open_store().expect("Failed to open store");

    println!("Seats:");
    for device in store.device_configs().get_all() {
        println!("  {}: {} seats", device.category, device.count);
    }

    println!("\nPC pricing:");
    for tier in store.pricing_configs().get_by_category(DeviceCategory::Pc) {
        println!("  {} -> {}", tier.duration, tier.price);
    }

    let start = Utc::now();
    let booking = store
        .bookings()
        .create(NewBooking::walk_in(
            DeviceCategory::Ps5,
            3,
            "Walk-in",
            start,
            start + Duration::hours(1),
            "70",
        ))
        .expect("Failed to create booking");
    println!("\nCreated booking {} on {}", booking.id, booking.seat_name);

    store
        .bookings()
        .update(&booking.id, BookingPatch::default().status(BookingStatus::Completed))
        .expect("Failed to update booking");

    // Replace the PS5 price table in one go
    store
        .pricing_configs()
        .save_for_category(
            DeviceCategory::Ps5,
            vec![
                NewPricingConfig::single(DeviceCategory::Ps5, "1h", "80"),
                NewPricingConfig::single(DeviceCategory::Ps5, "2h", "150"),
            ],
        )
        .expect("Failed to save pricing");

    println!("\nBookings today: {}", store.bookings().get_all().len());
    println!(
        "Stored at: {}",
        store.storage().get_path(lounge_store::store::keys::BOOKINGS)
    );
}
