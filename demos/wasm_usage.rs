//! Exposing the lounge store to a browser front end.
//!
//! To build for WASM:
//! cargo build --example wasm_usage --target wasm32-unknown-unknown --features wasm

#[cfg(target_arch = "wasm32")]
mod front_desk {
    use lounge_store::models::{BookingPatch, NewBooking};
    use lounge_store::storage::create_storage;
    use lounge_store::LocalRecordStore;
    use wasm_bindgen::prelude::*;

    fn js_error(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    #[wasm_bindgen]
    pub struct FrontDesk {
        store: LocalRecordStore,
    }

    #[wasm_bindgen]
    impl FrontDesk {
        #[wasm_bindgen(constructor)]
        pub fn new(app_id: &str) -> Result<FrontDesk, JsValue> {
            // In WASM, the location is the app id used to prefix localStorage keys
            let store = LocalRecordStore::open(create_storage(app_id)).map_err(js_error)?;
            Ok(FrontDesk { store })
        }

        /// All bookings as a JSON array.
        pub fn bookings(&self) -> Result<String, JsValue> {
            serde_json::to_string(&self.store.bookings().get_all()).map_err(js_error)
        }

        /// Takes a booking as JSON, returns the stored booking as JSON.
        pub fn create_booking(&self, booking: &str) -> Result<String, JsValue> {
            let new: NewBooking = serde_json::from_str(booking).map_err(js_error)?;
            let created = self.store.bookings().create(new).map_err(js_error)?;
            serde_json::to_string(&created).map_err(js_error)
        }

        /// Returns `null` when the booking does not exist.
        pub fn update_booking(&self, id: &str, patch: &str) -> Result<Option<String>, JsValue> {
            let patch: BookingPatch = serde_json::from_str(patch).map_err(js_error)?;
            match self.store.bookings().update(id, patch).map_err(js_error)? {
                Some(updated) => serde_json::to_string(&updated).map(Some).map_err(js_error),
                None => Ok(None),
            }
        }

        pub fn delete_booking(&self, id: &str) -> Result<bool, JsValue> {
            self.store.bookings().delete(id).map_err(js_error)
        }

        pub fn reset_demo_data(&self) -> Result<(), JsValue> {
            self.store.reset_demo_data().map_err(js_error)
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This example only runs in the browser; build it for wasm32-unknown-unknown.");
}
