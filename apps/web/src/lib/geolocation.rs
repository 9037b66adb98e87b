//! `navigator.geolocation.getCurrentPosition` as a future: the promise
//! executor hands its `resolve`/`reject` straight to the success and error
//! callbacks, so no Rust closure outlives the call.

use attendance_core::{AttendError, Coordinates, Geolocator};
use js_sys::{Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{GeolocationPosition, GeolocationPositionError, PositionOptions};

/// Platform timeout for a position fix, in milliseconds.
const POSITION_TIMEOUT_MS: u32 = 10_000;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserGeolocator;

impl Geolocator for BrowserGeolocator {
    async fn current_position(&self) -> Result<Coordinates, AttendError> {
        let window = web_sys::window().ok_or(AttendError::Unsupported)?;
        let navigator = window.navigator();
        let supported = Reflect::get(&navigator, &JsValue::from_str("geolocation"))
            .is_ok_and(|value| !value.is_undefined() && !value.is_null());
        if !supported {
            return Err(AttendError::Unsupported);
        }
        let geolocation = navigator
            .geolocation()
            .map_err(|_| AttendError::Unsupported)?;

        let options = PositionOptions::new();
        options.set_enable_high_accuracy(true);
        options.set_timeout(POSITION_TIMEOUT_MS);
        options.set_maximum_age(0);

        let mut request_error = None;
        let promise = Promise::new(&mut |resolve, reject| {
            if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
                &resolve,
                Some(&reject),
                &options,
            ) {
                request_error = Some(err);
            }
        });
        if request_error.is_some() {
            return Err(AttendError::Unsupported);
        }

        let position = JsFuture::from(promise).await.map_err(position_error)?;
        let coords = position.unchecked_into::<GeolocationPosition>().coords();

        Ok(Coordinates::new(coords.latitude(), coords.longitude()))
    }
}

fn position_error(err: JsValue) -> AttendError {
    let Some(err) = err.dyn_ref::<GeolocationPositionError>() else {
        return AttendError::PositionUnavailable;
    };
    match err.code() {
        GeolocationPositionError::PERMISSION_DENIED => AttendError::PermissionDenied,
        GeolocationPositionError::TIMEOUT => {
            AttendError::Timeout("Location request timed out. Please try again.".to_string())
        }
        _ => AttendError::PositionUnavailable,
    }
}
