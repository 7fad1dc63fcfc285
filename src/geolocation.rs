use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use roadwatch_core::{FormError, GeoFix, LocateFailure};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Geolocation, GeolocationPosition, GeolocationPositionError};

pub type LocateCallback = Box<dyn FnOnce(Result<GeoFix, LocateFailure>)>;

/// Single-shot position lookup.
pub trait LocationService {
    /// Starts a lookup and later calls `done` exactly once. Fails
    /// immediately with [`FormError::LocationUnsupported`] when the platform
    /// has no location API, in which case `done` is dropped uncalled.
    fn locate(&self, done: LocateCallback) -> Result<(), FormError>;
}

/// `navigator.geolocation.getCurrentPosition` with platform defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserGeolocation;

fn browser_geolocation() -> Option<Geolocation> {
    let navigator = web_sys::window()?.navigator();
    let value = Reflect::get(&navigator, &JsValue::from_str("geolocation")).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    value.dyn_into::<Geolocation>().ok()
}

impl LocationService for BrowserGeolocation {
    fn locate(&self, done: LocateCallback) -> Result<(), FormError> {
        let geolocation = browser_geolocation().ok_or(FormError::LocationUnsupported)?;
        let done = Rc::new(RefCell::new(Some(done)));
        let finish = {
            let done = done.clone();
            move |result: Result<GeoFix, LocateFailure>| {
                let callback = done.borrow_mut().take();
                if let Some(callback) = callback {
                    callback(result);
                }
            }
        };

        let on_success = {
            let finish = finish.clone();
            Closure::once_into_js(move |position: GeolocationPosition| {
                let coords = position.coords();
                finish(Ok(GeoFix::new(coords.latitude(), coords.longitude())));
            })
        };
        let on_error = {
            let finish = finish.clone();
            Closure::once_into_js(move |error: GeolocationPositionError| {
                finish(Err(LocateFailure::from_code(error.code())));
            })
        };

        if geolocation
            .get_current_position_with_error_callback(
                on_success.unchecked_ref::<Function>(),
                Some(on_error.unchecked_ref::<Function>()),
            )
            .is_err()
        {
            finish(Err(LocateFailure::Unknown(0)));
        }
        Ok(())
    }
}
