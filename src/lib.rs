//! Road report page controller.
//!
//! Wires the upload form, the image preview and the location button of the
//! report page. Analysis is simulated: a fixed delay followed by a coin flip.

mod controller;
mod geolocation;
mod notify;
mod page;
mod preview;
mod random;
mod settings_store;

use std::cell::RefCell;

use gloo::events::EventListener;

pub use controller::{ControllerDeps, FormController};
pub use geolocation::{BrowserGeolocation, LocateCallback, LocationService};
pub use notify::{DialogNotifier, Notifier};
pub use page::{PageElements, PageError};
pub use random::MathRandom;
pub use settings_store::load_analysis_settings;

thread_local! {
    static MOUNTED: RefCell<Option<FormController>> = RefCell::new(None);
}

/// Mounts the controller once the document has been parsed.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        gloo::console::error!("roadwatch: no document");
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| mount_page()).forget();
    } else {
        mount_page();
    }
}

fn mount_page() {
    match PageElements::from_window() {
        Ok(page) => {
            let controller = FormController::mount(page, ControllerDeps::browser());
            gloo::console::log!(
                "roadwatch: mounted, analysis delay ms",
                controller.settings().delay_ms
            );
            MOUNTED.with(|slot| {
                *slot.borrow_mut() = Some(controller);
            });
        }
        Err(err) => {
            gloo::console::error!("roadwatch: mount failed", err.to_string());
        }
    }
}
