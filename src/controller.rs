use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use gloo::file::callbacks::FileReader;
use gloo::timers::future::TimeoutFuture;
use roadwatch_core::{
    AnalysisSettings, CoinFlip, FormError, FormSnapshot, GeoFix, RequestToken,
    SubmissionSession, UniformSource, ANALYZING_COLOR, ANALYZING_TEXT,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::geolocation::{BrowserGeolocation, LocationService};
use crate::notify::{DialogNotifier, Notifier};
use crate::page::{set_color, set_visible, PageElements};
use crate::preview::load_preview;
use crate::random::MathRandom;
use crate::settings_store::load_analysis_settings;

/// Platform services the controller talks to.
pub struct ControllerDeps {
    pub notifier: Rc<dyn Notifier>,
    pub location: Rc<dyn LocationService>,
    pub source: Box<dyn UniformSource>,
    pub settings: AnalysisSettings,
}

impl ControllerDeps {
    pub fn browser() -> Self {
        Self {
            notifier: Rc::new(DialogNotifier),
            location: Rc::new(BrowserGeolocation),
            source: Box::new(MathRandom),
            settings: load_analysis_settings(),
        }
    }
}

struct Inner {
    page: PageElements,
    session: RefCell<SubmissionSession>,
    coin: RefCell<CoinFlip<Box<dyn UniformSource>>>,
    notifier: Rc<dyn Notifier>,
    location: Rc<dyn LocationService>,
    settings: AnalysisSettings,
    preview_read: RefCell<Option<FileReader>>,
}

/// Owns the page wiring. Dropping it detaches every listener; completions
/// still in flight become no-ops.
pub struct FormController {
    inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

impl FormController {
    pub fn mount(page: PageElements, deps: ControllerDeps) -> Self {
        let inner = Rc::new(Inner {
            page,
            session: RefCell::new(SubmissionSession::new()),
            coin: RefCell::new(CoinFlip::new(deps.source)),
            notifier: deps.notifier,
            location: deps.location,
            settings: deps.settings,
            preview_read: RefCell::new(None),
        });

        let on_change = {
            let weak = Rc::downgrade(&inner);
            EventListener::new(&inner.page.image_upload, "change", move |_| {
                if let Some(inner) = weak.upgrade() {
                    inner.image_selected();
                }
            })
        };
        let on_submit = {
            let weak = Rc::downgrade(&inner);
            EventListener::new_with_options(
                &inner.page.upload_form,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    if let Some(inner) = weak.upgrade() {
                        Inner::submitted(&inner);
                    }
                },
            )
        };
        let on_locate = {
            let weak = Rc::downgrade(&inner);
            EventListener::new(&inner.page.get_location_btn, "click", move |_| {
                if let Some(inner) = weak.upgrade() {
                    Inner::locate_requested(&inner);
                }
            })
        };

        Self {
            inner,
            _listeners: vec![on_change, on_submit, on_locate],
        }
    }

    pub fn page(&self) -> &PageElements {
        &self.inner.page
    }

    pub fn settings(&self) -> AnalysisSettings {
        self.inner.settings
    }
}

impl Inner {
    fn selected_file(&self) -> Option<File> {
        self.page.image_upload.files().and_then(|files| files.get(0))
    }

    fn image_selected(&self) {
        let Some(file) = self.selected_file() else {
            return;
        };
        let reader = load_preview(&self.page.preview_image, file);
        *self.preview_read.borrow_mut() = Some(reader);
    }

    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            has_image: self.selected_file().is_some(),
            latitude: self.page.latitude.value(),
            longitude: self.page.longitude.value(),
        }
    }

    fn submitted(this: &Rc<Self>) {
        let result = this.session.borrow_mut().submit(&this.snapshot());
        let (token, submission) = match result {
            Ok(accepted) => accepted,
            Err(err) => {
                gloo::console::log!("submission rejected", err.to_string());
                this.notifier.notify(&err);
                return;
            }
        };
        gloo::console::log!(
            "analysis started",
            token.get() as f64,
            submission.latitude,
            submission.longitude
        );
        set_visible(&this.page.loading, true);
        this.page.result_text.set_inner_text(ANALYZING_TEXT);
        set_color(&this.page.result_text, ANALYZING_COLOR);

        let delay = this.settings.delay_ms;
        let weak = Rc::downgrade(this);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if let Some(inner) = weak.upgrade() {
                inner.analysis_finished(token);
            }
        });
    }

    fn analysis_finished(&self, token: RequestToken) {
        if self.session.borrow().pending() != Some(token) {
            gloo::console::log!("stale analysis ignored", token.get() as f64);
            return;
        }
        let outcome = self.coin.borrow_mut().flip();
        self.session.borrow_mut().resolve(token, outcome);
        set_visible(&self.page.loading, false);
        self.page.result_text.set_inner_html(&outcome.markup());
        set_color(&self.page.result_text, outcome.color());
        gloo::console::log!("analysis finished", outcome.label());
    }

    fn locate_requested(this: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(this);
        let started = this.location.locate(Box::new(move |result| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            match result {
                Ok(fix) => inner.apply_fix(fix),
                Err(reason) => {
                    gloo::console::warn!("location lookup failed", reason.to_string());
                    inner.notifier.notify(&FormError::LocationFailed(reason));
                }
            }
        }));
        if let Err(err) = started {
            gloo::console::warn!("location unavailable");
            this.notifier.notify(&err);
        }
    }

    fn apply_fix(&self, fix: GeoFix) {
        self.page.latitude.set_value(&fix.latitude_text());
        self.page.longitude.set_value(&fix.longitude_text());
    }
}
