use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlImageElement, HtmlInputElement};

pub const UPLOAD_FORM_ID: &str = "uploadForm";
pub const IMAGE_UPLOAD_ID: &str = "imageUpload";
pub const PREVIEW_IMAGE_ID: &str = "previewImage";
pub const LOADING_ID: &str = "loading";
pub const RESULT_TEXT_ID: &str = "resultText";
pub const LOCATION_FORM_ID: &str = "locationForm";
pub const LATITUDE_ID: &str = "latitude";
pub const LONGITUDE_ID: &str = "longitude";
pub const GET_LOCATION_BTN_ID: &str = "getLocationBtn";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("document not available")]
    NoDocument,
    #[error("missing element #{id}")]
    MissingElement { id: &'static str },
    #[error("element #{id} is not a {expected}")]
    UnexpectedElement {
        id: &'static str,
        expected: &'static str,
    },
}

/// Every element the controller touches, resolved once.
#[derive(Clone, Debug)]
pub struct PageElements {
    pub upload_form: HtmlFormElement,
    pub image_upload: HtmlInputElement,
    pub preview_image: HtmlImageElement,
    pub loading: HtmlElement,
    pub result_text: HtmlElement,
    pub location_form: HtmlElement,
    pub latitude: HtmlInputElement,
    pub longitude: HtmlInputElement,
    pub get_location_btn: HtmlElement,
}

impl PageElements {
    pub fn from_window() -> Result<Self, PageError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(PageError::NoDocument)?;
        Self::locate(&document)
    }

    pub fn locate(document: &Document) -> Result<Self, PageError> {
        Ok(Self {
            upload_form: element(document, UPLOAD_FORM_ID, "form")?,
            image_upload: element(document, IMAGE_UPLOAD_ID, "input")?,
            preview_image: element(document, PREVIEW_IMAGE_ID, "img")?,
            loading: element(document, LOADING_ID, "HTML element")?,
            result_text: element(document, RESULT_TEXT_ID, "HTML element")?,
            location_form: element(document, LOCATION_FORM_ID, "HTML element")?,
            latitude: element(document, LATITUDE_ID, "input")?,
            longitude: element(document, LONGITUDE_ID, "input")?,
            get_location_btn: element(document, GET_LOCATION_BTN_ID, "HTML element")?,
        })
    }
}

fn element<T: JsCast>(
    document: &Document,
    id: &'static str,
    expected: &'static str,
) -> Result<T, PageError> {
    document
        .get_element_by_id(id)
        .ok_or(PageError::MissingElement { id })?
        .dyn_into::<T>()
        .map_err(|_| PageError::UnexpectedElement { id, expected })
}

pub(crate) fn set_visible(element: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    set_style(element, "display", display);
}

pub(crate) fn set_color(element: &HtmlElement, color: &str) {
    set_style(element, "color", color);
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        gloo::console::warn!("style update failed", element.id(), property, value, err);
    }
}
