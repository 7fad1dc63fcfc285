use gloo::file::callbacks::{read_as_data_url, FileReader};
use web_sys::{File, HtmlImageElement};

use crate::page::set_visible;

/// Reads `file` as a data URL and shows it in `image` once loaded. Dropping
/// the returned reader aborts the read.
pub(crate) fn load_preview(image: &HtmlImageElement, file: File) -> FileReader {
    let image = image.clone();
    let name = file.name();
    let blob = gloo::file::File::from(file);
    read_as_data_url(&blob, move |result| match result {
        Ok(url) => {
            image.set_src(&url);
            set_visible(&image, true);
        }
        Err(err) => {
            gloo::console::warn!("preview read failed", name, err.to_string());
        }
    })
}
