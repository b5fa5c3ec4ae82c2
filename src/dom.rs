use log::warn;
use web_sys::{window, File, HtmlElement, Url};
use yew::NodeRef;

use crate::deck::SlideMetrics;
use crate::uploads::Upload;

pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        warn!("no document body, cannot toggle scroll lock");
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if body.style().set_property("overflow", value).is_err() {
        warn!("failed to set body overflow to {:?}", value);
    }
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn slide_metrics(node: &NodeRef) -> SlideMetrics {
    node.cast::<HtmlElement>()
        .map(|el| SlideMetrics {
            scroll_top: el.scroll_top() as f64,
            client_height: el.client_height() as f64,
            scroll_height: el.scroll_height() as f64,
        })
        .unwrap_or_default()
}

pub fn reset_scroll(node: &NodeRef) {
    if let Some(el) = node.cast::<HtmlElement>() {
        el.set_scroll_top(0);
    }
}

pub fn upload_from_file(file: &File) -> Upload {
    Upload::new(file.name(), file.type_(), file.size() as u64)
}

pub fn create_preview(file: File) -> Option<String> {
    match Url::create_object_url_with_blob(&file) {
        Ok(url) => Some(url),
        Err(_) => {
            warn!("could not create preview for {}", file.name());
            None
        }
    }
}

pub fn revoke_preview(upload: &Upload) {
    if let Some(url) = upload.preview_url.as_deref() {
        let _ = Url::revoke_object_url(url);
    }
}
