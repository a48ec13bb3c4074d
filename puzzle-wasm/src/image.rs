//! Image acquisition: random photo lookup, URL persistence and decoding.

use puzzle_core::LoadError;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlImageElement, Window};

use crate::constants::{ACCESS_KEY_GLOBAL, STORAGE_KEY, UNSPLASH_RANDOM_URL};

#[derive(Debug, Deserialize)]
struct RandomPhoto {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    full: String,
}

pub fn saved_image_url(window: &Window) -> Option<String> {
    let storage = window.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

pub fn save_image_url(window: &Window, url: &str) {
    let Ok(Some(storage)) = window.local_storage() else {
        return;
    };
    if storage.set_item(STORAGE_KEY, url).is_err() {
        log::warn!("could not persist puzzle image url");
    }
}

fn access_key(window: &Window) -> Option<String> {
    js_sys::Reflect::get(window, &JsValue::from_str(ACCESS_KEY_GLOBAL))
        .ok()?
        .as_string()
}

/// Asks Unsplash for a random landscape photo and returns its full-size URL.
pub async fn fetch_random_photo_url(window: &Window) -> Result<String, LoadError> {
    let key = access_key(window)
        .ok_or_else(|| LoadError::Failed(format!("window.{ACCESS_KEY_GLOBAL} is not set")))?;
    let url = format!("{UNSPLASH_RANDOM_URL}&client_id={key}");
    let failed = |what: &str| LoadError::Failed(format!("failed to fetch image: {what}"));
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|_| failed("network error"))?;
    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| failed("unexpected response"))?;
    if !resp.ok() {
        let status = resp.status_text();
        return Err(failed(if status.is_empty() {
            "Unknown error"
        } else {
            status.as_str()
        }));
    }
    let text_promise = resp.text().map_err(|_| failed("unreadable body"))?;
    let text = wasm_bindgen_futures::JsFuture::from(text_promise)
        .await
        .ok()
        .and_then(|v| v.as_string())
        .ok_or_else(|| failed("unreadable body"))?;
    let photo: RandomPhoto =
        serde_json::from_str(&text).map_err(|e| failed(&e.to_string()))?;
    Ok(photo.urls.full)
}

/// Resolves once the browser has decoded the image at `url`.
pub async fn load_image(url: &str) -> Result<HtmlImageElement, String> {
    let img = HtmlImageElement::new().map_err(|_| "failed to create image".to_string())?;
    img.set_cross_origin(Some("anonymous"));
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = wasm_bindgen::closure::Closure::once(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = wasm_bindgen::closure::Closure::once(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("image_load_failed"));
        });
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
    });
    img.set_src(url);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|_| "Failed to load image.".to_string())?;
    img.set_onload(None);
    img.set_onerror(None);
    Ok(img)
}
