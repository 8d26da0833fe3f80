//! Object-URL acquisition and release for uploaded file bytes.
//!
//! Wraps the file payload in a `Blob` and generates an object URL for
//! use as an `<img src>`. Every URL created here must be released via
//! [`revoke_file_url`] when the image is no longer displayed, so a
//! session never accumulates stale blob references.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur while creating an object URL.
#[derive(Debug, thiserror::Error)]
pub enum ObjectUrlError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ObjectUrlError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Create an object URL for raw file bytes with the given MIME type.
///
/// # Errors
///
/// Returns [`ObjectUrlError::JsError`] if `Blob` or URL creation fails.
pub fn create_file_url(bytes: &[u8], content_type: &str) -> Result<String, ObjectUrlError> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Revoke an object URL previously created by [`create_file_url`].
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked.
pub fn revoke_file_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
