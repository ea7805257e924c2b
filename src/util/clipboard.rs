//! Clipboard access for the share button.
//!
//! Client-side (csr): real clipboard write via the async Clipboard API.
//! Elsewhere: a stub returning an error, since the clipboard is only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

/// Copy the current page URL to the system clipboard.
///
/// # Errors
///
/// Returns an error string if there is no browser context, the page URL
/// cannot be read, or the clipboard write is rejected (for example when
/// the user denied the permission).
pub async fn copy_current_url() -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or("no window")?;
        let href = window
            .location()
            .href()
            .map_err(|_| "page URL unavailable".to_owned())?;
        let promise = window.navigator().clipboard().write_text(&href);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("clipboard write rejected: {e:?}"))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}
