//! Theme preference persistence and application.
//!
//! Reads the stored preference from `localStorage` and applies it as the
//! `data-theme` attribute on the `<html>` element. Applying also writes the
//! value back, so the choice survives page loads. Requires a browser
//! environment; outside it both operations fall back to the default.

use crate::state::theme::Theme;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "theme";

/// Read the stored theme preference.
///
/// Returns [`Theme::Dark`] when nothing is stored, the stored value is
/// unrecognized, or there is no browser storage at all.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Theme::default(),
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return Theme::parse(&val);
            }
        }

        Theme::default()
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}

/// Apply `theme` to the document and persist it.
///
/// Sets `data-theme` on the document element and writes the value to
/// `localStorage`. A missing document element is silently skipped.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
