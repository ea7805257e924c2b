//! Background scroll suppression while the project modal is open.

/// Lock or unlock page scrolling by setting `overflow: hidden` on `<body>`.
///
/// A missing body is silently skipped.
pub fn set(locked: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let style = body.style();
            if locked {
                let _ = style.set_property("overflow", "hidden");
            } else {
                let _ = style.remove_property("overflow");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}
