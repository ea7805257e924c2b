//! Browser-facing glue over `web-sys`.
//!
//! Every function here exists on all targets: the browser body is gated
//! behind the `csr` feature and the fallback arm does nothing, so the pure
//! state modules can be unit tested natively without any WASM dependencies.

pub mod clipboard;
pub mod navigate;
pub mod scroll_lock;
pub mod scroll_spy;
pub mod theme_pref;
