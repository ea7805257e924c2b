//! # portfolio-client
//!
//! Leptos + WASM interactivity layer for a single-page personal portfolio:
//! theme toggling, the mobile navigation drawer, the copy-link share button,
//! the project-detail modal, scroll-spy navigation highlighting, and smooth
//! in-page anchor navigation.
//!
//! Pure state lives in [`state`] and is tested natively; everything that
//! touches the browser goes through [`util`], where each function carries a
//! no-op fallback so the crate builds and tests without the `csr` feature.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Mount the application into `<body>` and set up logging.
///
/// Called by the Trunk binary entry point once the WASM module loads.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
