//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`theme`, `drawer`, `nav`, etc.) so individual
//! components can depend on small focused models. Each module is plain data
//! plus synchronous methods; the browser side only ever mutates it through
//! an `RwSignal` wrapper provided from the root component.

pub mod drawer;
pub mod modal;
pub mod nav;
pub mod share;
pub mod theme;
