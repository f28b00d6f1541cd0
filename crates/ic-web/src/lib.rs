//! IFRI Collection web entrypoint and common exports.
//!
//! This crate hosts the Dioxus web UI: the document library and class
//! schedule pages behind the session gate, sharing one navigation bar.
//! All data comes from the backend project through `ic-core`.

pub mod app;
pub mod app_root;

pub use app::{components, pages, routes};
