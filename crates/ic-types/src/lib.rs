//! Shared type definitions for the IFRI Collection portal.
//!
//! These are the read-only snapshots the web front end receives from the
//! remote store, plus the category enums that drive the tabbed pages. The
//! crate has no platform dependencies so it compiles for both native tests
//! and the `wasm32` browser build.

pub mod auth;
pub mod category;
pub mod config;
pub mod document;
pub mod schedule;

pub use auth::{AuthSession, AuthUser, SignInRequest};
pub use category::{CategoryError, Semester, StudyYear};
pub use config::{ConfigError, PortalConfig};
pub use document::{Document, DocumentType};
pub use schedule::{ScheduleEntry, Weekday, format_time};
