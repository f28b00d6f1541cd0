//! Front-end engine for the IFRI Collection portal.
//!
//! Everything here is UI-agnostic: the remote store and auth provider seams
//! (with REST implementations against the backend-as-a-service project),
//! and the per-page state machines the web crate renders. Pages get their
//! store and auth provider injected, which keeps them testable against the
//! in-memory doubles under `tests/`.

pub mod auth;
pub mod client;
pub mod error;
pub mod library;
pub mod nav;
pub mod schedule;
pub mod session;
pub mod store;
pub mod tracker;

pub use auth::{AuthProvider, MemoryPersistence, RestAuth, SessionPersistence};
pub use client::{BackendClient, SharedSession};
pub use error::{PortalError, PortalResult};
pub use library::{LibraryController, LibraryState, LibraryView};
pub use nav::{NavTarget, Route, active_target};
pub use schedule::{DaySchedule, ScheduleController, ScheduleState};
pub use session::{GateDecision, Notice, SessionState, SignOutOutcome, gate, sign_out};
pub use store::{PortalStore, RestStore, SemesterCounts, TableQuery};
pub use tracker::{FetchOutcome, FetchTicket, RequestTracker};
