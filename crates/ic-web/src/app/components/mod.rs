pub mod document_card;
pub mod icons;
pub mod layout;
pub mod navbar;
pub mod require_auth;
pub mod schedule_day;
pub mod toast;

pub use document_card::DocumentCard;
pub use layout::Layout;
pub use navbar::NavBar;
pub use require_auth::RequireAuth;
pub use schedule_day::ScheduleDay;
pub use toast::{Toast, ToastMessage, ToastType, use_toast};
