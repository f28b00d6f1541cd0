pub mod auth;
pub mod home;
pub mod library;
pub mod schedule;

pub use auth::AuthPage;
pub use home::HomePage;
pub use library::LibraryPage;
pub use schedule::SchedulePage;
