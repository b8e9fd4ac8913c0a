pub mod home;
pub mod not_found;
pub mod session;

pub use home::Home;
pub use not_found::NotFound;
pub use session::SessionDetail;
