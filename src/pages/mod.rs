//! Page components for the Empty Nest site.
//!
//! Each page is a variant defined by the sections it mounts.

mod codes;
mod home;

pub use codes::Codes;
pub use home::Home;
