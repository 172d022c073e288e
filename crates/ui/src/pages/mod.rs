//! Page Components for unidoc
//!
//! ## Available Pages
//!
//! - **UsersPage**: Staff accounts with create and delete flows
//!

pub mod users;

pub use users::UsersPage;
