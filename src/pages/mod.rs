//! Pages
//!
//! One component per client route.

pub mod admin;
mod login;
pub mod staff;

pub use login::LoginPage;
