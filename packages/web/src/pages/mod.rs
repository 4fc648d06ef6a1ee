//! Page components

mod auth;

pub use auth::*;
