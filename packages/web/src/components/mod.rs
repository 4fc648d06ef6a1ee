//! Reusable UI components

mod alert;
mod auth_form;
mod country_select;

pub use alert::*;
pub use auth_form::*;
pub use country_select::*;
