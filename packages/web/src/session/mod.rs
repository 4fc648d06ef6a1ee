//! Auth session controller and its collaborators

mod controller;
mod navigator;
mod redirect;
mod validate;

pub use controller::*;
pub use navigator::*;
pub use redirect::*;
pub use validate::*;
