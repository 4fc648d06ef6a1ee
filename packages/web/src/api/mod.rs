//! Network boundary for the authorization backend

mod client;
mod mock;
mod types;

pub use client::*;
pub use mock::*;
pub use types::*;
