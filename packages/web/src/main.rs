//! Authgate - OTP Authorization Web Page
//!
//! Users land here through a redirect link carrying an opaque ticket,
//! request a one-time passcode for their email/phone, verify it, and are
//! sent back to the originating link.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod config;
mod pages;
mod routes;
mod session;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Backend base URL is a deployment-time setting
    if let Ok(url) = std::env::var("AUTHGATE_API_BASE") {
        config::init_api_base(url);
    }

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
