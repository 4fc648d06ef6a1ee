//! Root application component

use dioxus::prelude::*;

use crate::config::AuthConfig;
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    // Timer durations and gating flags are provided once, at the top of the
    // tree, so every page sees the same configuration.
    use_context_provider(AuthConfig::load);

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        Router::<Route> {}
    }
}
