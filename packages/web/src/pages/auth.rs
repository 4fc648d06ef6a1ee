//! OTP authorization page
//!
//! Owns the `AuthSession` signal, drives the 1 s countdown interval while a
//! code is live, and brackets the two backend calls around the controller's
//! `begin_*`/`apply_*` transitions.

use std::rc::Rc;

use chrono::Utc;
use dioxus::prelude::*;

#[cfg(feature = "web")]
use gloo_timers::callback::Interval;

use crate::api::{mock_generate, mock_verify, AuthClient};
use crate::components::{AuthForm, FeedbackAlert};
use crate::config::AuthConfig;
#[cfg(feature = "web")]
use crate::session::BrowserNavigator;
#[cfg(not(feature = "web"))]
use crate::session::NoopNavigator;
use crate::session::{AuthSession, Navigator, RedirectContext};

/// OTP authorization page
#[component]
pub fn AuthPage() -> Element {
    let config = use_context::<AuthConfig>();

    let mut session = use_signal(|| {
        let redirect = current_href()
            .map(|href| RedirectContext::from_href(&href))
            .unwrap_or_default();
        AuthSession::new(config, redirect, page_navigator())
    });

    // One interval per Counting phase: started when a code goes live,
    // replaced on restart, dropped on expiry/reset and on unmount.
    #[cfg(feature = "web")]
    {
        let is_counting = use_memo(move || session.read().is_code_sent);
        let mut interval = use_signal(|| None::<Interval>);
        use_effect(move || {
            if is_counting() {
                interval.set(Some(Interval::new(1_000, move || {
                    session.write().tick(Utc::now());
                })));
            } else {
                interval.set(None);
            }
        });
    }

    let handle_generate = move |_: ()| {
        spawn(async move {
            let Some(request) = session.write().begin_generate() else {
                return;
            };
            let outcome = if config.use_mock_api {
                mock_generate(&request).await
            } else {
                AuthClient::from_config().generate(&request).await
            };
            session.write().apply_generate(outcome, Utc::now());
        });
    };

    let handle_verify = move |_: ()| {
        spawn(async move {
            let Some(request) = session.write().begin_verify() else {
                return;
            };
            let outcome = if config.use_mock_api {
                mock_verify(&request).await
            } else {
                AuthClient::from_config().verify(&request).await
            };
            session.write().apply_verify(outcome);
        });
    };

    let handle_restart = move |_: ()| {
        session.write().reset_form();
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Verify your identity" }
                    p { class: "text-gray-600 text-sm", "We'll send a one-time code to your phone" }
                }

                if let Some(feedback) = session.read().feedback.clone() {
                    FeedbackAlert { feedback }
                }

                AuthForm {
                    session,
                    on_generate: handle_generate,
                    on_verify: handle_verify,
                    on_restart: handle_restart,
                }
            }
        }
    }
}

fn current_href() -> Option<String> {
    #[cfg(feature = "web")]
    if let Some(window) = web_sys::window() {
        if let Ok(href) = window.location().href() {
            return Some(href);
        }
    }
    None
}

fn page_navigator() -> Rc<dyn Navigator> {
    #[cfg(feature = "web")]
    return Rc::new(BrowserNavigator);
    #[cfg(not(feature = "web"))]
    Rc::new(NoopNavigator)
}
