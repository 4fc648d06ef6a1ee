//! Feedback banner

use dioxus::prelude::*;

use crate::session::{Feedback, Severity};

/// Severity-colored message banner
#[component]
pub fn FeedbackAlert(feedback: Feedback) -> Element {
    let colors = match feedback.severity {
        Severity::Success => "bg-green-50 border-green-200 text-green-800",
        Severity::Error => "bg-red-50 border-red-200 text-red-800",
        Severity::Info => "bg-blue-50 border-blue-200 text-blue-800",
        Severity::Warning => "bg-amber-50 border-amber-200 text-amber-800",
    };

    rsx! {
        div {
            class: "mb-4 p-3 border rounded text-sm {colors}",
            "{feedback.message}"
        }
    }
}
