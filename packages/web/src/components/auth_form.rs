//! The OTP request/verify form

use dioxus::prelude::*;

use crate::session::AuthSession;

use super::country_select::CountrySelect;

#[component]
pub fn AuthForm(
    mut session: Signal<AuthSession>,
    on_generate: EventHandler<()>,
    on_verify: EventHandler<()>,
    on_restart: EventHandler<()>,
) -> Element {
    let state = session.read();

    let blocked = state.form_blocked();
    let inputs_disabled = blocked || state.inputs_disabled();
    let show_generate = !state.is_code_sent || state.countdown == 0;

    rsx! {
        form {
            onsubmit: move |e: Event<FormData>| e.prevent_default(),

            // Email
            div {
                class: "mb-4",
                label {
                    class: "block text-sm font-medium text-gray-700 mb-2",
                    "Email"
                }
                input {
                    r#type: "email",
                    value: "{state.email}",
                    oninput: move |e| session.write().handle_email_change(&e.value()),
                    placeholder: "name@example.com",
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-amber-500 disabled:opacity-50",
                    disabled: inputs_disabled
                }
                if let Some(error) = state.email_error.as_deref() {
                    p { class: "mt-1 text-xs text-red-600", "{error}" }
                }
            }

            // Country code + phone
            div {
                class: "mb-4",
                label {
                    class: "block text-sm font-medium text-gray-700 mb-2",
                    "Phone"
                }
                div {
                    class: "flex gap-2",
                    CountrySelect {
                        value: state.country_code.clone(),
                        disabled: inputs_disabled,
                        on_change: move |code: String| session.write().handle_country_code_change(&code),
                    }
                    input {
                        r#type: "tel",
                        value: "{state.phone}",
                        oninput: move |e| session.write().handle_phone_change(&e.value()),
                        placeholder: "0912345678",
                        class: "flex-1 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-amber-500 disabled:opacity-50",
                        disabled: inputs_disabled
                    }
                }
                if let Some(error) = state.phone_error.as_deref() {
                    p { class: "mt-1 text-xs text-red-600", "{error}" }
                }
            }

            if show_generate {
                button {
                    r#type: "button",
                    class: "w-full bg-amber-700 text-white py-2 px-4 rounded-md hover:bg-amber-800 focus:outline-none focus:ring-2 focus:ring-amber-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: !state.can_generate(),
                    onclick: move |_| on_generate.call(()),
                    if state.is_generating { "Sending..." } else { "Send verification code" }
                }
            } else {
                button {
                    r#type: "button",
                    class: "w-full bg-stone-100 text-stone-700 py-2 px-4 rounded-md hover:bg-stone-200 focus:outline-none focus:ring-2 focus:ring-stone-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: !state.can_restart(),
                    onclick: move |_| on_restart.call(()),
                    if state.resend_countdown > 0 {
                        "Edit info & resend ({state.resend_countdown}s)"
                    } else {
                        "Edit info & resend"
                    }
                }
            }

            if state.is_code_sent {
                div {
                    class: "mt-4",
                    label {
                        class: "block text-sm font-medium text-gray-700 mb-2",
                        "Verification code"
                    }
                    input {
                        r#type: "text",
                        value: "{state.auth_code}",
                        oninput: move |e| session.write().handle_auth_code_change(&e.value()),
                        placeholder: "Enter the code you received",
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-amber-500"
                    }
                    p {
                        class: "mt-1 text-xs text-gray-500",
                        "Code expires in {state.countdown}s"
                    }
                    button {
                        r#type: "button",
                        class: "mt-4 w-full bg-amber-700 text-white py-2 px-4 rounded-md hover:bg-amber-800 focus:outline-none focus:ring-2 focus:ring-amber-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: state.is_verifying,
                        onclick: move |_| on_verify.call(()),
                        if state.is_verifying { "Verifying..." } else { "Verify" }
                    }
                }
            }
        }
    }
}
