//! The auth session state machine
//!
//! One parameterized controller owns the contact fields, the OTP session
//! (sent flag + deadline-derived countdown), the feedback banner, and the
//! in-flight flags. The async halves of the two backend operations live
//! outside: `begin_*` validates and produces the wire payload, the caller
//! performs the request, `apply_*` folds the outcome back in. Every
//! transition is synchronous, so the UI always observes exactly one state
//! change per response.

use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};

use crate::api::{ApiError, AuthResponse, GenerateRequest, VerifyRequest};
use crate::config::AuthConfig;

use super::navigator::Navigator;
use super::redirect::RedirectContext;
use super::validate::{is_valid_email, is_valid_phone, EMAIL_MIN_LEN, PHONE_MIN_LEN};

pub type ApiOutcome = Result<AuthResponse, ApiError>;

const MISSING_TICKET_MESSAGE: &str = "Missing or invalid redirect link or ticket.";
const INVALID_EMAIL_MESSAGE: &str = "Invalid email format.";
const INVALID_PHONE_MESSAGE: &str = "Phone number must be 7-15 digits.";
const GENERATE_FAILED_MESSAGE: &str = "Something went wrong while requesting a code.";
const VERIFY_FAILED_MESSAGE: &str = "Something went wrong while verifying the code.";
const CODE_EXPIRED_MESSAGE: &str = "The code has expired. Please request a new one.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

/// The single user-visible message; replaced wholesale, never appended to
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub message: String,
    pub severity: Severity,
}

pub struct AuthSession {
    config: AuthConfig,
    redirect: RedirectContext,
    navigator: Rc<dyn Navigator>,

    pub email: String,
    pub email_error: Option<String>,
    pub country_code: String,
    pub phone: String,
    pub phone_error: Option<String>,
    pub auth_code: String,

    pub is_code_sent: bool,
    pub countdown: u32,
    deadline: Option<DateTime<Utc>>,
    resend_deadline: Option<DateTime<Utc>>,
    pub resend_countdown: u32,

    pub feedback: Option<Feedback>,
    pub is_generating: bool,
    pub is_verifying: bool,
}

impl AuthSession {
    pub fn new(config: AuthConfig, redirect: RedirectContext, navigator: Rc<dyn Navigator>) -> Self {
        // A broken entry link is surfaced immediately; whether it also
        // blocks the form is up to `config.require_valid_ticket`.
        let feedback = if !redirect.is_valid {
            Some(Feedback {
                message: MISSING_TICKET_MESSAGE.to_string(),
                severity: Severity::Error,
            })
        } else if config.use_mock_api {
            Some(Feedback {
                message: "Demo mode: codes are simulated.".to_string(),
                severity: Severity::Info,
            })
        } else {
            None
        };

        Self {
            config,
            redirect,
            navigator,
            email: String::new(),
            email_error: None,
            country_code: String::new(),
            phone: String::new(),
            phone_error: None,
            auth_code: String::new(),
            is_code_sent: false,
            countdown: 0,
            deadline: None,
            resend_deadline: None,
            resend_countdown: 0,
            feedback,
            is_generating: false,
            is_verifying: false,
        }
    }

    // ------------------------------------------------------------------
    // Input handlers
    // ------------------------------------------------------------------

    /// Store what the user typed (trimmed); only flag a format error once
    /// the value is long enough to plausibly be complete.
    pub fn handle_email_change(&mut self, value: &str) {
        let value = value.trim();
        self.email = value.to_string();
        self.email_error = (value.len() >= EMAIL_MIN_LEN && !is_valid_email(value))
            .then(|| INVALID_EMAIL_MESSAGE.to_string());
    }

    pub fn handle_country_code_change(&mut self, value: &str) {
        self.country_code = value.trim().to_string();
    }

    pub fn handle_phone_change(&mut self, value: &str) {
        let value = value.trim();
        self.phone = value.to_string();
        self.phone_error = (value.len() >= PHONE_MIN_LEN && !is_valid_phone(value))
            .then(|| INVALID_PHONE_MESSAGE.to_string());
    }

    pub fn handle_auth_code_change(&mut self, value: &str) {
        self.auth_code = value.trim().to_string();
    }

    // ------------------------------------------------------------------
    // Generate-code operation
    // ------------------------------------------------------------------

    /// Validate and open a generate attempt. Returns the wire payload, or
    /// `None` when validation failed or an attempt is already in flight.
    pub fn begin_generate(&mut self) -> Option<GenerateRequest> {
        if self.is_generating {
            return None;
        }
        if self.form_blocked() {
            self.set_feedback(Severity::Error, MISSING_TICKET_MESSAGE);
            return None;
        }
        if !is_valid_email(&self.email) {
            self.email_error = Some(INVALID_EMAIL_MESSAGE.to_string());
            return None;
        }
        if !is_valid_phone(&self.phone) {
            self.phone_error = Some(INVALID_PHONE_MESSAGE.to_string());
            return None;
        }

        self.feedback = None;
        self.is_generating = true;
        Some(GenerateRequest {
            email: self.email.clone(),
            phone: self.wire_phone(),
            ticket: self.redirect.wire_ticket(),
        })
    }

    /// Fold the backend's answer into the session. A fresh success simply
    /// supersedes any still-running countdown.
    pub fn apply_generate(&mut self, outcome: ApiOutcome, now: DateTime<Utc>) {
        self.is_generating = false;

        match outcome {
            Ok(response) => match response.result_code.as_str() {
                "100" => {
                    let message = or_fallback(
                        response.message,
                        format!("Verification code sent to {}.", self.email),
                    );
                    self.set_feedback(Severity::Success, message);
                    self.is_code_sent = true;
                    self.deadline = Some(now + Duration::seconds(self.config.lockdown_secs.into()));
                    self.countdown = self.config.lockdown_secs;
                    self.resend_deadline =
                        Some(now + Duration::seconds(self.config.resend_secs.into()));
                    self.resend_countdown = self.config.resend_secs;
                }
                "200" => self.fail_generate(
                    response.message,
                    "The code could not be created. Please try again.",
                ),
                "300" => self.fail_generate(response.message, "The code could not be delivered."),
                code => {
                    tracing::warn!(%code, "unknown generate result code");
                    self.fail_generate(String::new(), GENERATE_FAILED_MESSAGE);
                }
            },
            Err(err) => {
                tracing::error!(%err, "generate request failed");
                self.fail_generate(String::new(), GENERATE_FAILED_MESSAGE);
            }
        }
    }

    // ------------------------------------------------------------------
    // Verify-code operation
    // ------------------------------------------------------------------

    /// Open a verify attempt. An empty code is a silent no-op; a second
    /// submission while one is in flight is refused.
    pub fn begin_verify(&mut self) -> Option<VerifyRequest> {
        if self.auth_code.is_empty() || self.is_verifying {
            return None;
        }

        self.feedback = None;
        self.is_verifying = true;
        Some(VerifyRequest {
            authorized_code: self.auth_code.clone(),
            email: self.email.clone(),
            phone: self.wire_phone(),
            ticket: self.redirect.wire_ticket(),
        })
    }

    pub fn apply_verify(&mut self, outcome: ApiOutcome) {
        self.is_verifying = false;

        match outcome {
            Ok(response) => match response.result_code.as_str() {
                "100" => {
                    let message = or_fallback(response.message, "Verification successful.".into());
                    self.set_feedback(Severity::Success, message);
                    self.is_code_sent = false;
                    self.deadline = None;
                    self.countdown = 0;
                    if let Some(link) = self.redirect.redirect_link.clone() {
                        self.navigator.navigate(&link);
                    }
                }
                // Wrong code: the session stays open so the user can retype
                "200" => {
                    self.auth_code.clear();
                    self.set_feedback(
                        Severity::Error,
                        or_fallback(response.message, "Wrong code. Please try again.".into()),
                    );
                }
                "300" => self.fail_verify(response.message, CODE_EXPIRED_MESSAGE),
                "400" => self.fail_verify(
                    response.message,
                    "The code was already used. Please request a new one.",
                ),
                "500" => self.fail_verify(
                    response.message,
                    "Too many failed attempts. Please request a new one.",
                ),
                "600" => self.fail_verify(
                    response.message,
                    "This code is no longer valid. Please request a new one.",
                ),
                code => {
                    tracing::warn!(%code, "unknown verify result code");
                    self.fail_verify(String::new(), VERIFY_FAILED_MESSAGE);
                }
            },
            Err(err) => {
                tracing::error!(%err, "verify request failed");
                self.fail_verify(String::new(), VERIFY_FAILED_MESSAGE);
            }
        }
    }

    // ------------------------------------------------------------------
    // Timer
    // ------------------------------------------------------------------

    /// Recompute both countdowns from their wall-clock deadlines. The
    /// Counting -> Expired transition fires exactly once: expiring clears
    /// the deadline and the sent flag, so later ticks fall through.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if let Some(deadline) = self.resend_deadline {
            self.resend_countdown = remaining_secs(deadline, now);
            if self.resend_countdown == 0 {
                self.resend_deadline = None;
            }
        }

        if !self.is_code_sent {
            return;
        }
        let Some(deadline) = self.deadline else {
            return;
        };

        self.countdown = remaining_secs(deadline, now);
        if self.countdown == 0 {
            self.is_code_sent = false;
            self.deadline = None;
            self.resend_deadline = None;
            self.resend_countdown = 0;
            self.set_feedback(Severity::Warning, CODE_EXPIRED_MESSAGE);
        }
    }

    // ------------------------------------------------------------------
    // Reset
    // ------------------------------------------------------------------

    /// Return to the editable state without discarding the typed contact
    /// info. Idempotent.
    pub fn reset_form(&mut self) {
        self.email_error = None;
        self.phone_error = None;
        self.auth_code.clear();
        self.feedback = None;
        self.is_code_sent = false;
        self.deadline = None;
        self.countdown = 0;
        self.resend_deadline = None;
        self.resend_countdown = 0;
    }

    // ------------------------------------------------------------------
    // View helpers
    // ------------------------------------------------------------------

    pub fn form_blocked(&self) -> bool {
        self.config.require_valid_ticket && !self.redirect.is_valid
    }

    /// Contact fields are frozen while a code is live or a request is out
    pub fn inputs_disabled(&self) -> bool {
        self.is_generating || (self.is_code_sent && self.countdown > 0)
    }

    pub fn can_generate(&self) -> bool {
        !self.is_generating
            && !self.form_blocked()
            && !self.email.is_empty()
            && self.email_error.is_none()
            && !self.country_code.is_empty()
            && !self.phone.is_empty()
            && self.phone_error.is_none()
    }

    /// The restart control unlocks once the resend cooldown has elapsed
    pub fn can_restart(&self) -> bool {
        self.is_code_sent && self.resend_countdown == 0
    }

    // ------------------------------------------------------------------

    /// Phone as transmitted: leading zero stripped, dial code prefixed
    fn wire_phone(&self) -> String {
        let digits = self.phone.strip_prefix('0').unwrap_or(&self.phone);
        format!("({}){}", self.country_code, digits)
    }

    fn set_feedback(&mut self, severity: Severity, message: impl Into<String>) {
        self.feedback = Some(Feedback {
            message: message.into(),
            severity,
        });
    }

    fn fail_generate(&mut self, server_message: String, fallback: &str) {
        self.set_feedback(Severity::Error, or_fallback(server_message, fallback.into()));
        self.is_code_sent = false;
        self.deadline = None;
        self.countdown = 0;
    }

    /// Shared reset for every verify outcome that forces regeneration
    fn fail_verify(&mut self, server_message: String, fallback: &str) {
        self.set_feedback(Severity::Error, or_fallback(server_message, fallback.into()));
        self.auth_code.clear();
        self.is_code_sent = false;
        self.deadline = None;
        self.countdown = 0;
        self.resend_deadline = None;
        self.resend_countdown = 0;
    }
}

fn or_fallback(server_message: String, fallback: String) -> String {
    if server_message.is_empty() {
        fallback
    } else {
        server_message
    }
}

fn remaining_secs(deadline: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let millis = (deadline - now).num_milliseconds();
    if millis <= 0 {
        0
    } else {
        ((millis + 999) / 1000) as u32
    }
}
