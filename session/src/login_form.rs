//! Login Form Controller: submission state behind the login page.
//!
//! `Idle -> Submitting -> Idle` with either a navigation or an error message.
//! Each form instance owns its state; nothing is shared between forms.

use crate::client::SessionClient;
use crate::error::{AuthError, LOGIN_FALLBACK_MESSAGE};
use crate::guard::DASHBOARD_ROUTE;
use crate::transport::Transport;
use crate::types::{Credentials, User};

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Enter both username and password.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Result of one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Login succeeded; navigate to this route.
    Navigate(&'static str),
    /// The attempt failed; the message is in [`LoginForm::error`].
    Failed,
    /// A submission was already in flight.
    Ignored,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    username: String,
    password: String,
    phase: FormPhase,
    error: Option<String>,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Last visible error, cleared when a new submission starts.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { "Signing in..." } else { "Login" }
    }

    /// Enter `Submitting` and hand out the credentials to send.
    ///
    /// Returns `None` while a submission is already in flight, and when a
    /// field is empty (the error is set and the form stays `Idle`).
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_submitting() {
            return None;
        }
        self.error = None;
        match validate_credentials(&self.username, &self.password) {
            Ok(credentials) => {
                self.phase = FormPhase::Submitting;
                Some(credentials)
            }
            Err(message) => {
                self.error = Some(message.to_owned());
                None
            }
        }
    }

    /// Leave `Submitting` with the login result. Always returns to `Idle`.
    pub fn finish(&mut self, result: Result<User, AuthError>) -> SubmitOutcome {
        self.phase = FormPhase::Idle;
        match result {
            Ok(_) => {
                self.error = None;
                SubmitOutcome::Navigate(DASHBOARD_ROUTE)
            }
            Err(e) => {
                self.error = Some(error_message(&e));
                SubmitOutcome::Failed
            }
        }
    }

    /// Run one full submission against `client`.
    pub async fn submit<T: Transport>(&mut self, client: &SessionClient<T>) -> SubmitOutcome {
        let was_submitting = self.is_submitting();
        let Some(credentials) = self.begin_submit() else {
            return if was_submitting { SubmitOutcome::Ignored } else { SubmitOutcome::Failed };
        };
        let result = client.login(&credentials).await;
        self.finish(result)
    }
}

/// Both fields must be non-empty, the same rule as the inputs' `required`
/// attribute. Values are sent exactly as typed; the API decides the rest.
///
/// # Errors
///
/// Returns [`MISSING_CREDENTIALS_MESSAGE`] when either field is empty.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok(Credentials::new(username, password))
}

fn error_message(e: &AuthError) -> String {
    let message = e.message().trim();
    if message.is_empty() { LOGIN_FALLBACK_MESSAGE.to_owned() } else { message.to_owned() }
}
