//! The form's reactive state and the simulated sign-in round trip.

use std::time::Duration;

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use thiserror::Error;

use crate::validate::{check_identity, check_password, IdentityError, PasswordError};

/// How long the pretend backend takes to answer.
pub const LOGIN_DELAY: Duration = Duration::from_millis(1500);

/// Lifecycle of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// The simulated request is running and the control is disabled.
    InFlight,
    Succeeded,
}

impl SubmitPhase {
    /// Label shown on the submit button.
    pub fn label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Sign in",
            SubmitPhase::InFlight => "Signing in…",
            SubmitPhase::Succeeded => "✓ Success!",
        }
    }
}

/// Failure reported by the authentication stand-in. The stand-in never
/// fails today, but the submit flow still settles this arm the way a real
/// client would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("An error occurred. Please try again.")]
pub struct AuthError;

/// Every signal backing the login form. `Copy`, so event handlers and
/// spawned tasks can capture it freely.
#[derive(Clone, Copy, PartialEq)]
pub struct LoginForm {
    pub identity: Signal<String>,
    pub password: Signal<String>,
    pub identity_error: Signal<Option<IdentityError>>,
    pub password_error: Signal<Option<PasswordError>>,
    /// Set when the simulated request itself fails; shown on the identity
    /// field's error region, like the form it replaces did.
    pub submit_error: Signal<Option<AuthError>>,
    pub identity_focused: Signal<bool>,
    pub password_focused: Signal<bool>,
    pub remember: Signal<bool>,
    pub phase: Signal<SubmitPhase>,
}

impl LoginForm {
    /// Create the signal bundle. Must run inside a scope, e.g.
    /// `use_hook(LoginForm::new)`.
    pub fn new() -> Self {
        Self {
            identity: Signal::new(String::new()),
            password: Signal::new(String::new()),
            identity_error: Signal::new(None),
            password_error: Signal::new(None),
            submit_error: Signal::new(None),
            identity_focused: Signal::new(false),
            password_focused: Signal::new(false),
            remember: Signal::new(false),
            phase: Signal::new(SubmitPhase::Idle),
        }
    }

    /// Store a new identity value and refresh its inline error.
    pub fn input_identity(&mut self, value: String) {
        self.identity_error.set(check_identity(&value).err());
        self.identity.set(value);
    }

    /// Store a new password value and refresh its inline error.
    pub fn input_password(&mut self, value: String) {
        self.password_error.set(check_password(&value).err());
        self.password.set(value);
    }

    /// Re-run both validations, surfacing every error at once.
    pub fn validate_all(&mut self) -> bool {
        let identity_error = check_identity(&self.identity.peek()).err();
        let password_error = check_password(&self.password.peek()).err();
        let ok = identity_error.is_none() && password_error.is_none();
        self.identity_error.set(identity_error);
        self.password_error.set(password_error);
        ok
    }

    pub fn in_flight(&self) -> bool {
        *self.phase.read() == SubmitPhase::InFlight
    }

    /// Gate for the submit handler. Returns `true` only when validation
    /// passes, flipping the control into its loading state; the caller is
    /// then expected to drive [`LoginForm::resolve_submit`].
    pub fn begin_submit(&mut self) -> bool {
        if *self.phase.peek() == SubmitPhase::InFlight {
            return false;
        }
        self.submit_error.set(None);
        if !self.validate_all() {
            return false;
        }
        self.phase.set(SubmitPhase::InFlight);
        true
    }

    /// Await the simulated backend call and settle the submit control.
    /// The loading state is cleared no matter how the call ends.
    pub async fn resolve_submit(&mut self) {
        let identity = self.identity.peek().trim().to_string();
        let remember = *self.remember.peek();

        match authenticate().await {
            Ok(()) => {
                info!(%identity, remember, "login successful");
                self.phase.set(SubmitPhase::Succeeded);
            }
            Err(err) => {
                error!(%err, "login failed");
                self.submit_error.set(Some(err));
                self.phase.set(SubmitPhase::Idle);
            }
        }
    }
}

/// Stand-in for a backend round trip: a fixed delay, then success.
async fn authenticate() -> Result<(), AuthError> {
    sleep(LOGIN_DELAY).await;
    Ok(())
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Signals need a live scope, so each test body runs inside a throwaway
    // component in a rebuilt VirtualDom.
    fn in_component(check: fn()) {
        let mut dom = VirtualDom::new_with_props(
            |check: fn()| {
                check();
                rsx! { "" }
            },
            check,
        );
        dom.rebuild_in_place();
    }

    #[test]
    fn starts_idle_with_no_errors() {
        in_component(|| {
            let form = LoginForm::new();
            assert_eq!(*form.phase.peek(), SubmitPhase::Idle);
            assert_eq!(*form.identity_error.peek(), None);
            assert_eq!(*form.password_error.peek(), None);
            assert!(!*form.remember.peek());
            assert!(!form.in_flight());
        });
    }

    #[test]
    fn input_revalidates_on_every_change() {
        in_component(|| {
            let mut form = LoginForm::new();

            form.input_identity("ab".to_string());
            assert_eq!(*form.identity_error.peek(), Some(IdentityError::Invalid));
            form.input_identity("abc".to_string());
            assert_eq!(*form.identity_error.peek(), None);
            form.input_identity(String::new());
            assert_eq!(*form.identity_error.peek(), Some(IdentityError::Required));

            form.input_password("12345".to_string());
            assert_eq!(*form.password_error.peek(), Some(PasswordError::TooShort));
            form.input_password("123456".to_string());
            assert_eq!(*form.password_error.peek(), None);
        });
    }

    #[test]
    fn submit_with_empty_fields_surfaces_required_errors() {
        in_component(|| {
            let mut form = LoginForm::new();
            assert!(!form.begin_submit());
            assert_eq!(*form.identity_error.peek(), Some(IdentityError::Required));
            assert_eq!(*form.password_error.peek(), Some(PasswordError::Required));
            assert_eq!(*form.phase.peek(), SubmitPhase::Idle);
        });
    }

    #[test]
    fn submit_with_one_bad_field_stays_idle() {
        in_component(|| {
            let mut form = LoginForm::new();
            form.input_identity("user@example.com".to_string());
            form.input_password("123".to_string());
            assert!(!form.begin_submit());
            assert_eq!(*form.identity_error.peek(), None);
            assert_eq!(*form.password_error.peek(), Some(PasswordError::TooShort));
            assert_eq!(*form.phase.peek(), SubmitPhase::Idle);
        });
    }

    #[test]
    fn valid_submit_flips_to_in_flight() {
        in_component(|| {
            let mut form = LoginForm::new();
            form.input_identity("user@example.com".to_string());
            form.input_password("hunter42".to_string());
            assert!(form.begin_submit());
            assert!(form.in_flight());
        });
    }

    #[test]
    fn a_second_submit_is_ignored_while_in_flight() {
        in_component(|| {
            let mut form = LoginForm::new();
            form.input_identity("someone".to_string());
            form.input_password("longenough".to_string());
            assert!(form.begin_submit());
            assert!(!form.begin_submit());
            assert!(form.in_flight());
        });
    }
}
