//! The login screen: form markup, inline errors, and submit feedback.

use dioxus::prelude::*;

use crate::state::{LoginForm, SubmitPhase};

/// Stateful wrapper that owns the signal bundle for one mounted form.
#[component]
pub fn LoginScreen() -> Element {
    let form = use_hook(LoginForm::new);
    rsx! {
        LoginCard { form }
    }
}

/// The form card itself, split from [`LoginScreen`] so headless tests can
/// mount it around a bundle they control.
#[component]
pub fn LoginCard(form: LoginForm) -> Element {
    let mut form = form;
    let phase = form.phase.cloned();

    // A failed request reuses the identity field's error region, but a live
    // validation error always wins.
    let identity_notice = form
        .identity_error
        .cloned()
        .map(|err| err.to_string())
        .or_else(|| form.submit_error.cloned().map(|err| err.to_string()));
    let password_notice = form.password_error.cloned().map(|err| err.to_string());

    rsx! {
        form {
            id: "login-form",
            class: "login-form",
            class: if phase == SubmitPhase::Succeeded { "fade-in" },
            onsubmit: move |evt| {
                evt.prevent_default();
                if form.begin_submit() {
                    spawn(async move { form.resolve_submit().await });
                }
            },

            h1 { class: "login-title", "Welcome back" }
            p { class: "login-subtitle", "Sign in to your account" }

            div {
                class: "form-field",
                class: if form.identity_focused.cloned() { "custom-focus" },
                label { r#for: "identity", "Email or username" }
                input {
                    id: "identity",
                    name: "identity",
                    r#type: "text",
                    placeholder: "you@example.com",
                    autocomplete: "username",
                    value: "{form.identity}",
                    oninput: move |evt| form.input_identity(evt.value()),
                    onfocusin: move |_| form.identity_focused.set(true),
                    onfocusout: move |_| form.identity_focused.set(false),
                }
                if let Some(message) = identity_notice {
                    p { id: "identity-error", class: "error-message", "{message}" }
                }
            }

            div {
                class: "form-field",
                class: if form.password_focused.cloned() { "custom-focus" },
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    name: "password",
                    r#type: "password",
                    placeholder: "••••••••",
                    autocomplete: "current-password",
                    value: "{form.password}",
                    oninput: move |evt| form.input_password(evt.value()),
                    onfocusin: move |_| form.password_focused.set(true),
                    onfocusout: move |_| form.password_focused.set(false),
                }
                if let Some(message) = password_notice {
                    p { id: "password-error", class: "error-message", "{message}" }
                }
            }

            label { class: "remember-row",
                input {
                    id: "remember",
                    name: "remember",
                    r#type: "checkbox",
                    checked: form.remember.cloned(),
                    oninput: move |evt| form.remember.set(evt.checked()),
                }
                "Remember me"
            }

            SubmitButton { phase }
        }
    }
}

/// The submit control. Disabled exactly while the simulated request runs.
#[component]
pub fn SubmitButton(phase: SubmitPhase) -> Element {
    rsx! {
        button {
            id: "submit-button",
            r#type: "submit",
            class: "submit-button",
            class: if phase == SubmitPhase::InFlight { "loading" },
            class: if phase == SubmitPhase::Succeeded { "success" },
            disabled: phase == SubmitPhase::InFlight,
            {phase.label()}
        }
    }
}
