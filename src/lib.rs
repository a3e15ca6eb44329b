//! A client-side login form: field validation on every keystroke, inline
//! error messages, and a simulated sign-in round trip with loading and
//! success feedback on the submit button.
//!
//! There is no backend; the "request" is a fixed delay that always
//! succeeds.

use dioxus::prelude::*;

pub mod login;
pub mod state;
pub mod validate;

use login::LoginScreen;

const STYLE: Asset = asset!("/assets/main.css");

/// Root component.
pub fn app() -> Element {
    rsx! {
        document::Stylesheet { href: STYLE }
        main { class: "login-shell",
            LoginScreen {}
        }
    }
}
