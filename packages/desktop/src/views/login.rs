//! Login page with the email/password form.

use dioxus::prelude::*;
use ui::{use_notice, use_session, Banner, Button, Input, Notice};

use crate::Route;

/// Login page component for desktop.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let client = use_context::<api::ApiClient>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut notice = use_notice();

    // Already logged in: the only reachable pages are profile and
    // publications
    if session().is_authenticated() {
        nav.replace(Route::Profile {});
    }

    let handle_login = move |evt: FormEvent| {
        let client = client.clone();
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            notice.set(None);

            loading.set(true);
            match client.login(&email(), &password()).await {
                Ok(resp) => {
                    // Store the token exactly as returned
                    session.write().login(resp.access_token);
                    notice.set(Some(Notice::success("Login successful!")));
                    nav.replace(Route::Profile {});
                }
                Err(e) => {
                    tracing::error!("login failed: {e}");
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",

            h1 { "User Login" }
            p { class: "page-subtitle", "Please enter your login details" }

            if let Some(n) = notice() {
                Banner { kind: n.kind, message: n.message }
            }

            form {
                onsubmit: handle_login,
                class: "form",

                if let Some(err) = error() {
                    Banner { kind: ui::BannerKind::Error, message: err }
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
            }

            p {
                class: "page-subtitle",
                "Don't have an account? "
                Link {
                    class: "btn-link",
                    to: Route::Register {},
                    "Go to Register"
                }
            }
        }
    }
}
