//! Registration page with the account details form.

use chrono::{Datelike, Local, NaiveDate};
use dioxus::prelude::*;
use ui::{use_notice, use_session, Banner, Button, Input, Notice};

use crate::Route;

const MIN_BIRTH_YEAR: i32 = 1900;
const MIN_DATE: &str = "1900-01-01";

/// Register page component for desktop.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let client = use_context::<api::ApiClient>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    // Defaults to today; the picker range is [1900-01-01, today]
    let mut date_of_birth =
        use_signal(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut notice = use_notice();

    // Authenticated users never see the register page
    if session().is_authenticated() {
        nav.replace(Route::Profile {});
    }

    let max_date = Local::now().date_naive().format("%Y-%m-%d").to_string();

    let handle_register = move |evt: FormEvent| {
        let client = client.clone();
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            notice.set(None);

            let dob = match NaiveDate::parse_from_str(&date_of_birth(), "%Y-%m-%d") {
                Ok(d) => d,
                Err(_) => {
                    error.set(Some("Please enter a valid date of birth".to_string()));
                    return;
                }
            };
            let today = Local::now().date_naive();
            if dob.year() < MIN_BIRTH_YEAR || dob > today {
                error.set(Some(format!(
                    "Date of birth must be between {MIN_DATE} and today"
                )));
                return;
            }

            // Form values pass through to the backend untouched; it
            // does its own validation.
            let req = api::RegisterRequest {
                email: email(),
                password: password(),
                first_name: first_name(),
                last_name: last_name(),
                date_of_birth: dob,
            };

            loading.set(true);
            match client.register(&req).await {
                Ok(_) => {
                    notice.set(Some(Notice::success("User registered successfully!")));
                    nav.replace(Route::Login {});
                }
                Err(e) => {
                    tracing::error!("registration failed: {e}");
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",

            h1 { "User Registration" }
            p { class: "page-subtitle", "Please fill in your details to register" }

            form {
                onsubmit: handle_register,
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

                Input {
                    placeholder: "First Name",
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }

                Input {
                    placeholder: "Last Name",
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }

                Input {
                    r#type: "date",
                    min: MIN_DATE.to_string(),
                    max: max_date,
                    value: date_of_birth(),
                    oninput: move |evt: FormEvent| date_of_birth.set(evt.value()),
                }

                Button {
                    disabled: loading(),
                    if loading() { "Registering..." } else { "Register" }
                }
            }

            p {
                class: "page-subtitle",
                "Already have an account? "
                Link {
                    class: "btn-link",
                    to: Route::Login {},
                    "Go to Login"
                }
            }
        }
    }
}
