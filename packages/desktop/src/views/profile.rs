//! Profile page: a fresh fetch of the remote profile pre-fills the
//! edit form; a successful update stays on the page and re-fetches.

use dioxus::prelude::*;
use ui::{use_notice, use_session, Banner, Button, Input, Notice};

/// Profile page component for desktop.
#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let client = use_context::<api::ApiClient>();

    let mut email = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut notice = use_notice();

    // Fetch fresh on every visit and pre-fill the form when it lands.
    // The profile is never cached across renders.
    let fetch_client = client.clone();
    let mut profile_load = use_resource(move || {
        let client = fetch_client.clone();
        async move {
            let Some(token) = session().token().map(str::to_string) else {
                return;
            };
            match client.get_profile(&token).await {
                Ok(profile) => {
                    email.set(profile.email);
                    first_name.set(profile.fullname.first_name);
                    last_name.set(profile.fullname.last_name);
                }
                Err(e) => {
                    tracing::error!("profile fetch failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        }
    });

    let handle_update = move |evt: FormEvent| {
        let client = client.clone();
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            notice.set(None);

            let Some(token) = session().token().map(str::to_string) else {
                return;
            };

            saving.set(true);
            let updated = client
                .update_profile(&token, &email(), &first_name(), &last_name())
                .await;
            saving.set(false);
            match updated {
                Ok(_) => {
                    notice.set(Some(Notice::success("Profile updated successfully!")));
                    profile_load.restart();
                }
                Err(e) => {
                    tracing::error!("profile update failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        h1 { "User Profile" }

        form {
            onsubmit: handle_update,
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
                placeholder: "First Name",
                value: first_name(),
                oninput: move |evt: FormEvent| first_name.set(evt.value()),
            }

            Input {
                placeholder: "Last Name",
                value: last_name(),
                oninput: move |evt: FormEvent| last_name.set(evt.value()),
            }

            Button {
                disabled: saving(),
                if saving() { "Updating..." } else { "Update Profile" }
            }
        }
    }
}
