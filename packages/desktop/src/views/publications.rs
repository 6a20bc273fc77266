//! Publications page: list with per-item delete, plus the create form.
//!
//! Creation needs the advisory user id from the token to stamp
//! ownership. If the claim cannot be read the whole page is blocked
//! with an error rather than substituting a default id.

use dioxus::prelude::*;
use ui::{use_notice, use_session, Banner, BannerKind, Button, Input, Notice};

/// Publications page component for desktop.
#[component]
pub fn Publications() -> Element {
    let session = use_session();
    let client = use_context::<api::ApiClient>();

    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut sickness_type = use_signal(String::new);
    let mut files_input = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut creating = use_signal(|| false);
    let mut notice = use_notice();

    // Fresh list on every visit; restarted after each mutation.
    let list_client = client.clone();
    let mut publications = use_resource(move || {
        let client = list_client.clone();
        async move {
            let Some(token) = session().token().map(str::to_string) else {
                return Ok(Vec::new());
            };
            client
                .list_publications(&token)
                .await
                .map_err(|e| e.to_string())
        }
    });

    let delete_client = client.clone();
    let on_delete = use_callback(move |id: String| {
        let client = delete_client.clone();
        spawn(async move {
            error.set(None);
            notice.set(None);
            let Some(token) = session().token().map(str::to_string) else {
                return;
            };
            match client.delete_publication(&token, &id).await {
                Ok(()) => publications.restart(),
                Err(e) => {
                    tracing::error!("publication delete failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    });

    let Some(user_id) = session().user_id() else {
        // The layout redirects anonymous users; this branch is the
        // authenticated-but-unreadable-token case.
        if !session().is_authenticated() {
            return rsx! {};
        }
        return rsx! {
            h1 { "Publications" }
            Banner {
                kind: BannerKind::Error,
                message: "Cannot identify user: failed to decode user ID from token",
            }
        };
    };

    let create_client = client.clone();
    let handle_create = move |evt: FormEvent| {
        let client = create_client.clone();
        let user_id = user_id.clone();
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            notice.set(None);

            let Some(token) = session().token().map(str::to_string) else {
                return;
            };

            let draft = api::NewPublication::new(
                title(),
                content(),
                sickness_type(),
                api::split_files(&files_input()),
                &user_id,
            );

            creating.set(true);
            let created = client.create_publication(&token, &draft).await;
            creating.set(false);
            match created {
                Ok(_) => {
                    notice.set(Some(Notice::success("Publication created successfully!")));
                    title.set(String::new());
                    content.set(String::new());
                    sickness_type.set(String::new());
                    files_input.set(String::new());
                    publications.restart();
                }
                Err(e) => {
                    tracing::error!("publication create failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let list = match &*publications.read() {
        Some(Ok(pubs)) if pubs.is_empty() => rsx! {
            p { class: "page-subtitle", "No publications yet." }
        },
        Some(Ok(pubs)) => {
            let pubs = pubs.clone();
            rsx! {
                for publication in pubs {
                    PublicationCard {
                        key: "{publication.id}",
                        publication: publication.clone(),
                        on_delete: move |id: String| on_delete.call(id),
                    }
                }
            }
        }
        Some(Err(e)) => rsx! {
            Banner { kind: BannerKind::Error, message: e.clone() }
        },
        None => rsx! {
            p { class: "page-subtitle", "Loading publications..." }
        },
    };

    rsx! {
        h1 { "Publications" }

        if let Some(err) = error() {
            Banner { kind: BannerKind::Error, message: err }
        }

        {list}

        h2 { "Create New Publication" }
        form {
            onsubmit: handle_create,
            class: "form",

            Input {
                placeholder: "Title",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }

            textarea {
                class: "textarea",
                placeholder: "Content",
                value: "{content}",
                oninput: move |evt: FormEvent| content.set(evt.value()),
            }

            Input {
                placeholder: "Sickness Type",
                value: sickness_type(),
                oninput: move |evt: FormEvent| sickness_type.set(evt.value()),
            }

            Input {
                placeholder: "Files (comma-separated URLs)",
                value: files_input(),
                oninput: move |evt: FormEvent| files_input.set(evt.value()),
            }

            Button {
                disabled: creating(),
                if creating() { "Creating..." } else { "Create Publication" }
            }
        }
    }
}

/// One publication entry with its delete button.
#[component]
fn PublicationCard(publication: api::Publication, on_delete: EventHandler<String>) -> Element {
    let files = publication.files.join(", ");
    let id = publication.id.clone();

    rsx! {
        div {
            class: "card",
            h3 { "{publication.title}" }
            p { "{publication.content}" }
            p { class: "meta", "Sickness Type: {publication.sickness_type}" }
            p { class: "meta", "Files: {files}" }
            Button {
                class: "btn-danger",
                r#type: "button",
                onclick: move |_| on_delete.call(id.clone()),
                "Delete"
            }
        }
    }
}
