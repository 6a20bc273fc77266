//! Small form components shared by the page views.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Inline message banner, green for success and red for errors.
#[component]
pub fn Banner(kind: BannerKind, message: String) -> Element {
    let class = match kind {
        BannerKind::Success => "banner banner-success",
        BannerKind::Error => "banner banner-error",
    };
    rsx! {
        div { class: "{class}", "{message}" }
    }
}

/// Text input with the app styling.
#[component]
pub fn Input(
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] min: String,
    #[props(default = "".to_string())] max: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let input_type = r#type;
    rsx! {
        input {
            class: "input {class}",
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            min: "{min}",
            max: "{max}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Button with the app styling. Without an `onclick` it acts as a form
/// submit button.
#[component]
pub fn Button(
    #[props(default = "".to_string())] class: String,
    #[props(default = "submit".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let button_type = r#type;
    rsx! {
        button {
            class: "btn {class}",
            r#type: "{button_type}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
