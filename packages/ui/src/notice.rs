//! App-wide success/error notice.
//!
//! Pages push a notice before navigating (e.g. "registered, now log
//! in") and the destination page renders it. One notice at a time;
//! submitting any form clears it.

use dioxus::prelude::*;

use crate::components::BannerKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: BannerKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
        }
    }
}

/// Get the current notice slot. Provided by
/// [`crate::SessionProvider`].
pub fn use_notice() -> Signal<Option<Notice>> {
    use_context::<Signal<Option<Notice>>>()
}
