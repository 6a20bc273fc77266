//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod components;
pub use components::{Banner, BannerKind, Button, Input};

mod notice;
pub use notice::{use_notice, Notice};

mod session;
pub use session::{use_session, LogoutButton, SessionProvider, SessionState};
