//! Session context and hooks for the UI.
//!
//! The session is a single record of the current authentication state,
//! passed through Dioxus context rather than a process-wide global. It
//! holds the bearer token (or nothing) for the lifetime of the app run;
//! the current page lives in the router, not here.

use dioxus::prelude::*;

use crate::notice::Notice;

/// Authentication state for the application.
///
/// Token absent means unauthenticated; the route guards only ever show
/// the register/login pages in that state, and only the profile and
/// publications pages once a token is stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    /// Store the access token returned by a successful login, verbatim.
    pub fn login(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Drop the token. The next dispatch lands on the login page.
    pub fn logout(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Advisory user id read from the token's payload, if any. Used
    /// only to stamp ownership on new publications.
    pub fn user_id(&self) -> Option<String> {
        self.token.as_deref().and_then(api::extract_user_id)
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session and the app-wide notice.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(SessionState::default);
    use_context_provider(|| session);

    let notice = use_signal(|| Option::<Notice>::None);
    use_context_provider(|| notice);

    rsx! {
        {children}
    }
}

/// Button that clears the session and hands navigation back to the
/// caller (the route type lives in the app crate).
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let mut notice = crate::use_notice();

    let onclick = move |_| {
        session.write().logout();
        notice.set(None);
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unauthenticated() {
        let session = SessionState::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_login_stores_token_verbatim() {
        let mut session = SessionState::default();
        session.login("  tok.with.spaces  ".to_string());
        assert_eq!(session.token(), Some("  tok.with.spaces  "));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_logout_clears_token() {
        let mut session = SessionState::default();
        session.login("tok".to_string());
        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_user_id_requires_decodable_claim() {
        let mut session = SessionState::default();
        assert_eq!(session.user_id(), None);

        session.login("opaque-token".to_string());
        assert_eq!(session.user_id(), None);
    }
}
