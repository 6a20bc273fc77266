//! Layout for the authenticated pages: sidebar navigation plus the
//! app-wide notice banner above the page content.

use dioxus::prelude::*;
use ui::{use_notice, use_session, Banner, LogoutButton};

use crate::Route;

/// The one page the sidebar links to from the current one. The profile
/// page links forward to publications, the publications page only back
/// to profile; logout is always present and handled separately.
fn nav_destination(route: &Route) -> Option<(Route, &'static str)> {
    match route {
        Route::Profile {} => Some((Route::Publications {}, "Publications")),
        Route::Publications {} => Some((Route::Profile {}, "Profile")),
        _ => None,
    }
}

#[component]
pub fn SidebarLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let notice = use_notice();

    // Without a token the only reachable pages are register and login
    if !session().is_authenticated() {
        nav.replace(Route::Login {});
    }

    rsx! {
        div {
            class: "layout",

            aside {
                class: "sidebar",
                h2 { class: "sidebar-title", "Navigation" }
                if let Some((target, label)) = nav_destination(&route) {
                    button {
                        class: "btn",
                        onclick: move |_| { nav.push(target.clone()); },
                        "{label}"
                    }
                }
                LogoutButton {
                    class: "btn",
                    on_logout: move |_| { nav.replace(Route::Login {}); },
                }
            }

            main {
                class: "content",
                if let Some(n) = notice() {
                    Banner { kind: n.kind, message: n.message }
                }
                Outlet::<Route> {}
            }
        }
    }
}
