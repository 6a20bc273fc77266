use dioxus::prelude::*;
use views::{Login, Profile, Publications, Register, SidebarLayout};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/register")]
    Register {},
    #[route("/login")]
    Login {},
    #[layout(SidebarLayout)]
        #[route("/profile")]
        Profile {},
        #[route("/publications")]
        Publications {},
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(api::ApiClient::new);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::SessionProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    // Registration is the landing page for anonymous users
    if session().is_authenticated() {
        nav.replace(Route::Profile {});
    } else {
        nav.replace(Route::Register {});
    }

    rsx! {}
}
