use dioxus::prelude::*;

use ui::{use_auth, AuthProvider, MilestonesProvider};
use views::{Dashboard, Login, Milestones};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/milestones")]
    Milestones {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            MilestonesProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to the dashboard; the auth guard bounces from there if the
/// user is signed out.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

/// Route unauthenticated visitors to the login view once the startup
/// session resolution has finished.
#[component]
fn Guard(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if auth().loading {
        return rsx! {
            div { class: "boot-screen",
                span { class: "spinner" }
            }
        };
    }

    if !auth().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
