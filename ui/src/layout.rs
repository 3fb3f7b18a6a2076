//! Application shell: brand sidebar, navigation between the two views, the
//! signed-in user box, and sign out.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaChartLine, FaListCheck, FaMountain, FaRightFromBracket,
};
use dioxus_free_icons::Icon;

use crate::auth::{logout, use_auth, AuthState};
use crate::client::Client;

/// The two authenticated views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Milestones,
}

/// Navigation shell around the authenticated views.
#[component]
pub fn Layout(active: Page, on_navigate: EventHandler<Page>, children: Element) -> Element {
    let mut auth = use_auth();
    let client = use_context::<Client>();
    let user = auth().user;

    let sign_out = move |_| {
        logout(&client);
        auth.set(AuthState::signed_out());
    };

    rsx! {
        div {
            class: "app-shell",

            aside {
                class: "sidebar",

                div {
                    class: "brand",
                    span { class: "brand-mark", Icon { icon: FaMountain, width: 22, height: 22 } }
                    span { class: "brand-name", "Pathfinder" }
                }

                nav {
                    class: "sidebar-nav",
                    p { class: "nav-caption", "Menu" }
                    NavItem {
                        label: "Dashboard",
                        page: Page::Dashboard,
                        active: active == Page::Dashboard,
                        on_navigate,
                        icon: rsx! { Icon { icon: FaChartLine, width: 18, height: 18 } },
                    }
                    NavItem {
                        label: "Milestones",
                        page: Page::Milestones,
                        active: active == Page::Milestones,
                        on_navigate,
                        icon: rsx! { Icon { icon: FaListCheck, width: 18, height: 18 } },
                    }
                }

                div {
                    class: "sidebar-footer",
                    if let Some(ref user) = user {
                        div {
                            class: "user-box",
                            span { class: "user-initial", "{initial(&user.first_name)}" }
                            div {
                                class: "user-meta",
                                p { class: "user-name", "{user.first_name} {user.last_name}" }
                                p { class: "user-email", "{user.email}" }
                            }
                        }
                    }
                    button {
                        class: "sign-out",
                        onclick: sign_out,
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        span { "Sign Out" }
                    }
                }
            }

            main {
                class: "content",
                {children}
            }
        }
    }
}

#[component]
fn NavItem(
    label: String,
    page: Page,
    active: bool,
    on_navigate: EventHandler<Page>,
    icon: Element,
) -> Element {
    rsx! {
        button {
            class: if active { "nav-item active" } else { "nav-item" },
            onclick: move |_| on_navigate.call(page),
            {icon}
            span { "{label}" }
        }
    }
}

fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "U".to_string())
}
