//! Combined login / registration view with the social sign-in entry points.
//! Registration never signs the user in; it flips back to the login form
//! with a success notice instead.

use api::RegisterRequest;
use dioxus::prelude::*;
use ui::icons::{FaGithub, FaGoogle, FaMountain};
use ui::{oauth_url, use_auth, AuthState, Client, Icon};

use crate::Route;

/// One slot for whatever the last attempt produced, success or failure.
#[derive(Clone, PartialEq)]
struct Notice {
    text: String,
    success: bool,
}

impl Notice {
    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }

    fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }
}

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let client = use_context::<Client>();
    let nav = use_navigator();

    let mut is_login = use_signal(|| true);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut busy = use_signal(|| false);

    // Surface OAuth callback failures resolved at startup.
    use_effect(move || {
        if let Some(error) = auth().error {
            notice.set(Some(Notice::error(error)));
        }
    });

    // A restored or fresh session skips this view entirely.
    use_effect(move || {
        if auth().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            notice.set(None);
            if is_login() {
                match ui::auth::login(&client, email(), password()).await {
                    Ok(user) => {
                        auth.set(AuthState {
                            user: Some(user),
                            loading: false,
                            error: None,
                        });
                        nav.replace(Route::Dashboard {});
                    }
                    Err(err) => notice.set(Some(Notice::error(err.to_string()))),
                }
            } else {
                let request = RegisterRequest {
                    first_name: first_name(),
                    last_name: last_name(),
                    email: email(),
                    password: password(),
                };
                match ui::auth::register(&client, request).await {
                    Ok(()) => {
                        is_login.set(true);
                        password.set(String::new());
                        notice.set(Some(Notice::success(
                            "Registration successful! Please login.",
                        )));
                    }
                    Err(err) => notice.set(Some(Notice::error(err.to_string()))),
                }
            }
            busy.set(false);
        });
    };

    let heading = if is_login() {
        "Welcome back"
    } else {
        "Create your account"
    };
    let submit_label = if busy() {
        "Please wait..."
    } else if is_login() {
        "Login"
    } else {
        "Create Account"
    };
    let switch_prompt = if is_login() {
        "Don't have an account?"
    } else {
        "Already have an account?"
    };
    let switch_action = if is_login() { "Register" } else { "Login" };

    rsx! {
        div {
            class: "login-screen",

            aside {
                class: "login-brand",
                span { class: "brand-mark large", Icon { icon: FaMountain, width: 30, height: 30 } }
                h1 { "Pathfinder" }
                p { "Map the route to your goals, one milestone at a time." }
            }

            div {
                class: "login-panel",
                div {
                    class: "login-card",
                    h2 { "{heading}" }

                    if let Some(notice) = notice() {
                        p {
                            class: if notice.success { "notice success" } else { "notice error" },
                            "{notice.text}"
                        }
                    }

                    form {
                        class: "login-form",
                        onsubmit: submit,

                        if !is_login() {
                            div {
                                class: "field-row",
                                div {
                                    class: "field",
                                    label { class: "field-label", "First name" }
                                    input {
                                        value: "{first_name}",
                                        oninput: move |evt| first_name.set(evt.value()),
                                        required: true,
                                    }
                                }
                                div {
                                    class: "field",
                                    label { class: "field-label", "Last name" }
                                    input {
                                        value: "{last_name}",
                                        oninput: move |evt| last_name.set(evt.value()),
                                        required: true,
                                    }
                                }
                            }
                        }

                        div {
                            class: "field",
                            label { class: "field-label", "Email" }
                            input {
                                r#type: "email",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                                required: true,
                            }
                        }
                        div {
                            class: "field",
                            label { class: "field-label", "Password" }
                            input {
                                r#type: "password",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                                required: true,
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "primary-button",
                            disabled: busy(),
                            "{submit_label}"
                        }
                    }

                    div {
                        class: "divider",
                        span { "or continue with" }
                    }

                    div {
                        class: "oauth-row",
                        a {
                            class: "oauth-button",
                            href: oauth_url("google"),
                            Icon { icon: FaGoogle, width: 16, height: 16 }
                            span { "Google" }
                        }
                        a {
                            class: "oauth-button",
                            href: oauth_url("github"),
                            Icon { icon: FaGithub, width: 16, height: 16 }
                            span { "GitHub" }
                        }
                    }

                    p {
                        class: "login-switch",
                        "{switch_prompt} "
                        button {
                            r#type: "button",
                            class: "link-button",
                            onclick: move |_| {
                                is_login.set(!is_login());
                                notice.set(None);
                            },
                            "{switch_action}"
                        }
                    }
                }
            }
        }
    }
}
