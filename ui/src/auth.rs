//! Authentication context and session lifecycle.
//!
//! [`AuthState`] lives in a signal provided by [`AuthProvider`]; views read
//! it through [`use_auth`]. Startup resolution, login, registration, and
//! logout are free functions over the gateway so the lifecycle rules stay in
//! one place (and stay testable off the browser):
//!
//! - an OAuth callback token is stored provisionally, verified against
//!   `/auth/me`, and discarded on failure;
//! - an OAuth callback error never touches the network;
//! - otherwise a previously stored session is restored synchronously, with
//!   no freshness check;
//! - there is exactly one error slot, overwritten on each new attempt.

use api::{ApiClient, ApiError, AuthResponse, LoginRequest, RegisterRequest, User};
use dioxus::prelude::*;
use store::SessionStore;

use crate::client::{make_client, Client};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until startup resolution has finished.
    pub loading: bool,
    /// The single authoritative error slot.
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
            error: None,
        }
    }

    fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
            error: None,
        }
    }

    fn failed(message: &str) -> Self {
        Self {
            user: None,
            loading: false,
            error: Some(message.to_string()),
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the auth signal and resolves the startup
/// session. Wrap the app with this component.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    use_context_provider(|| auth_state);
    use_context_provider(make_client);

    let client = use_context::<Client>();

    // Resolve the session once on mount
    let _init = use_resource(move || {
        let client = client.clone();
        async move {
            let resolved = initialize(&client, current_callback()).await;
            auth_state.set(resolved);
        }
    });

    rsx! {
        {children}
    }
}

/// What the current URL says about an OAuth redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OauthCallback {
    /// `?token=...` — the provider handed back a bearer token to verify.
    Token(String),
    /// `?error=...` — the provider refused; no network call may follow.
    Error(String),
}

/// Parse `?token=` / `?error=` out of a URL query string. A token wins over
/// an error when both are somehow present.
pub fn parse_oauth_callback(query: &str) -> Option<OauthCallback> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut error = None;
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if value.is_empty() {
            continue;
        }
        match key {
            "token" => return Some(OauthCallback::Token(value.to_string())),
            "error" => error = Some(OauthCallback::Error(value.to_string())),
            _ => {}
        }
    }
    error
}

/// Resolve the startup session state. The network is touched only to verify
/// an OAuth callback token; a stored session is restored optimistically.
pub async fn initialize<S: SessionStore>(
    client: &ApiClient<S>,
    callback: Option<OauthCallback>,
) -> AuthState {
    match callback {
        Some(OauthCallback::Token(token)) => {
            // Hold the token provisionally so the profile fetch carries it.
            client.session().set_token(&token);
            match client.me().await {
                Ok(user) => {
                    if let Ok(json) = serde_json::to_string(&user) {
                        client.session().save(&token, &json);
                    }
                    clean_url();
                    AuthState::signed_in(user)
                }
                Err(err) => {
                    tracing::error!("oauth initialization failed: {err}");
                    client.session().clear();
                    AuthState::failed("Authentication failed. Please try again.")
                }
            }
        }
        Some(OauthCallback::Error(reason)) => {
            tracing::error!("oauth callback error: {reason}");
            AuthState::failed("Social login failed. Please try again.")
        }
        None => restore(client),
    }
}

/// Optimistic synchronous restore from the stored token + cached profile.
pub fn restore<S: SessionStore>(client: &ApiClient<S>) -> AuthState {
    let session = client.session();
    match (session.token(), session.user()) {
        (Some(_), Some(user_json)) => match serde_json::from_str::<User>(&user_json) {
            Ok(user) => AuthState::signed_in(user),
            Err(_) => {
                session.clear();
                AuthState::signed_out()
            }
        },
        _ => AuthState::signed_out(),
    }
}

/// `login(email, password)`: on success the token and profile are stored
/// together and the user is returned; any other outcome fails with the
/// server-provided or default message.
pub async fn login<S: SessionStore>(
    client: &ApiClient<S>,
    email: String,
    password: String,
) -> Result<User, ApiError> {
    let response = client.login(&LoginRequest { email, password }).await?;
    match response {
        AuthResponse {
            success: true,
            token: Some(token),
            user: Some(user),
            ..
        } => {
            let json =
                serde_json::to_string(&user).map_err(|e| ApiError::Transport(e.to_string()))?;
            client.session().save(&token, &json);
            Ok(user)
        }
        response => Err(ApiError::Api(or_default(response.message, "Login failed"))),
    }
}

/// `register(...)`: never authenticates the caller — the UI routes back to
/// the login form on success.
pub async fn register<S: SessionStore>(
    client: &ApiClient<S>,
    request: RegisterRequest,
) -> Result<(), ApiError> {
    let response = client.register(&request).await?;
    if response.success {
        Ok(())
    } else {
        Err(ApiError::Api(or_default(
            response.message,
            "Registration failed",
        )))
    }
}

/// Clear the stored session synchronously.
pub fn logout<S: SessionStore>(client: &ApiClient<S>) {
    client.session().clear();
}

fn or_default(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// The current window's query string, when there is a window.
fn current_callback() -> Option<OauthCallback> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        parse_oauth_callback(&search)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Drop the OAuth query parameters from the address bar without reloading.
#[cfg(target_arch = "wasm32")]
fn clean_url() {
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clean_url() {}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn offline_client() -> ApiClient<MemoryStore> {
        // Closed port: any request fails at the transport.
        ApiClient::new("http://127.0.0.1:1", MemoryStore::new())
    }

    #[test]
    fn test_parse_callback_token() {
        assert_eq!(
            parse_oauth_callback("?token=abc123"),
            Some(OauthCallback::Token("abc123".to_string()))
        );
        assert_eq!(
            parse_oauth_callback("token=abc&foo=bar"),
            Some(OauthCallback::Token("abc".to_string()))
        );
    }

    #[test]
    fn test_parse_callback_error() {
        assert_eq!(
            parse_oauth_callback("?error=access_denied"),
            Some(OauthCallback::Error("access_denied".to_string()))
        );
    }

    #[test]
    fn test_parse_callback_token_wins() {
        assert_eq!(
            parse_oauth_callback("?error=denied&token=abc"),
            Some(OauthCallback::Token("abc".to_string()))
        );
    }

    #[test]
    fn test_parse_callback_plain_url() {
        assert_eq!(parse_oauth_callback(""), None);
        assert_eq!(parse_oauth_callback("?view=dashboard"), None);
        assert_eq!(parse_oauth_callback("?token="), None);
    }

    #[tokio::test]
    async fn test_callback_error_stays_unauthenticated_without_network() {
        // An unreachable backend proves no profile fetch happens: a network
        // attempt would produce a transport error state, not this message.
        let client = offline_client();
        let state = initialize(
            &client,
            Some(OauthCallback::Error("access_denied".to_string())),
        )
        .await;

        assert!(!state.is_authenticated());
        assert_eq!(
            state.error.as_deref(),
            Some("Social login failed. Please try again.")
        );
        assert!(client.session().token().is_none());
    }

    #[tokio::test]
    async fn test_callback_token_is_discarded_when_verification_fails() {
        let client = offline_client();
        let state = initialize(
            &client,
            Some(OauthCallback::Token("unverifiable".to_string())),
        )
        .await;

        assert!(!state.is_authenticated());
        assert!(state.error.is_some());
        // The provisional token did not survive
        assert!(client.session().token().is_none());
    }

    #[tokio::test]
    async fn test_restore_without_stored_session() {
        let client = offline_client();
        let state = initialize(&client, None).await;
        assert!(!state.is_authenticated());
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_restore_is_offline_and_optimistic() {
        let client = offline_client();
        client.session().save(
            "stored-token",
            r#"{"id":4,"firstName":"Ada","lastName":"L","email":"ada@x.io"}"#,
        );

        // Works against an unreachable backend: no freshness check.
        let state = initialize(&client, None).await;
        assert!(state.is_authenticated());
        assert_eq!(state.user.unwrap().first_name, "Ada");
    }

    #[tokio::test]
    async fn test_restore_discards_corrupt_profile() {
        let client = offline_client();
        client.session().save("stored-token", "not json");

        let state = initialize(&client, None).await;
        assert!(!state.is_authenticated());
        assert!(client.session().token().is_none());
    }
}
