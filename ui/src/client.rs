//! Platform wiring for the gateways: which session store backs the client
//! and where the backend and AI collaborators live.
//!
//! Both endpoints are compile-time configuration, mirroring the
//! bundler-injected environment of a typical SPA build:
//! `PATHFINDER_API_BASE_URL` for the backend (default
//! `http://localhost:8080/api`) and `GEMINI_API_KEY` for the AI assistant
//! (absent key disables the breakdown flow).

use api::{ApiClient, SuggestionClient};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// The backend gateway as the views see it.
pub type Client = ApiClient<PlatformStore>;

const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

pub fn api_base_url() -> &'static str {
    option_env!("PATHFINDER_API_BASE_URL").unwrap_or(DEFAULT_API_BASE)
}

/// The backend's OAuth entry point for a provider (`"google"`, `"github"`).
/// The provider redirects back to the client with `?token=` or `?error=`.
pub fn oauth_url(provider: &str) -> String {
    let origin = api_base_url()
        .strip_suffix("/api")
        .unwrap_or_else(|| api_base_url());
    format!("{origin}/oauth2/authorization/{provider}")
}

pub fn make_client() -> Client {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        ApiClient::new(api_base_url(), store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        ApiClient::new(api_base_url(), store::MemoryStore::new())
    }
}

pub fn make_suggestion_client() -> SuggestionClient {
    SuggestionClient::new(option_env!("GEMINI_API_KEY").map(str::to_string))
}
