//! # Session persistence contract
//!
//! The signed-in session is two values in durable local key-value storage:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | The opaque bearer token, forwarded verbatim to the backend. |
//! | [`USER_KEY`] (`"user"`) | The cached user profile, serialized as JSON by the caller. |
//!
//! Implementations never interpret either value; (de)serialization of the
//! profile belongs to the API layer. The two values are written together by
//! [`SessionStore::save`] and removed together by [`SessionStore::clear`] —
//! the only sanctioned gap is [`SessionStore::set_token`], used while an
//! OAuth callback token is being verified against the profile endpoint
//! before a user is known.

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key for the serialized user profile.
pub const USER_KEY: &str = "user";

/// Durable key-value storage for the authenticated session.
///
/// Backed by browser `localStorage` on the web ([`crate::LocalStore`]) and by
/// an in-memory map elsewhere ([`crate::MemoryStore`]). All operations are
/// best-effort: a broken storage backend degrades to "no session" rather
/// than failing.
pub trait SessionStore: Clone {
    /// The stored bearer token, if any.
    fn token(&self) -> Option<String>;

    /// Store only the token. Used during the OAuth verification window,
    /// before the profile fetch has confirmed the token is good.
    fn set_token(&self, token: &str);

    /// The cached serialized user profile, if any.
    fn user(&self) -> Option<String>;

    /// Persist token and profile together.
    fn save(&self, token: &str, user_json: &str);

    /// Remove both values. Equivalent to logout.
    fn clear(&self);
}
