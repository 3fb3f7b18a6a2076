//! # Backend gateway
//!
//! [`ApiClient`] is the single typed request path to the milestone backend.
//! Every call goes through [`ApiClient::request`], which attaches the bearer
//! token from the session store, serializes the JSON body, and maps the
//! response onto the [`ApiError`] taxonomy:
//!
//! - `401` clears the persisted session and fails with
//!   [`ApiError::SessionExpired`] — callers treat it as a forced logout.
//! - `204` yields an empty JSON object instead of failing.
//! - Any other non-2xx fails with the body's `message` field, or a generic
//!   message when the body has none.
//! - Network and parse failures become [`ApiError::Transport`].
//!
//! One best-effort attempt per call: no retry, no timeout, no offline
//! queueing. The caller decides whether to surface the error or try again.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use store::SessionStore;

use crate::error::ApiError;
use crate::models::{
    AuthResponse, CreateMilestoneRequest, LoginRequest, Milestone, RegisterRequest,
    UpdateMilestoneRequest, User,
};

const GENERIC_ERROR: &str = "An error occurred";

/// Bearer-authenticated JSON client for the backend REST contract.
#[derive(Clone, Debug)]
pub struct ApiClient<S: SessionStore> {
    http: reqwest::Client,
    base_url: String,
    session: S,
}

impl<S: SessionStore> ApiClient<S> {
    /// `base_url` is the API root without a trailing slash, e.g.
    /// `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>, session: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    /// The session store this client reads its token from.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Issue one request against the backend and return the parsed JSON body.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let mut req = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header("Accept", "application/json");

        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        let response = req.send().await.map_err(|err| {
            tracing::error!("api request failed: {err}");
            ApiError::from(err)
        })?;
        let status = response.status();

        // 401 is handled globally: the session is gone, full stop.
        if status == StatusCode::UNAUTHORIZED {
            self.session.clear();
            return Err(ApiError::SessionExpired);
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Object(Map::new()));
        }

        let data: Value = match response.json().await {
            Ok(data) => data,
            Err(err) if status.is_success() => {
                tracing::error!("api response parse failed: {err}");
                return Err(ApiError::from(err));
            }
            Err(_) => return Err(ApiError::Api(GENERIC_ERROR.to_string())),
        };

        if !status.is_success() {
            let message = data
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(GENERIC_ERROR);
            return Err(ApiError::Api(message.to_string()));
        }

        Ok(data)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        parse(self.request(Method::GET, path, None).await?)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Transport(e.to_string()))?;
        parse(self.request(method, path, Some(body)).await?)
    }

    /// `POST /auth/login`. Success is signalled in the body, not the status.
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.send(Method::POST, "/auth/login", req).await
    }

    /// `POST /auth/signup`. Never authenticates the caller.
    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.send(Method::POST, "/auth/signup", req).await
    }

    /// `GET /auth/me` — the profile behind the current bearer token.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get("/auth/me").await
    }

    /// `GET /milestones` — the authoritative collection for the signed-in user.
    pub async fn list_milestones(&self) -> Result<Vec<Milestone>, ApiError> {
        self.get("/milestones").await
    }

    /// `POST /milestones`. The server assigns `id` and `createdDate`.
    pub async fn create_milestone(
        &self,
        req: &CreateMilestoneRequest,
    ) -> Result<Milestone, ApiError> {
        self.send(Method::POST, "/milestones", req).await
    }

    /// `PUT /milestones/{id}` — full or partial field replacement.
    pub async fn update_milestone(
        &self,
        id: i64,
        req: &UpdateMilestoneRequest,
    ) -> Result<Milestone, ApiError> {
        self.send(Method::PUT, &format!("/milestones/{id}"), req).await
    }

    /// `DELETE /milestones/{id}` — answers `204 No Content`.
    pub async fn delete_milestone(&self, id: i64) -> Result<(), ApiError> {
        self.request(Method::DELETE, &format!("/milestones/{id}"), None)
            .await?;
        Ok(())
    }
}

fn parse<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Transport(e.to_string()))
}
