//! # API crate — backend and AI gateways for Pathfinder
//!
//! Everything the Pathfinder frontends need to talk to the outside world:
//! the typed REST gateway for the milestone backend, the Gemini suggestion
//! gateway, the wire data model, and the pure dashboard statistics derived
//! from a milestone collection.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — bearer-authenticated JSON requests against the backend REST contract |
//! | [`error`] | [`ApiError`] — the uniform failure type raised by the gateway |
//! | [`models`] | `User`, `Milestone`, request/response payloads |
//! | [`stats`] | [`DashboardStats`] — derived counts, recomputed per render |
//! | [`suggest`] | [`SuggestionClient`] — Gemini goal breakdown and motivational text |
//!
//! The gateway holds a [`store::SessionStore`] so a `401` can clear the
//! persisted session at the same boundary that detects it.

pub mod client;
pub mod error;
pub mod models;
pub mod stats;
pub mod suggest;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    AuthResponse, CreateMilestoneRequest, LoginRequest, Milestone, RegisterRequest,
    UpdateMilestoneRequest, User,
};
pub use stats::DashboardStats;
pub use suggest::{SuggestError, SuggestedMilestone, SuggestionClient};
