//! This crate contains all shared UI for the Pathfinder workspace: the
//! authentication context, the milestone list controller, and the widgets
//! the views compose.

pub mod auth;
pub mod client;
pub mod components;
pub mod layout;
pub mod milestones;

pub use auth::{use_auth, AuthProvider, AuthState};
pub use client::{make_client, make_suggestion_client, oauth_url, Client};
pub use layout::{Layout, Page};
pub use milestones::{use_milestones, MilestonesProvider, MilestonesState};

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaGoogle};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
