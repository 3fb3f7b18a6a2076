//! Milestone list controller.
//!
//! Owns the in-memory collection for the signed-in user. Every mutation is
//! the request followed unconditionally by a full refetch — the list held
//! here is always whatever the backend last returned, never an optimistic
//! local edit. On failure the previously rendered list is left in place.

use api::{ApiClient, ApiError, CreateMilestoneRequest, Milestone, UpdateMilestoneRequest};
use dioxus::prelude::*;
use store::SessionStore;

/// The collection and its fetch indicator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MilestonesState {
    pub items: Vec<Milestone>,
    pub loading: bool,
}

/// Get the milestone collection signal.
pub fn use_milestones() -> Signal<MilestonesState> {
    use_context::<Signal<MilestonesState>>()
}

/// Provider component that owns the collection signal.
#[component]
pub fn MilestonesProvider(children: Element) -> Element {
    let state = use_signal(MilestonesState::default);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Replace the collection with the backend's current list.
pub async fn refresh<S: SessionStore>(
    client: &ApiClient<S>,
    mut state: Signal<MilestonesState>,
) -> Result<(), ApiError> {
    state.write().loading = true;
    let result = client.list_milestones().await;
    let mut current = state.write();
    current.loading = false;
    match result {
        Ok(items) => {
            current.items = items;
            Ok(())
        }
        Err(err) => {
            tracing::error!("milestone fetch failed: {err}");
            Err(err)
        }
    }
}

/// Create, then refetch. The returned collection is the authoritative one.
pub async fn create<S: SessionStore>(
    client: &ApiClient<S>,
    state: Signal<MilestonesState>,
    request: CreateMilestoneRequest,
) -> Result<(), ApiError> {
    client.create_milestone(&request).await?;
    refresh(client, state).await
}

/// Update, then refetch.
pub async fn update<S: SessionStore>(
    client: &ApiClient<S>,
    state: Signal<MilestonesState>,
    id: i64,
    request: UpdateMilestoneRequest,
) -> Result<(), ApiError> {
    client.update_milestone(id, &request).await?;
    refresh(client, state).await
}

/// Delete, then refetch.
pub async fn remove<S: SessionStore>(
    client: &ApiClient<S>,
    state: Signal<MilestonesState>,
    id: i64,
) -> Result<(), ApiError> {
    client.delete_milestone(id).await?;
    refresh(client, state).await
}

/// Flip completion. Sends the full field set with `completedDate` stamped
/// today when completing, omitted when un-completing.
pub async fn toggle<S: SessionStore>(
    client: &ApiClient<S>,
    state: Signal<MilestonesState>,
    milestone: &Milestone,
) -> Result<(), ApiError> {
    let today = chrono::Local::now().date_naive();
    update(client, state, milestone.id, milestone.toggle_update(today)).await
}
