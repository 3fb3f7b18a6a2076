//! Dashboard: headline counts, completion charts, the upcoming list, and an
//! AI motivation line that appears once something has been completed.

use api::{ApiError, DashboardStats, Milestone};
use dioxus::prelude::*;
use ui::components::{DonutChart, StatCard, StatusBars};
use ui::icons::{FaBullseye, FaCalendarDay, FaCircleCheck, FaClock};
use ui::{
    make_suggestion_client, milestones, use_auth, use_milestones, AuthState, Client, Icon, Layout,
    Page,
};

use crate::{Guard, Route};

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Guard {
            DashboardView {}
        }
    }
}

#[component]
fn DashboardView() -> Element {
    let mut auth = use_auth();
    let client = use_context::<Client>();
    let state = use_milestones();
    let nav = use_navigator();

    // Refetch on entry; an expired session drops us back to the login view
    // through the guard.
    let _load = use_resource(move || {
        let client = client.clone();
        async move {
            if let Err(ApiError::SessionExpired) = milestones::refresh(&client, state).await {
                auth.set(AuthState::signed_out());
            }
        }
    });

    // Ambient decoration, recomputed when the collection changes. Skipped
    // entirely until at least one milestone is complete.
    let motivation = use_resource(move || async move {
        let completed = state().items.iter().filter(|m| m.completed).count();
        if completed == 0 {
            return None;
        }
        Some(make_suggestion_client().generate_motivation(completed).await)
    });

    let today = chrono::Local::now().date_naive();
    let current = state();
    let stats = DashboardStats::compute(&current.items, today);

    let mut upcoming: Vec<Milestone> = current
        .items
        .iter()
        .filter(|m| m.is_upcoming(today))
        .cloned()
        .collect();
    upcoming.sort_by_key(|m| m.achieve_date);
    upcoming.truncate(5);

    let first_name = auth()
        .user
        .map(|u| u.first_name)
        .unwrap_or_else(|| "there".to_string());
    let rate = stats.rate;

    rsx! {
        Layout {
            active: Page::Dashboard,
            on_navigate: move |page| {
                match page {
                    Page::Dashboard => nav.push(Route::Dashboard {}),
                    Page::Milestones => nav.push(Route::Milestones {}),
                };
            },

            header {
                class: "view-header",
                h2 { "Dashboard" }
                p { class: "view-subtitle", "Welcome back, {first_name}. Here's where your goals stand." }
            }

            if let Some(Some(quote)) = motivation() {
                div {
                    class: "motivation",
                    span { class: "motivation-mark", "\u{201c}" }
                    p { "{quote}" }
                }
            }

            if current.loading && current.items.is_empty() {
                div { class: "panel-loading", span { class: "spinner" } }
            } else {
                div {
                    class: "stat-grid",
                    StatCard {
                        title: "Total Goals",
                        value: stats.total,
                        trend: "all time",
                        accent: "indigo",
                        icon: rsx! { Icon { icon: FaBullseye, width: 18, height: 18 } },
                    }
                    StatCard {
                        title: "Completed",
                        value: stats.completed,
                        trend: "{rate}% done",
                        accent: "green",
                        icon: rsx! { Icon { icon: FaCircleCheck, width: 18, height: 18 } },
                    }
                    StatCard {
                        title: "In Progress",
                        value: stats.pending,
                        trend: "open",
                        accent: "amber",
                        icon: rsx! { Icon { icon: FaClock, width: 18, height: 18 } },
                    }
                    StatCard {
                        title: "Upcoming",
                        value: stats.upcoming,
                        trend: "next 7 days",
                        accent: "sky",
                        icon: rsx! { Icon { icon: FaCalendarDay, width: 18, height: 18 } },
                    }
                }

                div {
                    class: "panel-grid",
                    section {
                        class: "panel",
                        h3 { class: "panel-title", "Completion" }
                        DonutChart { rate: stats.rate }
                    }
                    section {
                        class: "panel",
                        h3 { class: "panel-title", "Status" }
                        StatusBars { completed: stats.completed, pending: stats.pending }
                    }
                    section {
                        class: "panel",
                        h3 { class: "panel-title", "Due soon" }
                        if upcoming.is_empty() {
                            p { class: "panel-empty", "Nothing due in the next 7 days." }
                        } else {
                            ul {
                                class: "upcoming-list",
                                for milestone in upcoming {
                                    UpcomingRow { key: "{milestone.id}", milestone }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UpcomingRow(milestone: Milestone) -> Element {
    let date = milestone
        .achieve_date
        .map(|d| d.to_string())
        .unwrap_or_default();

    rsx! {
        li {
            class: "upcoming-row",
            span { class: "upcoming-title", "{milestone.title}" }
            span { class: "upcoming-date", "{date}" }
        }
    }
}
