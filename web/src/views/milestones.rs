//! Milestone list view: filter tabs, the card list with toggle / edit /
//! delete, a delete confirmation, and the create/edit modal with its manual
//! form and AI-assisted breakdown tab.

use api::{
    ApiError, CreateMilestoneRequest, Milestone, SuggestedMilestone, UpdateMilestoneRequest,
};
use chrono::NaiveDate;
use dioxus::prelude::*;
use ui::components::{DatePicker, Modal};
use ui::icons::{FaCalendar, FaCheck, FaPen, FaPlus, FaTrash, FaWandMagicSparkles};
use ui::{
    make_suggestion_client, milestones, use_auth, use_milestones, AuthState, Client, Icon, Layout,
    Page,
};

use crate::{Guard, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Filter {
    All,
    Pending,
    Completed,
}

impl Filter {
    const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }

    fn keeps(self, milestone: &Milestone) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !milestone.completed,
            Filter::Completed => milestone.completed,
        }
    }
}

/// What the editor modal was opened for.
#[derive(Clone, PartialEq)]
enum Editor {
    Create,
    Edit(Milestone),
}

/// Collapse a mutation result into the view's error slot; an expired session
/// resets auth instead, and the guard takes it from there.
fn settle(
    result: Result<(), ApiError>,
    mut auth: Signal<AuthState>,
    mut error: Signal<Option<String>>,
) {
    match result {
        Ok(()) => error.set(None),
        Err(ApiError::SessionExpired) => auth.set(AuthState::signed_out()),
        Err(err) => error.set(Some(err.to_string())),
    }
}

#[component]
pub fn Milestones() -> Element {
    rsx! {
        Guard {
            MilestonesView {}
        }
    }
}

#[component]
fn MilestonesView() -> Element {
    let auth = use_auth();
    let client = use_context::<Client>();
    let state = use_milestones();
    let nav = use_navigator();

    let mut filter = use_signal(|| Filter::All);
    let mut editor = use_signal(|| Option::<Editor>::None);
    let mut confirm = use_signal(|| Option::<Milestone>::None);
    let error = use_signal(|| Option::<String>::None);

    let load_client = client.clone();
    let _load = use_resource(move || {
        let client = load_client.clone();
        async move {
            settle(milestones::refresh(&client, state).await, auth, error);
        }
    });

    let toggle_client = client.clone();
    let on_toggle = use_callback(move |milestone: Milestone| {
        let client = toggle_client.clone();
        spawn(async move {
            settle(
                milestones::toggle(&client, state, &milestone).await,
                auth,
                error,
            );
        });
    });

    let delete_client = client.clone();
    let on_delete = move |id: i64| {
        let client = delete_client.clone();
        spawn(async move {
            settle(milestones::remove(&client, state, id).await, auth, error);
            confirm.set(None);
        });
    };

    let today = chrono::Local::now().date_naive();
    let current = state();
    let visible: Vec<Milestone> = current
        .items
        .iter()
        .filter(|m| filter().keeps(m))
        .cloned()
        .collect();

    let empty_text = match filter() {
        Filter::All => "No milestones yet. Create your first one to get started.",
        Filter::Pending => "Nothing pending. Time to set a new goal?",
        Filter::Completed => "Nothing completed yet. Keep going!",
    };
    let editor_key = match editor() {
        Some(Editor::Edit(ref m)) => m.id,
        Some(Editor::Create) => 0,
        None => -1,
    };

    rsx! {
        Layout {
            active: Page::Milestones,
            on_navigate: move |page| {
                match page {
                    Page::Dashboard => nav.push(Route::Dashboard {}),
                    Page::Milestones => nav.push(Route::Milestones {}),
                };
            },

            header {
                class: "view-header",
                div {
                    h2 { "Milestones" }
                    p { class: "view-subtitle", "Every goal, one step at a time." }
                }
                button {
                    class: "primary-button",
                    onclick: move |_| editor.set(Some(Editor::Create)),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "New Milestone" }
                }
            }

            if let Some(err) = error() {
                div { class: "error-banner", "{err}" }
            }

            div {
                class: "filter-tabs",
                for option in Filter::ALL {
                    button {
                        key: "{option.label()}",
                        class: if filter() == option { "filter-tab active" } else { "filter-tab" },
                        onclick: move |_| filter.set(option),
                        "{option.label()}"
                    }
                }
            }

            if current.loading && current.items.is_empty() {
                div { class: "panel-loading", span { class: "spinner" } }
            } else if visible.is_empty() {
                p { class: "panel-empty", "{empty_text}" }
            } else {
                div {
                    class: "milestone-list",
                    for milestone in visible {
                        MilestoneCard {
                            key: "{milestone.id}",
                            milestone: milestone.clone(),
                            today,
                            on_toggle,
                            on_edit: move |m: Milestone| editor.set(Some(Editor::Edit(m))),
                            on_delete: move |m: Milestone| confirm.set(Some(m)),
                        }
                    }
                }
            }

            if let Some(mode) = editor() {
                MilestoneEditor {
                    key: "{editor_key}",
                    mode,
                    on_close: move |_| editor.set(None),
                }
            }

            if let Some(target) = confirm() {
                Modal {
                    on_close: move |_| confirm.set(None),
                    div {
                        class: "confirm",
                        h3 { "Delete milestone" }
                        p { "\"{target.title}\" will be permanently removed." }
                        div {
                            class: "modal-actions",
                            button {
                                class: "ghost-button",
                                onclick: move |_| confirm.set(None),
                                "Cancel"
                            }
                            button {
                                class: "danger-button",
                                onclick: move |_| on_delete(target.id),
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MilestoneCard(
    milestone: Milestone,
    today: NaiveDate,
    on_toggle: EventHandler<Milestone>,
    on_edit: EventHandler<Milestone>,
    on_delete: EventHandler<Milestone>,
) -> Element {
    let overdue = milestone.is_overdue(today);
    let target = milestone.achieve_date.map(|d| d.to_string());
    let done_on = milestone.completed_date.map(|d| d.to_string());

    let card_class = if milestone.completed {
        "milestone-card completed"
    } else if overdue {
        "milestone-card overdue"
    } else {
        "milestone-card"
    };
    let date_class = if overdue {
        "milestone-date overdue"
    } else {
        "milestone-date"
    };

    let toggled = milestone.clone();
    let edited = milestone.clone();
    let deleted = milestone.clone();

    rsx! {
        div {
            class: "{card_class}",

            button {
                class: if milestone.completed { "toggle-dot checked" } else { "toggle-dot" },
                onclick: move |_| on_toggle.call(toggled.clone()),
                if milestone.completed {
                    Icon { icon: FaCheck, width: 12, height: 12 }
                }
            }

            div {
                class: "milestone-body",
                h4 { class: "milestone-title", "{milestone.title}" }
                if let Some(ref description) = milestone.description {
                    p { class: "milestone-description", "{description}" }
                }
                div {
                    class: "milestone-meta",
                    if let Some(ref target) = target {
                        span {
                            class: "{date_class}",
                            Icon { icon: FaCalendar, width: 12, height: 12 }
                            "{target}"
                        }
                    }
                    if let Some(ref done_on) = done_on {
                        span { class: "milestone-done-badge", "Done on {done_on}" }
                    }
                }
            }

            div {
                class: "milestone-actions",
                button {
                    class: "icon-button",
                    onclick: move |_| on_edit.call(edited.clone()),
                    Icon { icon: FaPen, width: 14, height: 14 }
                }
                button {
                    class: "icon-button danger",
                    onclick: move |_| on_delete.call(deleted.clone()),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorTab {
    Manual,
    Assist,
}

/// Create / edit modal. Creation offers the manual form and the AI-assisted
/// breakdown; editing is always the manual form.
#[component]
fn MilestoneEditor(mode: Editor, on_close: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let client = use_context::<Client>();
    let state = use_milestones();

    let milestone = match mode {
        Editor::Create => None,
        Editor::Edit(m) => Some(m),
    };
    let editing_id = milestone.as_ref().map(|m| m.id);
    let seed_title = milestone.as_ref().map(|m| m.title.clone()).unwrap_or_default();
    let seed_description = milestone
        .as_ref()
        .and_then(|m| m.description.clone())
        .unwrap_or_default();
    let seed_date = milestone
        .as_ref()
        .and_then(|m| m.achieve_date)
        .map(|d| d.to_string())
        .unwrap_or_default();

    let mut tab = use_signal(|| EditorTab::Manual);
    let mut title = use_signal(move || seed_title);
    let mut description = use_signal(move || seed_description);
    let mut achieve_date = use_signal(move || seed_date);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // AI-assist state
    let mut prompt = use_signal(String::new);
    let mut suggestions = use_signal(Vec::<SuggestedMilestone>::new);
    let mut assist_error = use_signal(|| Option::<String>::None);
    let mut thinking = use_signal(|| false);

    let save_client = client.clone();
    let save = move |evt: FormEvent| {
        evt.prevent_default();
        if title().trim().is_empty() {
            form_error.set(Some("Title is required".to_string()));
            return;
        }
        let client = save_client.clone();
        spawn(async move {
            saving.set(true);
            form_error.set(None);

            let trimmed = description();
            let description = (!trimmed.trim().is_empty()).then(|| trimmed.trim().to_string());
            let achieve_date: Option<NaiveDate> = achieve_date().parse().ok();

            let result = match editing_id {
                Some(id) => {
                    let request = UpdateMilestoneRequest {
                        title: Some(title().trim().to_string()),
                        description,
                        achieve_date,
                        completed: None,
                        completed_date: None,
                    };
                    milestones::update(&client, state, id, request).await
                }
                None => {
                    let request = CreateMilestoneRequest {
                        title: title().trim().to_string(),
                        description,
                        achieve_date,
                    };
                    milestones::create(&client, state, request).await
                }
            };
            saving.set(false);

            match result {
                Ok(()) => on_close.call(()),
                Err(ApiError::SessionExpired) => auth.set(AuthState::signed_out()),
                Err(err) => form_error.set(Some(err.to_string())),
            }
        });
    };

    let ask = move |_| {
        if prompt().trim().is_empty() {
            return;
        }
        spawn(async move {
            thinking.set(true);
            assist_error.set(None);
            match make_suggestion_client().suggest_breakdown(&prompt()).await {
                Ok(list) => suggestions.set(list),
                Err(err) => assist_error.set(Some(err.to_string())),
            }
            thinking.set(false);
        });
    };

    let accept_client = client.clone();
    let accept = use_callback(move |suggestion: SuggestedMilestone| {
        let client = accept_client.clone();
        spawn(async move {
            let today = chrono::Local::now().date_naive();
            let request = suggestion.to_create_request(today);
            match milestones::create(&client, state, request).await {
                Ok(()) => suggestions.write().retain(|s| s != &suggestion),
                Err(ApiError::SessionExpired) => auth.set(AuthState::signed_out()),
                Err(err) => assist_error.set(Some(err.to_string())),
            }
        });
    });

    let heading = if editing_id.is_some() {
        "Edit Milestone"
    } else {
        "New Milestone"
    };
    let save_label = if saving() { "Saving..." } else { "Save" };

    rsx! {
        Modal {
            on_close: move |_| on_close.call(()),

            h3 { class: "modal-title", "{heading}" }

            if editing_id.is_none() {
                div {
                    class: "editor-tabs",
                    button {
                        r#type: "button",
                        class: if tab() == EditorTab::Manual { "editor-tab active" } else { "editor-tab" },
                        onclick: move |_| tab.set(EditorTab::Manual),
                        "Manual"
                    }
                    button {
                        r#type: "button",
                        class: if tab() == EditorTab::Assist { "editor-tab active" } else { "editor-tab" },
                        onclick: move |_| tab.set(EditorTab::Assist),
                        Icon { icon: FaWandMagicSparkles, width: 12, height: 12 }
                        span { "AI Assist" }
                    }
                }
            }

            if tab() == EditorTab::Manual || editing_id.is_some() {
                form {
                    class: "editor-form",
                    onsubmit: save,

                    if let Some(err) = form_error() {
                        p { class: "notice error", "{err}" }
                    }

                    div {
                        class: "field",
                        label { class: "field-label", "Title" }
                        input {
                            value: "{title}",
                            placeholder: "What do you want to achieve?",
                            oninput: move |evt| title.set(evt.value()),
                        }
                    }
                    div {
                        class: "field",
                        label { class: "field-label", "Description" }
                        textarea {
                            value: "{description}",
                            placeholder: "Optional details",
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                    DatePicker {
                        label: "Target date",
                        value: achieve_date(),
                        on_change: move |value| achieve_date.set(value),
                    }

                    div {
                        class: "modal-actions",
                        button {
                            r#type: "button",
                            class: "ghost-button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "primary-button",
                            disabled: saving(),
                            "{save_label}"
                        }
                    }
                }
            } else {
                div {
                    class: "assist-pane",
                    p { class: "assist-hint",
                        "Describe a big goal and it will be broken into concrete milestones."
                    }

                    if let Some(err) = assist_error() {
                        p { class: "notice error", "{err}" }
                    }

                    div {
                        class: "assist-prompt",
                        input {
                            value: "{prompt}",
                            placeholder: "e.g. Run a marathon in six months",
                            oninput: move |evt| prompt.set(evt.value()),
                        }
                        button {
                            r#type: "button",
                            class: "primary-button",
                            disabled: thinking(),
                            onclick: ask,
                            if thinking() { "Thinking..." } else { "Suggest" }
                        }
                    }

                    ul {
                        class: "suggestion-list",
                        for suggestion in suggestions() {
                            SuggestionRow {
                                key: "{suggestion.title}",
                                suggestion: suggestion.clone(),
                                on_accept: accept,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SuggestionRow(
    suggestion: SuggestedMilestone,
    on_accept: EventHandler<SuggestedMilestone>,
) -> Element {
    let accepted = suggestion.clone();

    rsx! {
        li {
            class: "suggestion-row",
            div {
                class: "suggestion-body",
                h4 { "{suggestion.title}" }
                p { "{suggestion.description}" }
                span { class: "suggestion-days", "in {suggestion.days_from_now} days" }
            }
            button {
                class: "accept-button",
                onclick: move |_| on_accept.call(accepted.clone()),
                Icon { icon: FaPlus, width: 12, height: 12 }
                span { "Add" }
            }
        }
    }
}
